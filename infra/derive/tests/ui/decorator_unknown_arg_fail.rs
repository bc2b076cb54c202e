use adi_derive::decorator;

#[decorator(retries = 3)]
pub struct Retrying;

fn main() {}
