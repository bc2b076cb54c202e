use adi_derive::decorator;

#[decorator(order = 1, order = 2)]
pub struct Ordered;

fn main() {}
