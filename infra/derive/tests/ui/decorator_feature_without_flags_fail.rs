use adi_derive::decorator;

#[decorator(feature = Flags::LOGGING)]
pub struct Logging;

fn main() {}
