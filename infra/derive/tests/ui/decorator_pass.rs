use adi_derive::decorator;
use adi_kernel::domain::features::FeatureFlag;
use adi_kernel::domain::registry::Decorates;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flags: u32 {
        const LOGGING = 1;
    }
}

impl FeatureFlag for Flags {}

pub trait Greeter {}

#[decorator]
pub struct Bare;

#[decorator(service = dyn Greeter, order = 2, key = "primary", flags = Flags, feature = Flags::LOGGING)]
pub struct Logging {
    pub inner: Box<dyn Greeter>,
}

#[decorator(open_generics_wildcard = false)]
pub struct Wrapper<T>(pub T);

fn main() {
    let _ = <Bare as Decorates>::decorator();
    let _ = <Logging as Decorates<Flags>>::decorator();
    let _ = <Wrapper<u8> as Decorates>::decorator();
}
