use adi_derive::decorator;

#[decorator]
pub struct Borrowed<'a> {
    pub name: &'a str,
}

fn main() {}
