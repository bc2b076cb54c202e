use adi_derive::adi_error;
use std::borrow::Cow;

#[adi_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err::<(), _>(std::io::Error::other("boom")).context("Reading fixture")?;
    Ok(())
}

fn main() {
    let _ = read();
    let _: DemoError = "fallback".into();
}
