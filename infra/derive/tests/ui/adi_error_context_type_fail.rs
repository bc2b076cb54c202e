use adi_derive::adi_error;

#[adi_error]
pub enum DemoError {
    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        context: String,
    },
}

fn main() {}
