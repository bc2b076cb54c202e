pub mod decorator;
pub mod error;
