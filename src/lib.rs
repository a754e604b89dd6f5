pub mod error;
pub mod input;
pub mod rewrite;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
