pub mod error;
pub mod types;

pub use error::EncoreError;
pub use types::*;
