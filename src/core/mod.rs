pub mod error;
pub mod timestamp;

pub use error::{AppError, Result};
