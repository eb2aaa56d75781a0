//! Cross-cutting request concerns.

pub mod error;

pub use error::{AppError, AppResult};
