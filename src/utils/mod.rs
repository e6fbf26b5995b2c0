pub mod date;
pub mod error;
pub mod format;

pub use error::{AppError, AppResult};
