pub mod error;
pub mod favorites;
pub mod payload;
pub mod root;
pub mod themes;
pub mod users;

pub use error::AppError;
