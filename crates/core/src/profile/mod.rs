mod error;
mod operations;
mod requests;
mod types;

pub use error::ProfileError;
pub use operations::validate_username;
pub use requests::{CreateUserRequest, UpdateFavoritesRequest, UpdateUserRequest, UserChange};
pub use types::{Favorites, Theme, User, SEED_THEMES};
