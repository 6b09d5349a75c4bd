use async_trait::async_trait;

use crate::profile::{CreateUserRequest, Favorites, Theme, User, UserChange};

use super::Result;

/// Repository for theme lookups.
#[async_trait]
pub trait ThemeRepository: Send + Sync {
    /// Gets a theme by its ID. Fails with `NotFound` if absent.
    async fn find_theme(&self, id: i64) -> Result<Theme>;
}

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by username. Fails with `NotFound` if absent.
    async fn find_user(&self, username: &str) -> Result<User>;

    /// Lists the ids of every user, in ascending order.
    async fn list_user_ids(&self) -> Result<Vec<i64>>;

    /// Creates a user together with its empty favorites record.
    ///
    /// Fails with `AlreadyExists` when the username is taken.
    async fn create_user(&self, request: &CreateUserRequest) -> Result<User>;

    /// Persists a single field change and returns the updated user.
    async fn update_user(&self, user: User, change: UserChange) -> Result<User>;

    /// Deletes a user by ID. The favorites record is left in place and a
    /// missing row is not an error.
    async fn delete_user(&self, id: i64) -> Result<()>;
}

/// Repository for favorites operations.
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    /// Gets a favorites record by its ID. Fails with `NotFound` if absent.
    async fn find_favorites(&self, id: i64) -> Result<Favorites>;

    /// Overwrites every field of an existing favorites record.
    async fn update_favorites(&self, favorites: &Favorites) -> Result<()>;
}
