//! Shared application state.
//!
//! Holds repository trait objects so handlers never see the concrete
//! storage backend.

use std::sync::Arc;

use holocron_core::storage::{FavoritesRepository, ThemeRepository, UserRepository};

/// Shared application state, cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub themes: Arc<dyn ThemeRepository>,
    pub users: Arc<dyn UserRepository>,
    pub favorites: Arc<dyn FavoritesRepository>,
}

impl AppState {
    /// Build the state from a single backend implementing every repository.
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: ThemeRepository + UserRepository + FavoritesRepository + 'static,
    {
        Self {
            themes: repository.clone(),
            users: repository.clone(),
            favorites: repository,
        }
    }
}
