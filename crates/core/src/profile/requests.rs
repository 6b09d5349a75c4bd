//! API request types for user and favorites operations.
//!
//! Pure data types; the HTTP layer deserializes them from JSON bodies and the
//! storage layer consumes the validated result.

use serde::{Deserialize, Serialize};

use super::error::ProfileError;
use super::operations::validate_username;
use super::types::{Favorites, User};
use crate::serde::{deserialize_present, deserialize_required_nullable};

/// Request payload for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

impl CreateUserRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check the payload before it reaches storage.
    pub fn validate(&self) -> Result<(), ProfileError> {
        validate_username(&self.username)
    }
}

/// Request payload for updating a user.
///
/// At most one field is applied per request; see [`UpdateUserRequest::into_change`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// `Some(None)` means the key was sent with `null` and clears the theme.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub tid: Option<Option<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// The single field change extracted from an [`UpdateUserRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserChange {
    Theme(Option<i64>),
    Password(String),
}

impl UpdateUserRequest {
    pub fn with_tid(mut self, tid: Option<i64>) -> Self {
        self.tid = Some(tid);
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Pick the field to update. `tid` wins over `password`.
    pub fn into_change(self) -> Result<UserChange, ProfileError> {
        match (self.tid, self.password) {
            (Some(tid), _) => Ok(UserChange::Theme(tid)),
            (None, Some(password)) => Ok(UserChange::Password(password)),
            (None, None) => Err(ProfileError::EmptyUserUpdate),
        }
    }
}

impl UserChange {
    pub fn apply_to(&self, user: &mut User) {
        match self {
            UserChange::Theme(tid) => user.tid = *tid,
            UserChange::Password(password) => user.password = password.clone(),
        }
    }
}

/// Request payload for overwriting a favorites record.
///
/// Every key must be present in the JSON body; values may be `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFavoritesRequest {
    #[serde(deserialize_with = "deserialize_required_nullable")]
    pub character: Option<String>,
    #[serde(deserialize_with = "deserialize_required_nullable")]
    pub film: Option<String>,
    #[serde(deserialize_with = "deserialize_required_nullable")]
    pub starship: Option<String>,
    #[serde(deserialize_with = "deserialize_required_nullable")]
    pub vehicle: Option<String>,
    #[serde(deserialize_with = "deserialize_required_nullable")]
    pub species: Option<String>,
    #[serde(deserialize_with = "deserialize_required_nullable")]
    pub planet: Option<String>,
}

impl UpdateFavoritesRequest {
    /// Overwrite every field of `favorites`, keeping its id.
    pub fn apply_to(self, favorites: &mut Favorites) {
        favorites.character = self.character;
        favorites.film = self.film;
        favorites.starship = self.starship;
        favorites.vehicle = self.vehicle;
        favorites.species = self.species;
        favorites.planet = self.planet;
    }
}
