use thiserror::Error;

use crate::profile::ProfileError;

/// Errors that can occur during repository operations.
///
/// `NotFound`, `AlreadyExists` and `InvalidData` are domain failures the HTTP
/// layer answers with a fixed status and body. The remaining variants are
/// storage failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("No such {entity_type}: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl RepositoryError {
    /// Whether the error comes from the database rather than the request.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            RepositoryError::ConnectionFailed(_) | RepositoryError::QueryFailed(_)
        )
    }
}

impl From<ProfileError> for RepositoryError {
    fn from(err: ProfileError) -> Self {
        RepositoryError::InvalidData(err.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "User",
            id: "jabba".to_string(),
        };
        assert_eq!(error.to_string(), "No such User: jabba");
    }

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "User",
            id: "lando".to_string(),
        };
        assert_eq!(error.to_string(), "User already exists: lando");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("unable to open database file".to_string());
        assert_eq!(
            error.to_string(),
            "Connection failed: unable to open database file"
        );
    }

    #[test]
    fn test_profile_error_becomes_invalid_data() {
        let error: RepositoryError = ProfileError::UsernameContainsSpace.into();
        assert_eq!(
            error,
            RepositoryError::InvalidData("Username cannot contain spaces".to_string())
        );
    }

    #[test]
    fn test_storage_failure_classification() {
        assert!(RepositoryError::QueryFailed("boom".to_string()).is_storage_failure());
        assert!(RepositoryError::ConnectionFailed("boom".to_string()).is_storage_failure());
        assert!(!RepositoryError::InvalidData("bad".to_string()).is_storage_failure());
        assert!(!RepositoryError::NotFound {
            entity_type: "Theme",
            id: "99".to_string()
        }
        .is_storage_failure());
    }
}
