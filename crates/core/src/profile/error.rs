use thiserror::Error;

/// Errors raised while validating user or favorites payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Username cannot contain spaces")]
    UsernameContainsSpace,
    #[error("Update must contain either 'tid' or 'password'")]
    EmptyUserUpdate,
}
