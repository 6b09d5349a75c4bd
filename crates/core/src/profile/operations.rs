use super::error::ProfileError;

/// Validates a username before a user is created.
///
/// Only the space character is rejected; tabs and other whitespace pass.
pub fn validate_username(username: &str) -> Result<(), ProfileError> {
    if username.contains(' ') {
        return Err(ProfileError::UsernameContainsSpace);
    }
    Ok(())
}
