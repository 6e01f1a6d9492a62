/**
 * User Credentials
 *
 * Account creation and credential matching on top of a `BlogStore`.
 * Passwords are hashed with bcrypt before they reach the store and are
 * only ever compared through `bcrypt::verify`.
 */

use bcrypt::{hash, verify, BcryptError};
use thiserror::Error;

use crate::backend::store::{BlogStore, NewUser, StoreError};
use crate::shared::{SignupInput, UserId};

/// Credential failures
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("password hashing failed: {0}")]
    Hash(#[from] BcryptError),
}

/// Create a user from a signup request
///
/// # Arguments
/// * `store` - User store
/// * `input` - Signup fields; the password is hashed with `cost`
/// * `cost` - bcrypt cost factor
///
/// # Returns
/// Identity of the new user
pub async fn create_user(
    store: &dyn BlogStore,
    input: SignupInput,
    cost: u32,
) -> Result<UserId, CredentialError> {
    let password_hash = hash(&input.password, cost)?;

    let id = store
        .create_user(NewUser {
            username: input.username,
            name: input.name,
            password_hash,
        })
        .await?;

    Ok(id)
}

/// Find the user whose username and password both match
///
/// Returns `Ok(None)` for an unknown username or a wrong password; callers
/// cannot tell the two apart.
pub async fn find_user_by_credentials(
    store: &dyn BlogStore,
    username: &str,
    password: &str,
) -> Result<Option<UserId>, CredentialError> {
    let Some(user) = store.find_user_by_username(username).await? else {
        return Ok(None);
    };

    if verify(password, &user.password_hash)? {
        Ok(Some(user.id))
    } else {
        Ok(None)
    }
}
