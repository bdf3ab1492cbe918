//! Salted password hashing. bcrypt embeds the salt and cost in the hash
//! string and compares in constant time. Both operations are CPU bound and
//! run on the blocking pool.

use thiserror::Error;
use tokio::sync::OnceCell;

/// Hash of a throwaway password, compared against when a login names no
/// known user so that path costs one bcrypt verification too.
static DECOY_HASH: OnceCell<String> = OnceCell::const_new();

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("password worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

pub async fn hash_password(password: String, cost: u32) -> Result<String, PasswordError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, PasswordError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(matches)
}

/// Spend a full verification on a missing account. Always `false`.
pub async fn verify_decoy(password: String, cost: u32) -> Result<bool, PasswordError> {
    let hash = DECOY_HASH
        .get_or_try_init(|| hash_password("decoy-password-never-issued".to_string(), cost))
        .await?;
    verify_password(password, hash.clone()).await?;
    Ok(false)
}
