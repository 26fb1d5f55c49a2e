use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Credential hashing failed")]
    HashFailed,

    #[error("Hashing task was cancelled or panicked")]
    TaskFailed,
}

/// One-way credential hashing for newly provisioned Users.
/// Implementations must not block the async runtime.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;
}
