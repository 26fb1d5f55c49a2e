use async_trait::async_trait;
use bcrypt::hash;

use crate::modules::auth::application::ports::outgoing::{HashError, PasswordHasher};

/// Produces `$2b$` hashes, the format the seed migration writes.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || hash(password, cost).map_err(|_| HashError::HashFailed))
            .await
            .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcrypt::verify;

    #[tokio::test]
    async fn test_bcrypt_hash_verifies() {
        let hasher = BcryptHasher::new(4);

        let hashed_password = hasher.hash_password("SecurePassword123").await.unwrap();

        assert!(verify("SecurePassword123", &hashed_password).unwrap());
        assert!(!verify("WrongPassword", &hashed_password).unwrap());
    }

    #[tokio::test]
    async fn test_cost_is_encoded_in_hash() {
        let hasher = BcryptHasher::new(5);

        let hashed_password = hasher.hash_password("pw").await.unwrap();

        assert!(hashed_password.starts_with("$2b$05$"));
    }

    #[tokio::test]
    async fn test_invalid_cost_is_hash_error() {
        let hasher = BcryptHasher::new(99);

        let result = hasher.hash_password("pw").await;

        assert_eq!(result, Err(HashError::HashFailed));
    }
}
