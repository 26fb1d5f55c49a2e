use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, UserRepositoryError>;

    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    async fn update_user(&self, user: User) -> Result<User, UserRepositoryError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
