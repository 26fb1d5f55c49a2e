use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::collaborator::domain::entities::Collaborator;
use crate::shared::persistence::RepositoryError;

#[async_trait]
pub trait CollaboratorLookup: Send + Sync {
    async fn find_by_cv_id(&self, cv_id: Uuid) -> Result<Option<Collaborator>, RepositoryError>;

    async fn find_by_user_id(&self, user_id: Uuid)
        -> Result<Option<Collaborator>, RepositoryError>;
}
