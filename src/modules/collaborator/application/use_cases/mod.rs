use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::collaborator::domain::entities::{Collaborator, CollaboratorPayload};
use crate::shared::crud::UseCaseError;
use crate::shared::patch::NoPatchableFields;
use crate::shared::persistence::{PageRequest, PageResult};

#[async_trait]
pub trait CollaboratorUseCase: Send + Sync {
    async fn create(&self, payload: CollaboratorPayload) -> Result<Collaborator, UseCaseError>;

    async fn update(
        &self,
        id: Uuid,
        payload: CollaboratorPayload,
    ) -> Result<Collaborator, UseCaseError>;

    async fn partial_update(
        &self,
        id: Uuid,
        patch: NoPatchableFields,
    ) -> Result<Collaborator, UseCaseError>;

    async fn find_all(&self, page: PageRequest) -> Result<PageResult<Collaborator>, UseCaseError>;

    async fn find_one(&self, id: Uuid) -> Result<Collaborator, UseCaseError>;

    async fn find_by_user(&self, user_id: Uuid) -> Result<Collaborator, UseCaseError>;

    async fn delete(&self, id: Uuid) -> Result<(), UseCaseError>;
}
