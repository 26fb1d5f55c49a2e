use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::human_resource::domain::entities::{HumanResource, HumanResourcePayload};
use crate::shared::crud::UseCaseError;
use crate::shared::patch::NoPatchableFields;
use crate::shared::persistence::{PageRequest, PageResult};

#[async_trait]
pub trait HumanResourceUseCase: Send + Sync {
    async fn create(&self, payload: HumanResourcePayload) -> Result<HumanResource, UseCaseError>;

    async fn update(
        &self,
        id: Uuid,
        payload: HumanResourcePayload,
    ) -> Result<HumanResource, UseCaseError>;

    async fn partial_update(
        &self,
        id: Uuid,
        patch: NoPatchableFields,
    ) -> Result<HumanResource, UseCaseError>;

    async fn find_all(&self, page: PageRequest)
        -> Result<PageResult<HumanResource>, UseCaseError>;

    async fn find_one(&self, id: Uuid) -> Result<HumanResource, UseCaseError>;

    async fn delete(&self, id: Uuid) -> Result<(), UseCaseError>;
}
