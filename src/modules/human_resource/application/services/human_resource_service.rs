use async_trait::async_trait;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::modules::auth::application::orchestrator::user_provisioning::USER_REQUIRED;
use crate::modules::auth::application::orchestrator::{NewIdentity, UserProvisioner};
use crate::modules::human_resource::application::use_cases::HumanResourceUseCase;
use crate::modules::human_resource::domain::entities::{HumanResource, HumanResourcePayload};
use crate::shared::crud::{
    ensure_matching_id, ensure_new, CrudService, CrudUseCase, UseCaseError,
};
use crate::shared::patch::NoPatchableFields;
use crate::shared::persistence::{CrudRepository, Document, PageRequest, PageResult};

pub struct HumanResourceService<R> {
    human_resources: R,
    records: CrudService<HumanResource, R>,
    users: UserProvisioner,
}

impl<R> HumanResourceService<R>
where
    R: CrudRepository<HumanResource> + Clone,
{
    pub fn new(human_resources: R, users: UserProvisioner) -> Self {
        Self {
            records: CrudService::new(human_resources.clone()),
            human_resources,
            users,
        }
    }
}

#[async_trait]
impl<R> HumanResourceUseCase for HumanResourceService<R>
where
    R: CrudRepository<HumanResource> + Clone,
{
    async fn create(&self, payload: HumanResourcePayload) -> Result<HumanResource, UseCaseError> {
        debug!("Request to save HumanResource : {:?}", payload);
        ensure_new(HumanResource::ENTITY_NAME, payload.id)?;

        let identity = NewIdentity::from_embedded(payload.user)?;
        let user = self.users.provision(identity).await?;

        self.human_resources
            .save(HumanResource {
                id: None,
                user: user.id,
            })
            .await
            .map_err(|e| {
                warn!(
                    "User {} was created but its human resource could not be saved: {}",
                    user.id, e
                );
                UseCaseError::from(e)
            })
    }

    async fn update(
        &self,
        id: Uuid,
        payload: HumanResourcePayload,
    ) -> Result<HumanResource, UseCaseError> {
        debug!("Request to update HumanResource {} : {:?}", id, payload);
        ensure_matching_id(id, payload.id)?;

        let embedded = payload
            .user
            .as_ref()
            .ok_or_else(|| UseCaseError::invalid(USER_REQUIRED, "An embedded user is required"))?;

        if !self.human_resources.exists_by_id(id).await? {
            return Err(UseCaseError::not_found(HumanResource::ENTITY_NAME));
        }
        let user = self.users.find_existing(embedded).await?;

        let user = self.users.rename(user, embedded).await?;

        Ok(self
            .human_resources
            .save(HumanResource {
                id: Some(id),
                user: user.id,
            })
            .await?)
    }

    async fn partial_update(
        &self,
        id: Uuid,
        patch: NoPatchableFields,
    ) -> Result<HumanResource, UseCaseError> {
        self.records.partial_update(id, patch).await
    }

    async fn find_all(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<HumanResource>, UseCaseError> {
        self.records.find_all(page).await
    }

    async fn find_one(&self, id: Uuid) -> Result<HumanResource, UseCaseError> {
        self.records.find_one(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), UseCaseError> {
        self.records.delete(id).await
    }
}
