use async_trait::async_trait;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::modules::auth::application::orchestrator::user_provisioning::USER_REQUIRED;
use crate::modules::auth::application::orchestrator::{NewIdentity, UserProvisioner};
use crate::modules::collaborator::application::ports::outgoing::CollaboratorLookup;
use crate::modules::collaborator::application::use_cases::CollaboratorUseCase;
use crate::modules::collaborator::domain::entities::{Collaborator, CollaboratorPayload};
use crate::modules::cv::application::orchestrator::CvOwnershipSynchronizer;
use crate::shared::crud::{
    ensure_matching_id, ensure_new, CrudService, CrudUseCase, UseCaseError,
};
use crate::shared::patch::NoPatchableFields;
use crate::shared::persistence::{CrudRepository, Document, PageRequest, PageResult};

pub const CV_ALREADY_CLAIMED: &str = "CV_ALREADY_CLAIMED";

pub struct CollaboratorService<R> {
    collaborators: R,
    records: CrudService<Collaborator, R>,
    users: UserProvisioner,
    cv_ownership: CvOwnershipSynchronizer,
}

impl<R> CollaboratorService<R>
where
    R: CrudRepository<Collaborator> + CollaboratorLookup + Clone,
{
    pub fn new(
        collaborators: R,
        users: UserProvisioner,
        cv_ownership: CvOwnershipSynchronizer,
    ) -> Self {
        Self {
            records: CrudService::new(collaborators.clone()),
            collaborators,
            users,
            cv_ownership,
        }
    }

    /// A Cv belongs to at most one Collaborator; `owner` may keep its own.
    async fn ensure_cv_unclaimed(
        &self,
        cv_id: Uuid,
        owner: Option<Uuid>,
    ) -> Result<(), UseCaseError> {
        match self.collaborators.find_by_cv_id(cv_id).await? {
            Some(claimant) if claimant.id != owner => Err(UseCaseError::invalid(
                CV_ALREADY_CLAIMED,
                format!("Cv {cv_id} already belongs to another collaborator"),
            )),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<R> CollaboratorUseCase for CollaboratorService<R>
where
    R: CrudRepository<Collaborator> + CollaboratorLookup + Clone,
{
    async fn create(&self, payload: CollaboratorPayload) -> Result<Collaborator, UseCaseError> {
        debug!("Request to save Collaborator : {:?}", payload);
        ensure_new(Collaborator::ENTITY_NAME, payload.id)?;

        let cv = payload.existing_cv_id();
        let identity = NewIdentity::from_embedded(payload.user)?;
        if let Some(cv_id) = cv {
            self.ensure_cv_unclaimed(cv_id, None).await?;
        }

        let user = self.users.provision(identity).await?;

        let collaborator = Collaborator {
            id: None,
            user: user.id,
            cv,
        };

        self.collaborators.save(collaborator).await.map_err(|e| {
            warn!(
                "User {} was created but its collaborator could not be saved: {}",
                user.id, e
            );
            UseCaseError::from(e)
        })
    }

    async fn update(
        &self,
        id: Uuid,
        payload: CollaboratorPayload,
    ) -> Result<Collaborator, UseCaseError> {
        debug!("Request to update Collaborator {} : {:?}", id, payload);
        ensure_matching_id(id, payload.id)?;

        let embedded = payload
            .user
            .as_ref()
            .ok_or_else(|| UseCaseError::invalid(USER_REQUIRED, "An embedded user is required"))?;

        // every lookup happens before the first write
        if !self.collaborators.exists_by_id(id).await? {
            return Err(UseCaseError::not_found(Collaborator::ENTITY_NAME));
        }
        let user = self.users.find_existing(embedded).await?;
        let cv = match payload.existing_cv_id() {
            Some(cv_id) => {
                self.ensure_cv_unclaimed(cv_id, Some(id)).await?;
                Some(self.cv_ownership.find_cv(cv_id).await?)
            }
            None => None,
        };

        let user = self.users.rename(user, embedded).await?;

        // a previously linked Cv keeps its back-reference
        let cv = match cv {
            Some(cv) => self.cv_ownership.link_cv_to_collaborator(cv, id).await?.id,
            None => None,
        };

        Ok(self
            .collaborators
            .save(Collaborator {
                id: Some(id),
                user: user.id,
                cv,
            })
            .await?)
    }

    async fn partial_update(
        &self,
        id: Uuid,
        patch: NoPatchableFields,
    ) -> Result<Collaborator, UseCaseError> {
        self.records.partial_update(id, patch).await
    }

    async fn find_all(&self, page: PageRequest) -> Result<PageResult<Collaborator>, UseCaseError> {
        self.records.find_all(page).await
    }

    async fn find_one(&self, id: Uuid) -> Result<Collaborator, UseCaseError> {
        self.records.find_one(id).await
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Collaborator, UseCaseError> {
        debug!("Request to get Collaborator for user : {}", user_id);

        self.collaborators
            .find_by_user_id(user_id)
            .await?
            .ok_or(UseCaseError::not_found(Collaborator::ENTITY_NAME))
    }

    async fn delete(&self, id: Uuid) -> Result<(), UseCaseError> {
        self.records.delete(id).await
    }
}
