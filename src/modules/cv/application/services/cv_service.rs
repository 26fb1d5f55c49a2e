use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::modules::cv::application::orchestrator::CvOwnershipSynchronizer;
use crate::modules::cv::domain::entities::{Cv, PatchCvData};
use crate::shared::crud::{ensure_matching_id, ensure_new, CrudUseCase, UseCaseError};
use crate::shared::patch::Merge;
use crate::shared::persistence::{CrudRepository, Document, PageRequest, PageResult};

pub struct CvService<R> {
    cvs: R,
    ownership: CvOwnershipSynchronizer,
}

impl<R> CvService<R>
where
    R: CrudRepository<Cv>,
{
    pub fn new(cvs: R, ownership: CvOwnershipSynchronizer) -> Self {
        Self { cvs, ownership }
    }

    async fn save(&self, cv: Cv) -> Result<Cv, UseCaseError> {
        let cv = self.ownership.attach_owner_if_missing(cv).await?;
        Ok(self.cvs.save(cv).await?)
    }
}

#[async_trait]
impl<R> CrudUseCase<Cv> for CvService<R>
where
    R: CrudRepository<Cv>,
{
    async fn create(&self, cv: Cv) -> Result<Cv, UseCaseError> {
        debug!("Request to save Cv : {:?}", cv);
        ensure_new(Cv::ENTITY_NAME, cv.id)?;

        self.save(cv).await
    }

    async fn update(&self, id: Uuid, cv: Cv) -> Result<Cv, UseCaseError> {
        debug!("Request to update Cv {} : {:?}", id, cv);
        ensure_matching_id(id, cv.id)?;

        if !self.cvs.exists_by_id(id).await? {
            return Err(UseCaseError::not_found(Cv::ENTITY_NAME));
        }

        self.save(cv).await
    }

    async fn partial_update(&self, id: Uuid, patch: PatchCvData) -> Result<Cv, UseCaseError> {
        debug!("Request to partially update Cv {} : {:?}", id, patch);

        let existing = self
            .cvs
            .find_by_id(id)
            .await?
            .ok_or(UseCaseError::not_found(Cv::ENTITY_NAME))?;

        Ok(self.cvs.save(existing.merge(patch)).await?)
    }

    async fn find_all(&self, page: PageRequest) -> Result<PageResult<Cv>, UseCaseError> {
        debug!("Request to get all Cvs");
        Ok(self.cvs.find_page(page.normalized()).await?)
    }

    async fn find_one(&self, id: Uuid) -> Result<Cv, UseCaseError> {
        debug!("Request to get Cv : {}", id);
        self.cvs
            .find_by_id(id)
            .await?
            .ok_or(UseCaseError::not_found(Cv::ENTITY_NAME))
    }

    async fn delete(&self, id: Uuid) -> Result<(), UseCaseError> {
        debug!("Request to delete Cv : {}", id);
        Ok(self.cvs.delete_by_id(id).await?)
    }
}
