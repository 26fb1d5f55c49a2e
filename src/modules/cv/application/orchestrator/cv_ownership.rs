use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::modules::collaborator::application::ports::outgoing::CollaboratorLookup;
use crate::modules::cv::domain::entities::Cv;
use crate::shared::crud::UseCaseError;
use crate::shared::persistence::CrudRepository;

/// Keeps `Cv.collaborator` pointing at the Collaborator whose `cv` names it.
#[derive(Clone)]
pub struct CvOwnershipSynchronizer {
    cvs: Arc<dyn CrudRepository<Cv>>,
    collaborators: Arc<dyn CollaboratorLookup>,
}

impl CvOwnershipSynchronizer {
    pub fn new(cvs: Arc<dyn CrudRepository<Cv>>, collaborators: Arc<dyn CollaboratorLookup>) -> Self {
        Self { cvs, collaborators }
    }

    pub async fn find_cv(&self, cv_id: Uuid) -> Result<Cv, UseCaseError> {
        self.cvs
            .find_by_id(cv_id)
            .await?
            .ok_or(UseCaseError::not_found("cv"))
    }

    /// Fills a missing back-reference from the Collaborator that claims this Cv.
    /// Does not persist.
    pub async fn attach_owner_if_missing(&self, cv: Cv) -> Result<Cv, UseCaseError> {
        let cv_id = match (cv.id, cv.collaborator) {
            (Some(id), None) => id,
            _ => return Ok(cv),
        };

        match self.collaborators.find_by_cv_id(cv_id).await? {
            Some(owner) => {
                debug!("Attaching collaborator {:?} to cv {}", owner.id, cv_id);
                Ok(Cv {
                    collaborator: owner.id,
                    ..cv
                })
            }
            None => Ok(cv),
        }
    }

    /// Points the Cv at its Collaborator and persists it.
    pub async fn link_cv_to_collaborator(
        &self,
        cv: Cv,
        collaborator_id: Uuid,
    ) -> Result<Cv, UseCaseError> {
        debug!("Linking cv {:?} to collaborator {}", cv.id, collaborator_id);

        let linked = Cv {
            collaborator: Some(collaborator_id),
            ..cv
        };

        Ok(self.cvs.save(linked).await?)
    }
}
