use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::cv::domain::entities::Cv;
use crate::shared::persistence::{
    to_json, CrudRepository, PageRequest, PageResult, RepositoryError,
};

use super::sea_orm_entity::{ActiveModel as CvActiveModel, Column as CvColumn, Entity as CvEntity};

#[derive(Debug, Clone)]
pub struct CvRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl CvRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_active_model(id: Uuid, cv: Cv) -> Result<CvActiveModel, RepositoryError> {
        Ok(CvActiveModel {
            id: Set(id),
            title: Set(cv.title),
            address: Set(cv.address),
            phone_number: Set(cv.phone_number),
            postal_code: Set(cv.postal_code),
            email: Set(cv.email),
            skill_ids: Set(to_json(&cv.skills)?),
            experience_ids: Set(to_json(&cv.experiences)?),
            study_ids: Set(to_json(&cv.studies)?),
            image_id: Set(cv.image),
            collaborator_id: Set(cv.collaborator),
        })
    }
}

#[async_trait]
impl CrudRepository<Cv> for CvRepoPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Cv>, RepositoryError> {
        CvEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?
            .map(|m| m.to_domain())
            .transpose()
    }

    async fn find_page(&self, page: PageRequest) -> Result<PageResult<Cv>, RepositoryError> {
        let total = CvEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let models = CvEntity::find()
            .order_by_asc(CvColumn::Id)
            .offset(page.offset())
            .limit(page.per_page)
            .all(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let items = models
            .into_iter()
            .map(|m| m.to_domain())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn save(&self, cv: Cv) -> Result<Cv, RepositoryError> {
        let exists = match cv.id {
            Some(id) => self.exists_by_id(id).await?,
            None => false,
        };

        let id = cv.id.unwrap_or_else(Uuid::new_v4);
        let active = Self::to_active_model(id, cv)?;

        let saved = if exists {
            active.update(&*self.db).await
        } else {
            active.insert(&*self.db).await
        }
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        saved.to_domain()
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError> {
        CvEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
