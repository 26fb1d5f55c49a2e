use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::domain::entities::Experience;
use crate::shared::persistence::{CrudRepository, PageRequest, PageResult, RepositoryError};

use super::sea_orm_entity::{
    ActiveModel as ExperienceActiveModel, Column as ExperienceColumn, Entity as ExperienceEntity,
};

#[derive(Debug, Clone)]
pub struct ExperienceRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<Experience> for ExperienceRepoPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Experience>, RepositoryError> {
        let model = ExperienceEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_page(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<Experience>, RepositoryError> {
        let total = ExperienceEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let models = ExperienceEntity::find()
            .order_by_asc(ExperienceColumn::Id)
            .offset(page.offset())
            .limit(page.per_page)
            .all(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(PageResult {
            items: models.into_iter().map(|m| m.to_domain()).collect(),
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn save(&self, experience: Experience) -> Result<Experience, RepositoryError> {
        let exists = match experience.id {
            Some(id) => self.exists_by_id(id).await?,
            None => false,
        };

        let active = ExperienceActiveModel {
            id: Set(experience.id.unwrap_or_else(Uuid::new_v4)),
            start_date: Set(experience.start_date),
            end_date: Set(experience.end_date),
            company: Set(experience.company),
            position: Set(experience.position),
            description: Set(experience.description),
        };

        let saved = if exists {
            active.update(&*self.db).await
        } else {
            active.insert(&*self.db).await
        }
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(saved.to_domain())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError> {
        ExperienceEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
