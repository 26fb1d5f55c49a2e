use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::human_resource::domain::entities::HumanResource;
use crate::shared::persistence::{CrudRepository, PageRequest, PageResult, RepositoryError};

use super::sea_orm_entity::{
    ActiveModel as HumanResourceActiveModel, Column as HumanResourceColumn,
    Entity as HumanResourceEntity,
};

#[derive(Debug, Clone)]
pub struct HumanResourceRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl HumanResourceRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<HumanResource> for HumanResourceRepoPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<HumanResource>, RepositoryError> {
        let model = HumanResourceEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_page(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<HumanResource>, RepositoryError> {
        let total = HumanResourceEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let models = HumanResourceEntity::find()
            .order_by_asc(HumanResourceColumn::Id)
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

    async fn save(&self, human_resource: HumanResource) -> Result<HumanResource, RepositoryError> {
        let exists = match human_resource.id {
            Some(id) => self.exists_by_id(id).await?,
            None => false,
        };

        let active = HumanResourceActiveModel {
            id: Set(human_resource.id.unwrap_or_else(Uuid::new_v4)),
            user_id: Set(human_resource.user),
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
        HumanResourceEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
