use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::collaborator::application::ports::outgoing::CollaboratorLookup;
use crate::modules::collaborator::domain::entities::Collaborator;
use crate::shared::persistence::{CrudRepository, PageRequest, PageResult, RepositoryError};

use super::sea_orm_entity::{
    ActiveModel as CollaboratorActiveModel, Column as CollaboratorColumn,
    Entity as CollaboratorEntity,
};

#[derive(Debug, Clone)]
pub struct CollaboratorRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl CollaboratorRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<Collaborator> for CollaboratorRepoPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Collaborator>, RepositoryError> {
        let model = CollaboratorEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_page(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<Collaborator>, RepositoryError> {
        let total = CollaboratorEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let models = CollaboratorEntity::find()
            .order_by_asc(CollaboratorColumn::Id)
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

    async fn save(&self, collaborator: Collaborator) -> Result<Collaborator, RepositoryError> {
        let exists = match collaborator.id {
            Some(id) => self.exists_by_id(id).await?,
            None => false,
        };

        let active = CollaboratorActiveModel {
            id: Set(collaborator.id.unwrap_or_else(Uuid::new_v4)),
            user_id: Set(collaborator.user),
            cv_id: Set(collaborator.cv),
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
        CollaboratorEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl CollaboratorLookup for CollaboratorRepoPostgres {
    async fn find_by_cv_id(&self, cv_id: Uuid) -> Result<Option<Collaborator>, RepositoryError> {
        let model = CollaboratorEntity::find()
            .filter(CollaboratorColumn::CvId.eq(cv_id))
            .one(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Collaborator>, RepositoryError> {
        let model = CollaboratorEntity::find()
            .filter(CollaboratorColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }
}
