use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::language::domain::entities::Language;
use crate::shared::persistence::{CrudRepository, PageRequest, PageResult, RepositoryError};

use super::sea_orm_entity::{
    ActiveModel as LanguageActiveModel, Column as LanguageColumn, Entity as LanguageEntity,
};

#[derive(Debug, Clone)]
pub struct LanguageRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl LanguageRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<Language> for LanguageRepoPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Language>, RepositoryError> {
        let model = LanguageEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_page(&self, page: PageRequest) -> Result<PageResult<Language>, RepositoryError> {
        let total = LanguageEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let models = LanguageEntity::find()
            .order_by_asc(LanguageColumn::Id)
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

    async fn save(&self, language: Language) -> Result<Language, RepositoryError> {
        let exists = match language.id {
            Some(id) => self.exists_by_id(id).await?,
            None => false,
        };

        let active = LanguageActiveModel {
            id: Set(language.id.unwrap_or_else(Uuid::new_v4)),
            name: Set(language.name),
            level: Set(language.level),
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
        LanguageEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
