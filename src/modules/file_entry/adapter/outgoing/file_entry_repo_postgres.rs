use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::file_entry::domain::entities::FileEntry;
use crate::shared::persistence::{CrudRepository, PageRequest, PageResult, RepositoryError};

use super::sea_orm_entity::{
    ActiveModel as FileEntryActiveModel, Column as FileEntryColumn, Entity as FileEntryEntity,
};

#[derive(Debug, Clone)]
pub struct FileEntryRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl FileEntryRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<FileEntry> for FileEntryRepoPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FileEntry>, RepositoryError> {
        let model = FileEntryEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_page(&self, page: PageRequest) -> Result<PageResult<FileEntry>, RepositoryError> {
        let total = FileEntryEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let models = FileEntryEntity::find()
            .order_by_asc(FileEntryColumn::Id)
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

    async fn save(&self, file_entry: FileEntry) -> Result<FileEntry, RepositoryError> {
        let exists = match file_entry.id {
            Some(id) => self.exists_by_id(id).await?,
            None => false,
        };

        let active = FileEntryActiveModel {
            id: Set(file_entry.id.unwrap_or_else(Uuid::new_v4)),
            data: Set(file_entry.data),
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
        FileEntryEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
