use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::study::domain::entities::Study;
use crate::shared::persistence::{CrudRepository, PageRequest, PageResult, RepositoryError};

use super::sea_orm_entity::{
    ActiveModel as StudyActiveModel, Column as StudyColumn, Entity as StudyEntity,
};

#[derive(Debug, Clone)]
pub struct StudyRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl StudyRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<Study> for StudyRepoPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Study>, RepositoryError> {
        let model = StudyEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_page(&self, page: PageRequest) -> Result<PageResult<Study>, RepositoryError> {
        let total = StudyEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let models = StudyEntity::find()
            .order_by_asc(StudyColumn::Id)
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

    async fn save(&self, study: Study) -> Result<Study, RepositoryError> {
        let exists = match study.id {
            Some(id) => self.exists_by_id(id).await?,
            None => false,
        };

        let active = StudyActiveModel {
            id: Set(study.id.unwrap_or_else(Uuid::new_v4)),
            title: Set(study.title),
            location: Set(study.location),
            establishment: Set(study.establishment),
            start_date: Set(study.start_date),
            end_date: Set(study.end_date),
            description: Set(study.description),
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
        StudyEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::study::adapter::outgoing::sea_orm_entity::Model as StudyModel;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};

    fn model(id: Uuid, title: &str) -> StudyModel {
        StudyModel {
            id,
            title: Some(title.to_string()),
            location: None,
            establishment: Some("Sorbonne".to_string()),
            start_date: None,
            end_date: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_find_page_second_page() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "num_items" => Into::<Value>::into(3i64),
            }]])
            .append_query_results(vec![vec![model(Uuid::new_v4(), "BSc")]])
            .into_connection();
        let repo = StudyRepoPostgres::new(Arc::new(db));

        let page = repo
            .find_page(PageRequest {
                page: 2,
                per_page: 2,
            })
            .await
            .unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages(), 2);
        assert_eq!(page.items[0].title.as_deref(), Some("BSc"));
    }

    #[tokio::test]
    async fn test_count_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("relation does not exist".to_string())])
            .into_connection();
        let repo = StudyRepoPostgres::new(Arc::new(db));

        let result = repo.find_page(PageRequest::default()).await;

        assert!(matches!(result, Err(RepositoryError::DatabaseError(_))));
    }
}
