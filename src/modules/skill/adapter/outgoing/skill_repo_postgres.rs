use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill::domain::entities::Skill;
use crate::shared::persistence::{CrudRepository, PageRequest, PageResult, RepositoryError};

use super::sea_orm_entity::{
    ActiveModel as SkillActiveModel, Column as SkillColumn, Entity as SkillEntity,
};

#[derive(Debug, Clone)]
pub struct SkillRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<Skill> for SkillRepoPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Skill>, RepositoryError> {
        let model = SkillEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_page(&self, page: PageRequest) -> Result<PageResult<Skill>, RepositoryError> {
        let total = SkillEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let models = SkillEntity::find()
            .order_by_asc(SkillColumn::Id)
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

    async fn save(&self, skill: Skill) -> Result<Skill, RepositoryError> {
        let exists = match skill.id {
            Some(id) => self.exists_by_id(id).await?,
            None => false,
        };

        let active = SkillActiveModel {
            id: Set(skill.id.unwrap_or_else(Uuid::new_v4)),
            name: Set(skill.name),
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
        SkillEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill::adapter::outgoing::sea_orm_entity::Model as SkillModel;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Value};

    fn skill_model(id: Uuid, name: &str) -> SkillModel {
        SkillModel {
            id,
            name: Some(name.to_string()),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![skill_model(id, "Rust")]])
            .into_connection();
        let repo = SkillRepoPostgres::new(Arc::new(db));

        let found = repo.find_by_id(id).await.unwrap();

        assert_eq!(
            found,
            Some(Skill {
                id: Some(id),
                name: Some("Rust".to_string())
            })
        );
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<SkillModel>::new()])
            .into_connection();
        let repo = SkillRepoPostgres::new(Arc::new(db));

        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_new_skill_inserts_with_generated_id() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![skill_model(id, "Rust")]])
            .into_connection();
        let repo = SkillRepoPostgres::new(Arc::new(db));

        let saved = repo
            .save(Skill {
                id: None,
                name: Some("Rust".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(saved.id, Some(id));
    }

    #[tokio::test]
    async fn test_save_existing_skill_updates() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                vec![skill_model(id, "Rust")],
                vec![skill_model(id, "Rust 2021")],
            ])
            .into_connection();
        let repo = SkillRepoPostgres::new(Arc::new(db));

        let saved = repo
            .save(Skill {
                id: Some(id),
                name: Some("Rust 2021".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(saved.name.as_deref(), Some("Rust 2021"));
    }

    #[tokio::test]
    async fn test_save_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection lost".to_string())])
            .into_connection();
        let repo = SkillRepoPostgres::new(Arc::new(db));

        let result = repo
            .save(Skill {
                id: None,
                name: None,
            })
            .await;

        assert!(matches!(result, Err(RepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_find_page_counts_and_maps() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "num_items" => Into::<Value>::into(11i64),
            }]])
            .append_query_results(vec![vec![skill_model(id, "Rust")]])
            .into_connection();
        let repo = SkillRepoPostgres::new(Arc::new(db));

        let page = repo
            .find_page(PageRequest {
                page: 2,
                per_page: 10,
            })
            .await
            .unwrap();

        assert_eq!(page.total, 11);
        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, Some(id));
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = SkillRepoPostgres::new(Arc::new(db));

        assert!(repo.delete_by_id(Uuid::new_v4()).await.is_ok());
    }
}
