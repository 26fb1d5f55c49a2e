use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{NewUser, User};
use crate::modules::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn authorities_json(
    authorities: &std::collections::BTreeSet<String>,
) -> Result<serde_json::Value, UserRepositoryError> {
    serde_json::to_value(authorities)
        .map_err(|e| UserRepositoryError::SerializationError(e.to_string()))
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .map(|m| m.to_domain())
            .transpose()
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, UserRepositoryError> {
        UserEntity::find()
            .filter(UserColumn::Login.eq(login.to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .map(|m| m.to_domain())
            .transpose()
    }

    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            login: Set(user.login),
            password_hash: Set(user.password_hash),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            activated: Set(user.activated),
            lang_key: Set(user.lang_key),
            authorities: Set(authorities_json(&user.authorities)?),
            created_by: Set(user.created_by),
            created_date: Set(user.created_date.into()),
            last_modified_date: Set(None),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return UserRepositoryError::UserAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        inserted.to_domain()
    }

    async fn update_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let existing = UserEntity::find_by_id(user.id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = existing.into();
        active_user.first_name = Set(user.first_name);
        active_user.last_name = Set(user.last_name);
        active_user.email = Set(user.email);
        active_user.activated = Set(user.activated);
        active_user.lang_key = Set(user.lang_key);
        active_user.authorities = Set(authorities_json(&user.authorities)?);
        active_user.last_modified_date = Set(user.last_modified_date.map(Into::into));

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        updated.to_domain()
    }
}
