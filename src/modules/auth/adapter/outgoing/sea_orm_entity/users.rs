use sea_orm::entity::prelude::*;
use serde_json::Value as JsonValue;
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::UserRepositoryError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub login: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub activated: bool,
    pub lang_key: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub authorities: JsonValue,
    pub created_by: Option<String>,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_date: Option<DateTimeWithTimeZone>,
}

impl Model {
    pub fn to_domain(self) -> Result<User, UserRepositoryError> {
        let authorities: BTreeSet<String> = serde_json::from_value(self.authorities)
            .map_err(|e| UserRepositoryError::SerializationError(e.to_string()))?;

        Ok(User {
            id: self.id,
            login: self.login,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            activated: self.activated,
            lang_key: self.lang_key,
            authorities,
            created_by: self.created_by,
            created_date: self.created_date.into(),
            last_modified_date: self.last_modified_date.map(Into::into),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
