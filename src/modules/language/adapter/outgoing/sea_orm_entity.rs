use sea_orm::entity::prelude::*;

use crate::modules::language::domain::entities::Language;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "languages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: Option<String>,
    pub level: Option<String>,
}

impl Model {
    pub fn to_domain(self) -> Language {
        Language {
            id: Some(self.id),
            name: self.name,
            level: self.level,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
