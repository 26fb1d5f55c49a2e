use sea_orm::entity::prelude::*;

use crate::modules::file_entry::domain::entities::FileEntry;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "file_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub data: Vec<u8>,
}

impl Model {
    pub fn to_domain(self) -> FileEntry {
        FileEntry {
            id: Some(self.id),
            data: self.data,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
