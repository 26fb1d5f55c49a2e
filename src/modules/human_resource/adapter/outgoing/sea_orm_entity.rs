use sea_orm::entity::prelude::*;

use crate::modules::human_resource::domain::entities::HumanResource;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "human_resources")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
}

impl Model {
    pub fn to_domain(self) -> HumanResource {
        HumanResource {
            id: Some(self.id),
            user: self.user_id,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
