use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::collaborator::domain::entities::Collaborator;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "collaborators")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub cv_id: Option<Uuid>,
}

impl Model {
    pub fn to_domain(self) -> Collaborator {
        Collaborator {
            id: Some(self.id),
            user: self.user_id,
            cv: self.cv_id,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
