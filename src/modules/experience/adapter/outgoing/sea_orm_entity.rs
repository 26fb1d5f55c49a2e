use sea_orm::entity::prelude::*;

use crate::modules::experience::domain::entities::Experience;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub company: Option<String>,
    pub position: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

impl Model {
    pub fn to_domain(self) -> Experience {
        Experience {
            id: Some(self.id),
            start_date: self.start_date,
            end_date: self.end_date,
            company: self.company,
            position: self.position,
            description: self.description,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
