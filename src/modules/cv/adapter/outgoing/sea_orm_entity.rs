use sea_orm::entity::prelude::*;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::modules::cv::domain::entities::Cv;
use crate::shared::persistence::{from_json, RepositoryError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cvs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<i64>,
    pub postal_code: Option<i32>,
    pub email: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub skill_ids: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub experience_ids: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub study_ids: JsonValue,

    pub image_id: Option<Uuid>,
    pub collaborator_id: Option<Uuid>,
}

impl Model {
    pub fn to_domain(self) -> Result<Cv, RepositoryError> {
        Ok(Cv {
            id: Some(self.id),
            title: self.title,
            address: self.address,
            phone_number: self.phone_number,
            postal_code: self.postal_code,
            email: self.email,
            skills: from_json(self.skill_ids)?,
            experiences: from_json(self.experience_ids)?,
            studies: from_json(self.study_ids)?,
            image: self.image_id,
            collaborator: self.collaborator_id,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
