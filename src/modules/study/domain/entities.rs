use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::patch::{Merge, PatchField};
use crate::shared::persistence::Document;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Study {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub establishment: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchStudyData {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub location: PatchField<String>,
    #[serde(default)]
    pub establishment: PatchField<String>,
    #[serde(default)]
    pub start_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub end_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub description: PatchField<String>,
}

impl Document for Study {
    const ENTITY_NAME: &'static str = "study";

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn with_id(self, id: Uuid) -> Self {
        Self { id: Some(id), ..self }
    }
}

impl Merge for Study {
    type Patch = PatchStudyData;

    fn merge(self, patch: PatchStudyData) -> Self {
        Self {
            id: self.id,
            title: patch.title.merge_optional(self.title),
            location: patch.location.merge_optional(self.location),
            establishment: patch.establishment.merge_optional(self.establishment),
            start_date: patch.start_date.merge_optional(self.start_date),
            end_date: patch.end_date.merge_optional(self.end_date),
            description: patch.description.merge_optional(self.description),
        }
    }
}
