use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::patch::{Merge, PatchField};
use crate::shared::persistence::Document;

/// A résumé. Skill, experience and study entries are held by reference;
/// `collaborator` is the back-reference to the owning Collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cv {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<i64>,
    pub postal_code: Option<i32>,
    pub email: Option<String>,
    #[serde(default)]
    pub skills: Vec<Uuid>,
    #[serde(default)]
    pub experiences: Vec<Uuid>,
    #[serde(default)]
    pub studies: Vec<Uuid>,
    pub image: Option<Uuid>,
    pub collaborator: Option<Uuid>,
}

/// Only contact details are patchable; references go through a full update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchCvData {
    #[serde(default)]
    pub address: PatchField<String>,
    #[serde(default)]
    pub phone_number: PatchField<i64>,
    #[serde(default)]
    pub postal_code: PatchField<i32>,
    #[serde(default)]
    pub email: PatchField<String>,
}

impl Document for Cv {
    const ENTITY_NAME: &'static str = "cv";

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn with_id(self, id: Uuid) -> Self {
        Self { id: Some(id), ..self }
    }
}

impl Merge for Cv {
    type Patch = PatchCvData;

    fn merge(self, patch: PatchCvData) -> Self {
        Self {
            address: patch.address.merge_optional(self.address),
            phone_number: patch.phone_number.merge_optional(self.phone_number),
            postal_code: patch.postal_code.merge_optional(self.postal_code),
            email: patch.email.merge_optional(self.email),
            ..self
        }
    }
}
