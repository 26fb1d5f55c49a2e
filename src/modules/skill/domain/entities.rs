use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::patch::{Merge, PatchField};
use crate::shared::persistence::Document;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Option<Uuid>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchSkillData {
    #[serde(default)]
    pub name: PatchField<String>,
}

impl Document for Skill {
    const ENTITY_NAME: &'static str = "skill";

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn with_id(self, id: Uuid) -> Self {
        Self { id: Some(id), ..self }
    }
}

impl Merge for Skill {
    type Patch = PatchSkillData;

    fn merge(self, patch: PatchSkillData) -> Self {
        Self {
            name: patch.name.merge_optional(self.name),
            ..self
        }
    }
}
