use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::patch::{Merge, PatchField};
use crate::shared::persistence::Document;

/// A spoken language and a free-text proficiency such as `"B2"` or `"native"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchLanguageData {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub level: PatchField<String>,
}

impl Document for Language {
    const ENTITY_NAME: &'static str = "language";

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn with_id(self, id: Uuid) -> Self {
        Self { id: Some(id), ..self }
    }
}

impl Merge for Language {
    type Patch = PatchLanguageData;

    fn merge(self, patch: PatchLanguageData) -> Self {
        Self {
            name: patch.name.merge_optional(self.name),
            level: patch.level.merge_optional(self.level),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_level_only() {
        let stored = Language {
            id: Some(Uuid::new_v4()),
            name: Some("English".to_string()),
            level: Some("B1".to_string()),
        };
        let patch: PatchLanguageData = serde_json::from_value(json!({ "level": "C1" })).unwrap();

        let merged = stored.clone().merge(patch);

        assert_eq!(merged.name, stored.name);
        assert_eq!(merged.level.as_deref(), Some("C1"));
    }
}
