use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::patch::{Merge, PatchField};
use crate::shared::persistence::Document;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
}

/// `description` is only replaced by a full update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchExperienceData {
    #[serde(default)]
    pub start_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub end_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub company: PatchField<String>,
    #[serde(default)]
    pub position: PatchField<String>,
}

impl Document for Experience {
    const ENTITY_NAME: &'static str = "experience";

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn with_id(self, id: Uuid) -> Self {
        Self { id: Some(id), ..self }
    }
}

impl Merge for Experience {
    type Patch = PatchExperienceData;

    fn merge(self, patch: PatchExperienceData) -> Self {
        Self {
            start_date: patch.start_date.merge_optional(self.start_date),
            end_date: patch.end_date.merge_optional(self.end_date),
            company: patch.company.merge_optional(self.company),
            position: patch.position.merge_optional(self.position),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored() -> Experience {
        Experience {
            id: Some(Uuid::new_v4()),
            start_date: NaiveDate::from_ymd_opt(2019, 3, 1),
            end_date: NaiveDate::from_ymd_opt(2022, 8, 31),
            company: Some("Acme".to_string()),
            position: Some("Developer".to_string()),
            description: Some("Payments team".to_string()),
        }
    }

    #[test]
    fn merge_overwrites_dates_and_keeps_description() {
        let patch: PatchExperienceData = serde_json::from_value(json!({
            "end_date": "2023-01-15",
            "description": "ignored"
        }))
        .unwrap();

        let merged = stored().merge(patch);

        assert_eq!(merged.end_date, NaiveDate::from_ymd_opt(2023, 1, 15));
        assert_eq!(merged.start_date, NaiveDate::from_ymd_opt(2019, 3, 1));
        assert_eq!(merged.description.as_deref(), Some("Payments team"));
    }

    #[test]
    fn null_fields_keep_stored_values() {
        let existing = stored();
        let patch: PatchExperienceData =
            serde_json::from_value(json!({ "company": null, "position": null })).unwrap();

        assert_eq!(existing.clone().merge(patch), existing);
    }

    #[test]
    fn empty_string_is_a_value() {
        let patch: PatchExperienceData =
            serde_json::from_value(json!({ "position": "" })).unwrap();

        assert_eq!(stored().merge(patch).position.as_deref(), Some(""));
    }
}
