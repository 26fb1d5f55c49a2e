use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::EmbeddedUser;
use crate::shared::patch::{Merge, NoPatchableFields};
use crate::shared::persistence::Document;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanResource {
    pub id: Option<Uuid>,
    pub user: Uuid,
}

impl Document for HumanResource {
    const ENTITY_NAME: &'static str = "human_resource";

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn with_id(self, id: Uuid) -> Self {
        Self { id: Some(id), ..self }
    }
}

impl Merge for HumanResource {
    type Patch = NoPatchableFields;

    fn merge(self, _patch: NoPatchableFields) -> Self {
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HumanResourcePayload {
    pub id: Option<Uuid>,
    pub user: Option<EmbeddedUser>,
}
