use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::EmbeddedUser;
use crate::shared::patch::{Merge, NoPatchableFields};
use crate::shared::persistence::Document;

/// Stored Collaborator: owns exactly one User and at most one Cv.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: Option<Uuid>,
    pub user: Uuid,
    pub cv: Option<Uuid>,
}

impl Document for Collaborator {
    const ENTITY_NAME: &'static str = "collaborator";

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn with_id(self, id: Uuid) -> Self {
        Self { id: Some(id), ..self }
    }
}

impl Merge for Collaborator {
    type Patch = NoPatchableFields;

    fn merge(self, _patch: NoPatchableFields) -> Self {
        self
    }
}

/// Create/update body: the User and Cv arrive embedded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollaboratorPayload {
    pub id: Option<Uuid>,
    pub user: Option<EmbeddedUser>,
    pub cv: Option<CvReference>,
}

impl CollaboratorPayload {
    /// Identifier of an already stored Cv. An embedded Cv without one is
    /// treated as absent.
    pub fn existing_cv_id(&self) -> Option<Uuid> {
        self.cv.as_ref().and_then(|cv| cv.id)
    }
}

/// Embedded Cv; every field except the identifier is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CvReference {
    pub id: Option<Uuid>,
}
