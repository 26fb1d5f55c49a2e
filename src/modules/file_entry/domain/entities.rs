use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::patch::{Merge, NoPatchableFields};
use crate::shared::persistence::Document;

/// An uploaded binary, e.g. a Cv picture. `data` travels as base64 in JSON.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub id: Option<Uuid>,
    #[serde(default, with = "base64_bytes")]
    pub data: Vec<u8>,
}

impl std::fmt::Debug for FileEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileEntry")
            .field("id", &self.id)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl Document for FileEntry {
    const ENTITY_NAME: &'static str = "file_entry";

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn with_id(self, id: Uuid) -> Self {
        Self { id: Some(id), ..self }
    }
}

impl Merge for FileEntry {
    type Patch = NoPatchableFields;

    fn merge(self, _patch: NoPatchableFields) -> Self {
        self
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = Option::<String>::deserialize(deserializer)?;
        match encoded {
            Some(s) => STANDARD.decode(s).map_err(serde::de::Error::custom),
            None => Ok(Vec::new()),
        }
    }
}
