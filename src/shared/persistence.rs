use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Pagination
// ──────────────────────────────────────────────────────────
//

pub const DEFAULT_PER_PAGE: u64 = 20;
pub const MAX_PER_PAGE: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    #[serde(default = "PageRequest::first_page")]
    pub page: u64,
    #[serde(default = "PageRequest::default_per_page")]
    pub per_page: u64,
}

impl PageRequest {
    fn first_page() -> u64 {
        1
    }

    fn default_per_page() -> u64 {
        DEFAULT_PER_PAGE
    }

    /// Clamps user input: pages are 1-based, page size is 1..=MAX_PER_PAGE.
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Rows to skip. Saturates at `i64::MAX`, the largest OFFSET Postgres accepts.
    pub fn offset(&self) -> u64 {
        self.page
            .max(1)
            .saturating_sub(1)
            .saturating_mul(self.per_page)
            .min(i64::MAX as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }
}

//
// ──────────────────────────────────────────────────────────
// Store port
// ──────────────────────────────────────────────────────────
//

/// A record kept in the document store, addressed by its identifier.
pub trait Document: Clone + Send + Sync + 'static {
    const ENTITY_NAME: &'static str;

    fn id(&self) -> Option<Uuid>;

    fn with_id(self, id: Uuid) -> Self;
}

#[async_trait]
pub trait CrudRepository<T: Document>: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepositoryError>;

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn find_page(&self, page: PageRequest) -> Result<PageResult<T>, RepositoryError>;

    /// Insert-or-replace. A record without identifier gets a fresh one.
    async fn save(&self, record: T) -> Result<T, RepositoryError>;

    /// Removing an unknown identifier is not an error.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError>;
}

//
// ──────────────────────────────────────────────────────────
// JSONB helpers
// ──────────────────────────────────────────────────────────
//

pub fn to_json<T: Serialize>(value: &T) -> Result<JsonValue, RepositoryError> {
    serde_json::to_value(value).map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

pub fn from_json<T: DeserializeOwned>(value: JsonValue) -> Result<T, RepositoryError> {
    serde_json::from_value(value).map_err(|e| RepositoryError::SerializationError(e.to_string()))
}
