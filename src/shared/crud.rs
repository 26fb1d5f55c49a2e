use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::debug;
use uuid::Uuid;

use crate::shared::patch::Merge;
use crate::shared::persistence::{
    CrudRepository, Document, PageRequest, PageResult, RepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UseCaseError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{message}")]
    InvalidRequest { code: &'static str, message: String },

    #[error("Credential hashing failed: {0}")]
    HashingFailed(String),

    #[error("Store failure: {0}")]
    StoreFailure(String),
}

impl UseCaseError {
    pub fn not_found(entity: &'static str) -> Self {
        UseCaseError::NotFound { entity }
    }

    pub fn invalid(code: &'static str, message: impl Into<String>) -> Self {
        UseCaseError::InvalidRequest {
            code,
            message: message.into(),
        }
    }
}

impl From<RepositoryError> for UseCaseError {
    fn from(err: RepositoryError) -> Self {
        UseCaseError::StoreFailure(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Identifier rules
// ──────────────────────────────────────────────────────────
//

pub const ID_EXISTS: &str = "ID_EXISTS";
pub const ID_NULL: &str = "ID_NULL";
pub const ID_INVALID: &str = "ID_INVALID";

/// A record sent for creation must not carry an identifier.
pub fn ensure_new(entity: &str, id: Option<Uuid>) -> Result<(), UseCaseError> {
    match id {
        Some(_) => Err(UseCaseError::invalid(
            ID_EXISTS,
            format!("A new {entity} cannot already have an ID"),
        )),
        None => Ok(()),
    }
}

/// A full replacement must name the record it replaces, and name it consistently.
pub fn ensure_matching_id(path_id: Uuid, body_id: Option<Uuid>) -> Result<(), UseCaseError> {
    match body_id {
        None => Err(UseCaseError::invalid(ID_NULL, "Invalid id")),
        Some(id) if id != path_id => Err(UseCaseError::invalid(ID_INVALID, "Invalid ID")),
        Some(_) => Ok(()),
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CrudUseCase<T: Merge + Send + Sync + 'static>: Send + Sync {
    async fn create(&self, record: T) -> Result<T, UseCaseError>;

    async fn update(&self, id: Uuid, record: T) -> Result<T, UseCaseError>;

    async fn partial_update(&self, id: Uuid, patch: T::Patch) -> Result<T, UseCaseError>;

    async fn find_all(&self, page: PageRequest) -> Result<PageResult<T>, UseCaseError>;

    async fn find_one(&self, id: Uuid) -> Result<T, UseCaseError>;

    async fn delete(&self, id: Uuid) -> Result<(), UseCaseError>;
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Plain CRUD for records without cross-entity side effects.
pub struct CrudService<T, R> {
    repository: R,
    _record: PhantomData<fn() -> T>,
}

impl<T, R> CrudService<T, R>
where
    T: Document + Merge,
    R: CrudRepository<T>,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T, R> CrudUseCase<T> for CrudService<T, R>
where
    T: Document + Merge + std::fmt::Debug,
    R: CrudRepository<T>,
{
    async fn create(&self, record: T) -> Result<T, UseCaseError> {
        debug!("Request to create {} : {:?}", T::ENTITY_NAME, record);
        ensure_new(T::ENTITY_NAME, record.id())?;

        Ok(self.repository.save(record).await?)
    }

    async fn update(&self, id: Uuid, record: T) -> Result<T, UseCaseError> {
        debug!("Request to update {} {} : {:?}", T::ENTITY_NAME, id, record);
        ensure_matching_id(id, record.id())?;

        if !self.repository.exists_by_id(id).await? {
            return Err(UseCaseError::not_found(T::ENTITY_NAME));
        }

        Ok(self.repository.save(record).await?)
    }

    async fn partial_update(&self, id: Uuid, patch: T::Patch) -> Result<T, UseCaseError> {
        debug!("Request to partially update {} {}", T::ENTITY_NAME, id);

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UseCaseError::not_found(T::ENTITY_NAME))?;

        Ok(self.repository.save(existing.merge(patch)).await?)
    }

    async fn find_all(&self, page: PageRequest) -> Result<PageResult<T>, UseCaseError> {
        debug!("Request to get all {} : {:?}", T::ENTITY_NAME, page);

        Ok(self.repository.find_page(page.normalized()).await?)
    }

    async fn find_one(&self, id: Uuid) -> Result<T, UseCaseError> {
        debug!("Request to get {} : {}", T::ENTITY_NAME, id);

        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UseCaseError::not_found(T::ENTITY_NAME))
    }

    async fn delete(&self, id: Uuid) -> Result<(), UseCaseError> {
        debug!("Request to delete {} : {}", T::ENTITY_NAME, id);

        Ok(self.repository.delete_by_id(id).await?)
    }
}
