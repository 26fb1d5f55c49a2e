use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mockall::mock;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{HashError, PasswordHasher};
use crate::modules::collaborator::application::use_cases::CollaboratorUseCase;
use crate::modules::collaborator::domain::entities::{Collaborator, CollaboratorPayload};
use crate::modules::human_resource::application::use_cases::HumanResourceUseCase;
use crate::modules::human_resource::domain::entities::{HumanResource, HumanResourcePayload};
use crate::shared::clock::Clock;
use crate::shared::crud::UseCaseError;
use crate::shared::patch::NoPatchableFields;
use crate::shared::persistence::{PageRequest, PageResult};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Always answers 2024-01-15T09:30:00Z.
pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
    ))
}

/// Deterministic "hash" for orchestration tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeHasher;

#[async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed::{password}"))
    }
}

mock! {
    pub Hasher {}

    #[async_trait]
    impl PasswordHasher for Hasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError>;
    }
}

mock! {
    pub CollaboratorUseCase {}

    #[async_trait]
    impl CollaboratorUseCase for CollaboratorUseCase {
        async fn create(&self, payload: CollaboratorPayload) -> Result<Collaborator, UseCaseError>;
        async fn update(&self, id: Uuid, payload: CollaboratorPayload) -> Result<Collaborator, UseCaseError>;
        async fn partial_update(&self, id: Uuid, patch: NoPatchableFields) -> Result<Collaborator, UseCaseError>;
        async fn find_all(&self, page: PageRequest) -> Result<PageResult<Collaborator>, UseCaseError>;
        async fn find_one(&self, id: Uuid) -> Result<Collaborator, UseCaseError>;
        async fn find_by_user(&self, user_id: Uuid) -> Result<Collaborator, UseCaseError>;
        async fn delete(&self, id: Uuid) -> Result<(), UseCaseError>;
    }
}

mock! {
    pub HumanResourceUseCase {}

    #[async_trait]
    impl HumanResourceUseCase for HumanResourceUseCase {
        async fn create(&self, payload: HumanResourcePayload) -> Result<HumanResource, UseCaseError>;
        async fn update(&self, id: Uuid, payload: HumanResourcePayload) -> Result<HumanResource, UseCaseError>;
        async fn partial_update(&self, id: Uuid, patch: NoPatchableFields) -> Result<HumanResource, UseCaseError>;
        async fn find_all(&self, page: PageRequest) -> Result<PageResult<HumanResource>, UseCaseError>;
        async fn find_one(&self, id: Uuid) -> Result<HumanResource, UseCaseError>;
        async fn delete(&self, id: Uuid) -> Result<(), UseCaseError>;
    }
}
