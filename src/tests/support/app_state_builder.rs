use std::sync::Arc;

use crate::modules::collaborator::application::use_cases::CollaboratorUseCase;
use crate::modules::collaborator::domain::entities::Collaborator;
use crate::modules::cv::application::orchestrator::CvOwnershipSynchronizer;
use crate::modules::cv::application::services::CvService;
use crate::modules::cv::domain::entities::Cv;
use crate::modules::experience::domain::entities::Experience;
use crate::modules::file_entry::domain::entities::FileEntry;
use crate::modules::human_resource::application::use_cases::HumanResourceUseCase;
use crate::modules::language::domain::entities::Language;
use crate::modules::skill::domain::entities::Skill;
use crate::modules::study::domain::entities::Study;
use crate::shared::api::AuditHeaders;
use crate::shared::crud::{CrudService, CrudUseCase};
use crate::tests::support::in_memory::InMemoryRepository;
use crate::tests::support::stubs::{MockCollaboratorUseCase, MockHumanResourceUseCase};
use crate::AppState;

pub const TEST_APP_NAME: &str = "testApp";

/// Every slot starts as an empty in-memory service; the Collaborator and
/// HumanResource slots start as mocks without expectations.
pub struct TestAppStateBuilder {
    cv: Arc<dyn CrudUseCase<Cv>>,
    experience: Arc<dyn CrudUseCase<Experience>>,
    study: Arc<dyn CrudUseCase<Study>>,
    skill: Arc<dyn CrudUseCase<Skill>>,
    language: Arc<dyn CrudUseCase<Language>>,
    file_entry: Arc<dyn CrudUseCase<FileEntry>>,
    collaborator: Arc<dyn CollaboratorUseCase>,
    human_resource: Arc<dyn HumanResourceUseCase>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let ownership = CvOwnershipSynchronizer::new(
            Arc::new(InMemoryRepository::<Cv>::default()),
            Arc::new(InMemoryRepository::<Collaborator>::default()),
        );

        Self {
            cv: Arc::new(CvService::new(
                InMemoryRepository::<Cv>::default(),
                ownership,
            )),
            experience: Arc::new(CrudService::new(InMemoryRepository::<Experience>::default())),
            study: Arc::new(CrudService::new(InMemoryRepository::<Study>::default())),
            skill: Arc::new(CrudService::new(InMemoryRepository::<Skill>::default())),
            language: Arc::new(CrudService::new(InMemoryRepository::<Language>::default())),
            file_entry: Arc::new(CrudService::new(InMemoryRepository::<FileEntry>::default())),
            collaborator: Arc::new(MockCollaboratorUseCase::new()),
            human_resource: Arc::new(MockHumanResourceUseCase::new()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_cv(mut self, uc: impl CrudUseCase<Cv> + 'static) -> Self {
        self.cv = Arc::new(uc);
        self
    }

    pub fn with_experience(mut self, uc: impl CrudUseCase<Experience> + 'static) -> Self {
        self.experience = Arc::new(uc);
        self
    }

    pub fn with_study(mut self, uc: impl CrudUseCase<Study> + 'static) -> Self {
        self.study = Arc::new(uc);
        self
    }

    pub fn with_skill(mut self, uc: impl CrudUseCase<Skill> + 'static) -> Self {
        self.skill = Arc::new(uc);
        self
    }

    pub fn with_language(mut self, uc: impl CrudUseCase<Language> + 'static) -> Self {
        self.language = Arc::new(uc);
        self
    }

    pub fn with_file_entry(mut self, uc: impl CrudUseCase<FileEntry> + 'static) -> Self {
        self.file_entry = Arc::new(uc);
        self
    }

    pub fn with_collaborator(mut self, uc: impl CollaboratorUseCase + 'static) -> Self {
        self.collaborator = Arc::new(uc);
        self
    }

    pub fn with_human_resource(mut self, uc: impl HumanResourceUseCase + 'static) -> Self {
        self.human_resource = Arc::new(uc);
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            cv: self.cv,
            experience: self.experience,
            study: self.study,
            skill: self.skill,
            language: self.language,
            file_entry: self.file_entry,
            collaborator: self.collaborator,
            human_resource: self.human_resource,
            audit_headers: AuditHeaders::new(TEST_APP_NAME),
        }
    }
}
