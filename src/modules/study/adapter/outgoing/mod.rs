pub mod sea_orm_entity;
pub mod study_repo_postgres;

pub use study_repo_postgres::StudyRepoPostgres;
