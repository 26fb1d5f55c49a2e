pub mod experience_repo_postgres;
pub mod sea_orm_entity;

pub use experience_repo_postgres::ExperienceRepoPostgres;
