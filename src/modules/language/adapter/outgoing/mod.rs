pub mod language_repo_postgres;
pub mod sea_orm_entity;

pub use language_repo_postgres::LanguageRepoPostgres;
