pub mod file_entry_repo_postgres;
pub mod sea_orm_entity;

pub use file_entry_repo_postgres::FileEntryRepoPostgres;
