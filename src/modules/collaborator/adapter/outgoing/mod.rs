pub mod collaborator_repo_postgres;
pub mod sea_orm_entity;

pub use collaborator_repo_postgres::CollaboratorRepoPostgres;
