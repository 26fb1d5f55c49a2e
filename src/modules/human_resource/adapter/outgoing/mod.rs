pub mod human_resource_repo_postgres;
pub mod sea_orm_entity;

pub use human_resource_repo_postgres::HumanResourceRepoPostgres;
