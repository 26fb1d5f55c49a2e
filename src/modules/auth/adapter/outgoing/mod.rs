pub mod sea_orm_entity;
pub mod security;
pub mod user_repository_postgres;

pub use user_repository_postgres::UserRepositoryPostgres;
