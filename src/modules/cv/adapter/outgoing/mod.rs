pub mod cv_repo_postgres;
pub mod sea_orm_entity;

pub use cv_repo_postgres::CvRepoPostgres;
