pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::modules::auth::adapter::outgoing::UserRepositoryPostgres;
use crate::modules::auth::application::orchestrator::UserProvisioner;
use crate::modules::auth::application::ports::outgoing::PasswordHasher;
use crate::modules::collaborator::adapter::incoming::web::routes as collaborator_routes;
use crate::modules::collaborator::adapter::outgoing::CollaboratorRepoPostgres;
use crate::modules::collaborator::application::services::CollaboratorService;
use crate::modules::collaborator::application::use_cases::CollaboratorUseCase;
use crate::modules::cv::adapter::outgoing::CvRepoPostgres;
use crate::modules::cv::application::orchestrator::CvOwnershipSynchronizer;
use crate::modules::cv::application::services::CvService;
use crate::modules::cv::domain::entities::Cv;
use crate::modules::experience::adapter::outgoing::ExperienceRepoPostgres;
use crate::modules::experience::domain::entities::Experience;
use crate::modules::file_entry::adapter::incoming::routes::save_file_handler;
use crate::modules::file_entry::adapter::outgoing::FileEntryRepoPostgres;
use crate::modules::file_entry::domain::entities::FileEntry;
use crate::modules::human_resource::adapter::outgoing::HumanResourceRepoPostgres;
use crate::modules::human_resource::application::services::HumanResourceService;
use crate::modules::human_resource::application::use_cases::HumanResourceUseCase;
use crate::modules::language::adapter::outgoing::LanguageRepoPostgres;
use crate::modules::language::domain::entities::Language;
use crate::modules::skill::adapter::outgoing::SkillRepoPostgres;
use crate::modules::skill::domain::entities::Skill;
use crate::modules::study::adapter::outgoing::StudyRepoPostgres;
use crate::modules::study::domain::entities::Study;
use crate::shared::api::json_config::{
    custom_json_config, json_body_limit, upload_payload_config,
};
use crate::shared::api::resource::configure_resource;
use crate::shared::api::AuditHeaders;
use crate::shared::clock::SystemClock;
use crate::shared::config::{AppConfig, HasherKind};
use crate::shared::crud::{CrudService, CrudUseCase};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub cv: Arc<dyn CrudUseCase<Cv>>,
    pub experience: Arc<dyn CrudUseCase<Experience>>,
    pub study: Arc<dyn CrudUseCase<Study>>,
    pub skill: Arc<dyn CrudUseCase<Skill>>,
    pub language: Arc<dyn CrudUseCase<Language>>,
    pub file_entry: Arc<dyn CrudUseCase<FileEntry>>,
    pub collaborator: Arc<dyn CollaboratorUseCase>,
    pub human_resource: Arc<dyn HumanResourceUseCase>,
    pub audit_headers: AuditHeaders,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(&conn, None)
            .await
            .context("Failed to apply migrations")?;
    }

    let db_arc = Arc::new(conn);

    let hasher: Arc<dyn PasswordHasher> = match config.password_hasher {
        HasherKind::Argon2 => Arc::new(
            Argon2Hasher::from_settings(&config.argon2)
                .map_err(|e| anyhow::anyhow!("Invalid Argon2 settings: {e}"))?,
        ),
        HasherKind::Bcrypt => Arc::new(BcryptHasher::new(config.bcrypt_cost)),
    };

    let state = build_state(Arc::clone(&db_arc), hasher, &config);
    let max_upload_bytes = config.max_upload_bytes;

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config(json_body_limit(max_upload_bytes)))
            .app_data(upload_payload_config(max_upload_bytes))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    db: Arc<DatabaseConnection>,
    hasher: Arc<dyn PasswordHasher>,
    config: &AppConfig,
) -> AppState {
    let cv_repo = CvRepoPostgres::new(Arc::clone(&db));
    let collaborator_repo = CollaboratorRepoPostgres::new(Arc::clone(&db));

    let cv_ownership = CvOwnershipSynchronizer::new(
        Arc::new(cv_repo.clone()),
        Arc::new(collaborator_repo.clone()),
    );
    let users = UserProvisioner::new(
        Arc::new(UserRepositoryPostgres::new(Arc::clone(&db))),
        hasher,
        Arc::new(SystemClock),
    );

    AppState {
        cv: Arc::new(CvService::new(cv_repo, cv_ownership.clone())),
        experience: Arc::new(CrudService::new(ExperienceRepoPostgres::new(Arc::clone(&db)))),
        study: Arc::new(CrudService::new(StudyRepoPostgres::new(Arc::clone(&db)))),
        skill: Arc::new(CrudService::new(SkillRepoPostgres::new(Arc::clone(&db)))),
        language: Arc::new(CrudService::new(LanguageRepoPostgres::new(Arc::clone(&db)))),
        file_entry: Arc::new(CrudService::new(FileEntryRepoPostgres::new(Arc::clone(&db)))),
        collaborator: Arc::new(CollaboratorService::new(
            collaborator_repo,
            users.clone(),
            cv_ownership,
        )),
        human_resource: Arc::new(HumanResourceService::new(
            HumanResourceRepoPostgres::new(Arc::clone(&db)),
            users,
        )),
        audit_headers: AuditHeaders::new(config.application_name.clone()),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Collaborators
    cfg.service(collaborator_routes::get_collaborator_by_user_handler);
    cfg.service(collaborator_routes::get_collaborators_handler);
    cfg.service(collaborator_routes::get_collaborator_handler);
    cfg.service(collaborator_routes::create_collaborator_handler);
    cfg.service(collaborator_routes::update_collaborator_handler);
    cfg.service(collaborator_routes::patch_collaborator_handler);
    cfg.service(collaborator_routes::delete_collaborator_handler);
    // Human resources
    cfg.configure(crate::modules::human_resource::adapter::incoming::routes::configure_routes);
    // Cv and its parts
    cfg.configure(configure_resource::<Cv>);
    cfg.configure(configure_resource::<Experience>);
    cfg.configure(configure_resource::<Study>);
    cfg.configure(configure_resource::<Skill>);
    cfg.configure(configure_resource::<Language>);
    cfg.configure(configure_resource::<FileEntry>);
    cfg.service(save_file_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
