use actix_web::{post, web, HttpResponse, Responder};

use crate::modules::collaborator::domain::entities::{Collaborator, CollaboratorPayload};
use crate::shared::api::{use_case_error_response, ApiResponse, AuditAction};
use crate::shared::persistence::Document;
use crate::AppState;

#[post("/api/collaborators")]
pub async fn create_collaborator_handler(
    req: web::Json<CollaboratorPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.collaborator.create(req.into_inner()).await {
        Ok(created) => {
            let id = created.id.map(|id| id.to_string()).unwrap_or_default();
            let location = format!("/api/collaborators/{id}");
            data.audit_headers.apply(
                ApiResponse::created(&location, created),
                AuditAction::Created,
                Collaborator::ENTITY_NAME,
                &id,
            )
        }
        Err(e) => use_case_error_response(e),
    }
}
