use actix_web::{put, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::modules::collaborator::domain::entities::{Collaborator, CollaboratorPayload};
use crate::shared::api::{use_case_error_response, ApiResponse, AuditAction};
use crate::shared::persistence::Document;
use crate::AppState;

#[put("/api/collaborators/{id}")]
pub async fn update_collaborator_handler(
    path: web::Path<Uuid>,
    req: web::Json<CollaboratorPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.collaborator.update(id, req.into_inner()).await {
        Ok(updated) => data.audit_headers.apply(
            ApiResponse::success(updated),
            AuditAction::Updated,
            Collaborator::ENTITY_NAME,
            &id.to_string(),
        ),
        Err(e) => use_case_error_response(e),
    }
}
