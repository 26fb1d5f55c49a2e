use actix_web::{delete, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::modules::collaborator::domain::entities::Collaborator;
use crate::shared::api::{use_case_error_response, ApiResponse, AuditAction};
use crate::shared::persistence::Document;
use crate::AppState;

/// Removes the Collaborator only. Its User and Cv are left in place.
#[delete("/api/collaborators/{id}")]
pub async fn delete_collaborator_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.collaborator.delete(id).await {
        Ok(()) => data.audit_headers.apply(
            ApiResponse::no_content(),
            AuditAction::Deleted,
            Collaborator::ENTITY_NAME,
            &id.to_string(),
        ),
        Err(e) => use_case_error_response(e),
    }
}
