use actix_web::{patch, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::modules::collaborator::domain::entities::Collaborator;
use crate::shared::api::{use_case_error_response, ApiResponse, AuditAction};
use crate::shared::patch::NoPatchableFields;
use crate::shared::persistence::Document;
use crate::AppState;

/// Nothing on a Collaborator is patchable; the stored record is saved back unchanged.
#[patch("/api/collaborators/{id}")]
pub async fn patch_collaborator_handler(
    path: web::Path<Uuid>,
    req: web::Json<NoPatchableFields>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.collaborator.partial_update(id, req.into_inner()).await {
        Ok(saved) => data.audit_headers.apply(
            ApiResponse::success(saved),
            AuditAction::Updated,
            Collaborator::ENTITY_NAME,
            &id.to_string(),
        ),
        Err(e) => use_case_error_response(e),
    }
}
