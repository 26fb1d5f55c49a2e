use actix_web::{get, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::shared::api::{use_case_error_response, ApiResponse};
use crate::AppState;

#[get("/api/collaborators/{id}")]
pub async fn get_collaborator_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.collaborator.find_one(path.into_inner()).await {
        Ok(collaborator) => ApiResponse::success(collaborator),
        Err(e) => use_case_error_response(e),
    }
}
