use actix_web::{get, web, HttpRequest, HttpResponse, Responder};

use crate::shared::api::headers::with_pagination;
use crate::shared::api::{use_case_error_response, ApiResponse};
use crate::shared::persistence::PageRequest;
use crate::AppState;

#[get("/api/collaborators")]
pub async fn get_collaborators_handler(
    req: HttpRequest,
    query: web::Query<PageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.collaborator.find_all(query.into_inner()).await {
        Ok(page) => with_pagination(ApiResponse::success(&page), req.path(), &page),
        Err(e) => use_case_error_response(e),
    }
}
