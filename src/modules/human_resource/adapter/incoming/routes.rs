use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::modules::human_resource::domain::entities::{HumanResource, HumanResourcePayload};
use crate::shared::api::headers::with_pagination;
use crate::shared::api::{use_case_error_response, ApiResponse, AuditAction};
use crate::shared::patch::NoPatchableFields;
use crate::shared::persistence::{Document, PageRequest};
use crate::AppState;

const COLLECTION_PATH: &str = "/api/human-resources";

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(COLLECTION_PATH)
            .route(web::get().to(get_human_resources))
            .route(web::post().to(create_human_resource)),
    )
    .service(
        web::resource(format!("{COLLECTION_PATH}/{{id}}"))
            .route(web::get().to(get_human_resource))
            .route(web::put().to(update_human_resource))
            .route(web::patch().to(patch_human_resource))
            .route(web::delete().to(delete_human_resource)),
    );
}

async fn create_human_resource(
    req: web::Json<HumanResourcePayload>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.human_resource.create(req.into_inner()).await {
        Ok(created) => {
            let id = created.id.map(|id| id.to_string()).unwrap_or_default();
            data.audit_headers.apply(
                ApiResponse::created(&format!("{COLLECTION_PATH}/{id}"), created),
                AuditAction::Created,
                HumanResource::ENTITY_NAME,
                &id,
            )
        }
        Err(e) => use_case_error_response(e),
    }
}

async fn update_human_resource(
    path: web::Path<Uuid>,
    req: web::Json<HumanResourcePayload>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();

    match data.human_resource.update(id, req.into_inner()).await {
        Ok(updated) => data.audit_headers.apply(
            ApiResponse::success(updated),
            AuditAction::Updated,
            HumanResource::ENTITY_NAME,
            &id.to_string(),
        ),
        Err(e) => use_case_error_response(e),
    }
}

async fn patch_human_resource(
    path: web::Path<Uuid>,
    req: web::Json<NoPatchableFields>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();

    match data.human_resource.partial_update(id, req.into_inner()).await {
        Ok(saved) => data.audit_headers.apply(
            ApiResponse::success(saved),
            AuditAction::Updated,
            HumanResource::ENTITY_NAME,
            &id.to_string(),
        ),
        Err(e) => use_case_error_response(e),
    }
}

async fn get_human_resources(
    req: HttpRequest,
    query: web::Query<PageRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.human_resource.find_all(query.into_inner()).await {
        Ok(page) => with_pagination(ApiResponse::success(&page), req.path(), &page),
        Err(e) => use_case_error_response(e),
    }
}

async fn get_human_resource(path: web::Path<Uuid>, data: web::Data<AppState>) -> HttpResponse {
    match data.human_resource.find_one(path.into_inner()).await {
        Ok(found) => ApiResponse::success(found),
        Err(e) => use_case_error_response(e),
    }
}

async fn delete_human_resource(path: web::Path<Uuid>, data: web::Data<AppState>) -> HttpResponse {
    let id = path.into_inner();

    match data.human_resource.delete(id).await {
        Ok(()) => data.audit_headers.apply(
            ApiResponse::no_content(),
            AuditAction::Deleted,
            HumanResource::ENTITY_NAME,
            &id.to_string(),
        ),
        Err(e) => use_case_error_response(e),
    }
}
