use actix_web::{web, HttpRequest, HttpResponse};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::api::headers::with_pagination;
use crate::shared::api::{use_case_error_response, ApiResponse, AuditAction};
use crate::shared::crud::CrudUseCase;
use crate::shared::patch::Merge;
use crate::shared::persistence::{Document, PageRequest};
use crate::AppState;

/// A record served under `/api/<collection>` with the standard six routes.
pub trait RestResource: Document + Merge + Serialize + DeserializeOwned + Debug {
    const COLLECTION_PATH: &'static str;

    fn use_case(state: &AppState) -> Arc<dyn CrudUseCase<Self>>;
}

pub fn configure_resource<T>(cfg: &mut web::ServiceConfig)
where
    T: RestResource,
    T::Patch: DeserializeOwned,
{
    cfg.service(
        web::resource(T::COLLECTION_PATH)
            .route(web::get().to(list_resources::<T>))
            .route(web::post().to(create_resource::<T>)),
    )
    .service(
        web::resource(format!("{}/{{id}}", T::COLLECTION_PATH))
            .route(web::get().to(get_resource::<T>))
            .route(web::put().to(update_resource::<T>))
            .route(web::patch().to(patch_resource::<T>))
            .route(web::delete().to(delete_resource::<T>)),
    );
}

pub async fn create_resource<T: RestResource>(
    data: web::Data<AppState>,
    body: web::Json<T>,
) -> HttpResponse {
    match T::use_case(&data).create(body.into_inner()).await {
        Ok(saved) => {
            let id = saved.id().map(|id| id.to_string()).unwrap_or_default();
            let location = format!("{}/{}", T::COLLECTION_PATH, id);
            data.audit_headers.apply(
                ApiResponse::created(&location, saved),
                AuditAction::Created,
                T::ENTITY_NAME,
                &id,
            )
        }
        Err(e) => use_case_error_response(e),
    }
}

pub async fn update_resource<T: RestResource>(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<T>,
) -> HttpResponse {
    let id = path.into_inner();

    match T::use_case(&data).update(id, body.into_inner()).await {
        Ok(saved) => data.audit_headers.apply(
            ApiResponse::success(saved),
            AuditAction::Updated,
            T::ENTITY_NAME,
            &id.to_string(),
        ),
        Err(e) => use_case_error_response(e),
    }
}

pub async fn patch_resource<T>(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<T::Patch>,
) -> HttpResponse
where
    T: RestResource,
    T::Patch: DeserializeOwned,
{
    let id = path.into_inner();

    match T::use_case(&data).partial_update(id, body.into_inner()).await {
        Ok(saved) => data.audit_headers.apply(
            ApiResponse::success(saved),
            AuditAction::Updated,
            T::ENTITY_NAME,
            &id.to_string(),
        ),
        Err(e) => use_case_error_response(e),
    }
}

pub async fn list_resources<T: RestResource>(
    req: HttpRequest,
    data: web::Data<AppState>,
    query: web::Query<PageRequest>,
) -> HttpResponse {
    match T::use_case(&data).find_all(query.into_inner()).await {
        Ok(page) => with_pagination(ApiResponse::success(&page), req.path(), &page),
        Err(e) => use_case_error_response(e),
    }
}

pub async fn get_resource<T: RestResource>(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match T::use_case(&data).find_one(path.into_inner()).await {
        Ok(found) => ApiResponse::success(found),
        Err(e) => use_case_error_response(e),
    }
}

pub async fn delete_resource<T: RestResource>(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();

    match T::use_case(&data).delete(id).await {
        Ok(()) => data.audit_headers.apply(
            ApiResponse::no_content(),
            AuditAction::Deleted,
            T::ENTITY_NAME,
            &id.to_string(),
        ),
        Err(e) => use_case_error_response(e),
    }
}
