use actix_web::HttpResponse;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::shared::crud::UseCaseError;

pub fn use_case_error_response(err: UseCaseError) -> HttpResponse {
    match err {
        UseCaseError::NotFound { entity } => ApiResponse::not_found(
            &format!("{}_NOT_FOUND", entity.to_uppercase()),
            &err.to_string(),
        ),

        UseCaseError::InvalidRequest { code, ref message } => {
            ApiResponse::bad_request(code, message)
        }

        UseCaseError::HashingFailed(ref e) | UseCaseError::StoreFailure(ref e) => {
            error!("Request failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
