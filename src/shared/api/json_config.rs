use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PayloadConfig};

/// Room for the JSON around a base64 payload (`{"id": "...", "data": "..."}`).
const JSON_ENVELOPE_BYTES: usize = 16 * 1024;

/// JSON body limit large enough to carry an uploaded file back as base64.
pub fn json_body_limit(max_upload_bytes: usize) -> usize {
    max_upload_bytes
        .div_ceil(3)
        .saturating_mul(4)
        .saturating_add(JSON_ENVELOPE_BYTES)
}

pub fn custom_json_config(limit: usize) -> JsonConfig {
    JsonConfig::default().limit(limit).error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

/// Raw body limit for file uploads.
pub fn upload_payload_config(max_bytes: usize) -> PayloadConfig {
    PayloadConfig::new(max_bytes)
}
