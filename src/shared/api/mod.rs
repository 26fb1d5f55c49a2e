pub mod errors;
pub mod headers;
pub mod json_config;
pub mod resource;
pub mod response;

pub use errors::use_case_error_response;
pub use headers::{AuditAction, AuditHeaders};
pub use response::ApiResponse;
