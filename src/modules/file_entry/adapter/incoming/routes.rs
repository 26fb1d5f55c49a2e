use actix_web::{post, web, Responder};
use std::sync::Arc;

use crate::modules::file_entry::domain::entities::FileEntry;
use crate::shared::api::resource::{create_resource, RestResource};
use crate::shared::crud::CrudUseCase;
use crate::AppState;

impl RestResource for FileEntry {
    const COLLECTION_PATH: &'static str = "/api/file-entries";

    fn use_case(state: &AppState) -> Arc<dyn CrudUseCase<Self>> {
        Arc::clone(&state.file_entry)
    }
}

/// Stores a raw request body as a new FileEntry.
#[post("/api/save-file")]
pub async fn save_file_handler(body: web::Bytes, data: web::Data<AppState>) -> impl Responder {
    let entry = FileEntry {
        id: None,
        data: body.to_vec(),
    };

    create_resource(data, web::Json(entry)).await
}
