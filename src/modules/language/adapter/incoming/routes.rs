use std::sync::Arc;

use crate::modules::language::domain::entities::Language;
use crate::shared::api::resource::RestResource;
use crate::shared::crud::CrudUseCase;
use crate::AppState;

impl RestResource for Language {
    const COLLECTION_PATH: &'static str = "/api/languages";

    fn use_case(state: &AppState) -> Arc<dyn CrudUseCase<Self>> {
        Arc::clone(&state.language)
    }
}
