use std::sync::Arc;

use crate::modules::study::domain::entities::Study;
use crate::shared::api::resource::RestResource;
use crate::shared::crud::CrudUseCase;
use crate::AppState;

impl RestResource for Study {
    const COLLECTION_PATH: &'static str = "/api/studies";

    fn use_case(state: &AppState) -> Arc<dyn CrudUseCase<Self>> {
        Arc::clone(&state.study)
    }
}
