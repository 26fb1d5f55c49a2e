use std::sync::Arc;

use crate::modules::experience::domain::entities::Experience;
use crate::shared::api::resource::RestResource;
use crate::shared::crud::CrudUseCase;
use crate::AppState;

impl RestResource for Experience {
    const COLLECTION_PATH: &'static str = "/api/experiences";

    fn use_case(state: &AppState) -> Arc<dyn CrudUseCase<Self>> {
        Arc::clone(&state.experience)
    }
}
