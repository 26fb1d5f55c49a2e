use std::sync::Arc;

use crate::modules::cv::domain::entities::Cv;
use crate::shared::api::resource::RestResource;
use crate::shared::crud::CrudUseCase;
use crate::AppState;

impl RestResource for Cv {
    const COLLECTION_PATH: &'static str = "/api/cvs";

    fn use_case(state: &AppState) -> Arc<dyn CrudUseCase<Self>> {
        Arc::clone(&state.cv)
    }
}
