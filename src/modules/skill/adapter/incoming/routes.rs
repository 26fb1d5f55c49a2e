use std::sync::Arc;

use crate::modules::skill::domain::entities::Skill;
use crate::shared::api::resource::RestResource;
use crate::shared::crud::CrudUseCase;
use crate::AppState;

impl RestResource for Skill {
    const COLLECTION_PATH: &'static str = "/api/skills";

    fn use_case(state: &AppState) -> Arc<dyn CrudUseCase<Self>> {
        Arc::clone(&state.skill)
    }
}
