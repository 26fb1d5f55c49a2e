use actix_web::{get, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::shared::api::{use_case_error_response, ApiResponse};
use crate::AppState;

#[get("/api/collaborators/by-user/{user_id}")]
pub async fn get_collaborator_by_user_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.collaborator.find_by_user(path.into_inner()).await {
        Ok(collaborator) => ApiResponse::success(collaborator),
        Err(e) => use_case_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::collaborator::domain::entities::Collaborator;
    use crate::shared::crud::UseCaseError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::MockCollaboratorUseCase;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_get_collaborator_by_user() {
        let (id, user) = (Uuid::new_v4(), Uuid::new_v4());
        let mut uc = MockCollaboratorUseCase::new();
        uc.expect_find_by_user()
            .withf(move |requested| *requested == user)
            .returning(move |_| {
                Ok(Collaborator {
                    id: Some(id),
                    user,
                    cv: None,
                })
            });

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(
                    TestAppStateBuilder::default().with_collaborator(uc).build(),
                ))
                .service(get_collaborator_by_user_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/collaborators/by-user/{user}"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], id.to_string());
    }

    #[actix_web::test]
    async fn test_get_collaborator_by_user_without_collaborator() {
        let mut uc = MockCollaboratorUseCase::new();
        uc.expect_find_by_user()
            .returning(|_| Err(UseCaseError::not_found("collaborator")));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(
                    TestAppStateBuilder::default().with_collaborator(uc).build(),
                ))
                .service(get_collaborator_by_user_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/collaborators/by-user/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
