use axum::{
    extract::{Json, Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    utils::{error_codes, error_to_api_response, success_to_api_response},
};

use super::model::{CreateUserRequest, UpdateUserRequest};

fn bad_request(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        error_to_api_response::<()>(error_codes::VALIDATION_ERROR, rejection.body_text()),
    )
        .into_response()
}

#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Response {
    match state.users.list().await {
        Ok(users) => (StatusCode::OK, success_to_api_response(users)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[axum::debug_handler]
pub async fn get_user(State(state): State<AppState>, Path(username): Path<String>) -> Response {
    match state.users.get(&username).await {
        Ok(user) => (StatusCode::OK, success_to_api_response(user)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    req: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match req {
        Ok(req) => req,
        Err(rejection) => return bad_request(rejection),
    };

    match state.users.create(&req.username, &req.email).await {
        Ok(user) => (StatusCode::CREATED, success_to_api_response(user)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    req: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match req {
        Ok(req) => req,
        Err(rejection) => return bad_request(rejection),
    };

    match state.users.update(&username, &req.email).await {
        Ok(user) => (StatusCode::OK, success_to_api_response(user)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[axum::debug_handler]
pub async fn delete_user(State(state): State<AppState>, Path(username): Path<String>) -> Response {
    match state.users.delete(&username).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
