use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use tracing::info;

use timesheet_types::api::{Envelope, LoginRequest, UserResponse, UsersResponse};
use timesheet_types::models::{DeleteRequest, User};

use crate::error::ApiError;
use crate::run_blocking;
use crate::service::UserService;

pub fn routes(service: UserService) -> Router {
    Router::new()
        .route(
            "/user",
            post(add_user).put(update_user).delete(remove_user).get(get_users),
        )
        .route("/user/login", post(login_user))
        .with_state(service)
}

/// POST /user
pub async fn add_user(
    State(service): State<UserService>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Json(user) = payload?;
    if user.email.is_empty() {
        return Err(ApiError::Validation("Please specify user details"));
    }

    // Only the id is logged; credentials stay out of the logs.
    let created = run_blocking(move || service.insert_user(user)).await?;
    if let Some(id) = created.id {
        info!("Registered user {}", id);
    }
    Ok(Json(Envelope::success(created)))
}

/// PUT /user
pub async fn update_user(
    State(service): State<UserService>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Json(user) = payload?;
    let updated = run_blocking(move || service.update_user(user)).await?;
    Ok(Json(Envelope::success(updated)))
}

/// DELETE /user
pub async fn remove_user(
    State(service): State<UserService>,
    payload: Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<Json<Envelope<&'static str>>, ApiError> {
    let Json(req) = payload?;
    run_blocking(move || service.remove_user(&req.id)).await?;
    Ok(Json(Envelope::success("Updated Successfully!")))
}

/// POST /user/login. Responds with the stored user record as-is.
pub async fn login_user(
    State(service): State<UserService>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Json(req) = payload?;
    let user = run_blocking(move || service.login_user(&req.email, &req.password)).await?;
    Ok(Json(Envelope::success(user)))
}

/// GET /user
pub async fn get_users(
    State(service): State<UserService>,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = run_blocking(move || service.fetch_users()).await?;
    Ok(Json(Envelope::success(users)))
}
