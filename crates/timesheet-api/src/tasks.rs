use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use tracing::info;

use timesheet_types::api::{Envelope, TaskResponse, TasksResponse};
use timesheet_types::models::{DeleteRequest, Task};

use crate::error::ApiError;
use crate::run_blocking;
use crate::service::TaskService;

pub fn routes(service: TaskService) -> Router {
    Router::new()
        .route(
            "/task",
            post(add_task).put(update_task).delete(remove_task).get(get_tasks),
        )
        .with_state(service)
}

/// POST /task
pub async fn add_task(
    State(service): State<TaskService>,
    payload: Result<Json<Task>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError> {
    let Json(task) = payload?;
    if task.task.is_empty() {
        return Err(ApiError::Validation("Please specify task details"));
    }

    let created = run_blocking(move || service.insert_task(task)).await?;
    if let Some(id) = created.id {
        info!("Created task {}", id);
    }
    Ok(Json(Envelope::success(created)))
}

/// PUT /task
pub async fn update_task(
    State(service): State<TaskService>,
    payload: Result<Json<Task>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError> {
    let Json(task) = payload?;
    let updated = run_blocking(move || service.update_task(task)).await?;
    Ok(Json(Envelope::success(updated)))
}

/// DELETE /task
pub async fn remove_task(
    State(service): State<TaskService>,
    payload: Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<Json<Envelope<&'static str>>, ApiError> {
    let Json(req) = payload?;
    run_blocking(move || service.remove_task(&req.id)).await?;
    Ok(Json(Envelope::success("updated successfully")))
}

/// GET /task
pub async fn get_tasks(
    State(service): State<TaskService>,
) -> Result<Json<TasksResponse>, ApiError> {
    let tasks = run_blocking(move || service.fetch_tasks()).await?;
    Ok(Json(Envelope::success(tasks)))
}
