pub mod error;
pub mod service;
pub mod tasks;
pub mod users;

use axum::{Router, routing::get};
use tracing::error;

use timesheet_db::RepoError;

use crate::error::ApiError;
use crate::service::{TaskService, UserService};

/// All REST routes, with each entity's service injected into its own sub-router.
pub fn router(tasks: TaskService, users: UserService) -> Router {
    Router::new()
        .merge(tasks::routes(tasks))
        .merge(users::routes(users))
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "ok"
}

/// Run a blocking repository call off the async runtime.
pub(crate) async fn run_blocking<F, T>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, RepoError> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(f).await.map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        ApiError::Join
    })?;
    Ok(result?)
}
