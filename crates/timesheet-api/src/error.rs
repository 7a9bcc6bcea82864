use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use timesheet_db::RepoError;
use timesheet_types::api::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    BodyParse(#[from] JsonRejection),

    #[error("{0}")]
    Validation(&'static str),

    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error("request handler failed")]
    Join,
}

impl ApiError {
    /// Only malformed bodies are client errors. Empty required fields still
    /// answer 500, which existing clients depend on.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BodyParse(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) | ApiError::Repo(_) | ApiError::Join => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::error(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            ApiError::Validation("Please specify task details").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Repo(RepoError::InvalidIdentifier("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::Join.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn repo_messages_pass_through() {
        let err = ApiError::from(RepoError::Persistence("disk I/O error".into()));
        assert_eq!(err.to_string(), "disk I/O error");
    }
}
