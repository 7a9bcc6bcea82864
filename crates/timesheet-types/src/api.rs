use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::models::{Task, User};

// -- Envelope --

/// Uniform response body: `{status, data, err}`. Exactly one of `data` and
/// `err` is set, and `status` says which.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: bool,
    pub data: Option<T>,
    pub err: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: true,
            data: Some(data),
            err: None,
        }
    }

    pub fn error(err: impl Display) -> Self {
        Self {
            status: false,
            data: None,
            err: Some(err.to_string()),
        }
    }
}

pub type TaskResponse = Envelope<Task>;
pub type TasksResponse = Envelope<Vec<Task>>;
pub type UserResponse = Envelope<User>;
pub type UsersResponse = Envelope<Vec<User>>;

/// Error bodies carry no data, so the payload type is unit.
pub type ErrorResponse = Envelope<()>;

// -- Auth --

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
