use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored entities. These are the documents persisted in the `tasks` and
/// `users` collections, serialized as-is (including the storage-assigned `id`).
///
/// Missing string fields decode as empty so that required-field checks happen
/// in the handlers rather than in the JSON layer.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Passwords are stored and compared as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `DELETE /task` and `DELETE /user`. The id stays a raw string until
/// the repository parses it.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub id: String,
}

impl Task {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            id: None,
            task: task.into(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl User {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: None,
            email: email.into(),
            password: password.into(),
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_decode_as_empty() {
        let task: Task = serde_json::from_str("{}").unwrap();
        assert_eq!(task, Task::new(""));

        let user: User = serde_json::from_str(r#"{"email": "a@b.c"}"#).unwrap();
        assert_eq!(user.email, "a@b.c");
        assert!(user.password.is_empty());
        assert!(user.id.is_none());
    }

    #[test]
    fn malformed_id_is_rejected() {
        let result = serde_json::from_str::<Task>(r#"{"id": "nope", "task": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn unset_timestamps_are_omitted() {
        let json = serde_json::to_value(Task::new("write report")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": null, "task": "write report" }));
    }
}
