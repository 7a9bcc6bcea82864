use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use timesheet_types::models::Task;

use crate::error::{parse_id, require_id};
use crate::{Collection, Database, Result};

/// CRUD access to the `tasks` collection.
pub trait TaskRepository: Send + Sync {
    fn create_task(&self, task: Task) -> Result<Task>;
    fn read_tasks(&self) -> Result<Vec<Task>>;
    fn update_task(&self, task: Task) -> Result<Task>;
    fn delete_task(&self, id: &str) -> Result<()>;
}

pub struct SqliteTaskRepository {
    db: Arc<Database>,
}

impl SqliteTaskRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl TaskRepository for SqliteTaskRepository {
    /// Assigns a fresh id, overwriting whatever the caller sent.
    fn create_task(&self, mut task: Task) -> Result<Task> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        task.id = Some(id);
        task.created_at = Some(now);
        task.updated_at = Some(now);

        self.db.insert(Collection::Tasks, &id, &task)?;
        Ok(task)
    }

    fn read_tasks(&self) -> Result<Vec<Task>> {
        self.db.find_all(Collection::Tasks)
    }

    fn update_task(&self, mut task: Task) -> Result<Task> {
        let id = require_id(task.id)?;
        task.updated_at = Some(Utc::now());

        let matched = self.db.replace(Collection::Tasks, &id, &task)?;
        if matched == 0 {
            debug!("Update matched no task with id {}", id);
        }
        Ok(task)
    }

    fn delete_task(&self, id: &str) -> Result<()> {
        let id = parse_id(id)?;
        self.db.delete(Collection::Tasks, &id)?;
        Ok(())
    }
}
