use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use timesheet_types::models::User;

use crate::error::{parse_id, require_id};
use crate::{Collection, Database, Result};

/// CRUD access to the `users` collection, plus lookup by login credentials.
pub trait UserRepository: Send + Sync {
    fn create_user(&self, user: User) -> Result<User>;
    fn read_users(&self) -> Result<Vec<User>>;
    fn update_user(&self, user: User) -> Result<User>;
    fn delete_user(&self, id: &str) -> Result<()>;
    /// Exact match on both email and stored password.
    fn find_by_credentials(&self, email: &str, password: &str) -> Result<Option<User>>;
}

pub struct SqliteUserRepository {
    db: Arc<Database>,
}

impl SqliteUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create_user(&self, mut user: User) -> Result<User> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        user.id = Some(id);
        user.created_at = Some(now);
        user.updated_at = Some(now);

        self.db.insert(Collection::Users, &id, &user)?;
        Ok(user)
    }

    fn read_users(&self) -> Result<Vec<User>> {
        self.db.find_all(Collection::Users)
    }

    fn update_user(&self, mut user: User) -> Result<User> {
        let id = require_id(user.id)?;
        user.updated_at = Some(Utc::now());

        let matched = self.db.replace(Collection::Users, &id, &user)?;
        if matched == 0 {
            debug!("Update matched no user with id {}", id);
        }
        Ok(user)
    }

    fn delete_user(&self, id: &str) -> Result<()> {
        let id = parse_id(id)?;
        self.db.delete(Collection::Users, &id)?;
        Ok(())
    }

    fn find_by_credentials(&self, email: &str, password: &str) -> Result<Option<User>> {
        self.db
            .find_one_where(Collection::Users, &[("email", email), ("password", password)])
    }
}
