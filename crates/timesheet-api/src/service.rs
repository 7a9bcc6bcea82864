use std::sync::Arc;

use timesheet_db::{RepoError, TaskRepository, UserRepository};
use timesheet_types::models::{Task, User};

type Result<T> = std::result::Result<T, RepoError>;

/// Handlers' entry point for tasks. Cheap to clone; the repository is shared.
#[derive(Clone)]
pub struct TaskService {
    repo: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }

    pub fn insert_task(&self, task: Task) -> Result<Task> {
        self.repo.create_task(task)
    }

    pub fn fetch_tasks(&self) -> Result<Vec<Task>> {
        self.repo.read_tasks()
    }

    pub fn update_task(&self, task: Task) -> Result<Task> {
        self.repo.update_task(task)
    }

    pub fn remove_task(&self, id: &str) -> Result<()> {
        self.repo.delete_task(id)
    }
}

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub fn insert_user(&self, user: User) -> Result<User> {
        self.repo.create_user(user)
    }

    pub fn fetch_users(&self) -> Result<Vec<User>> {
        self.repo.read_users()
    }

    pub fn update_user(&self, user: User) -> Result<User> {
        self.repo.update_user(user)
    }

    pub fn remove_user(&self, id: &str) -> Result<()> {
        self.repo.delete_user(id)
    }

    /// Look up the user whose stored email and password both match. No
    /// session or token is issued.
    pub fn login_user(&self, email: &str, password: &str) -> Result<User> {
        self.repo
            .find_by_credentials(email, password)?
            .ok_or(RepoError::NotFound("no user matches the given email and password"))
    }
}
