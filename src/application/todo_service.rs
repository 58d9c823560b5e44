use crate::domain::error::TodoError;
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{CreateTodo, Todo, TodoId, UpdateTodo};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, TodoError>;

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn create(&self, input: CreateTodo) -> Result<Todo>;
    async fn get(&self, id: TodoId) -> Result<Todo>;
    /// `limit` of `None` or `Some(0)` lists everything.
    async fn list(&self, limit: Option<i64>) -> Result<Vec<Todo>>;
    async fn update(&self, id: TodoId, input: UpdateTodo) -> Result<Todo>;
    async fn delete(&self, id: TodoId) -> Result<Todo>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn create(&self, input: CreateTodo) -> Result<Todo> {
        input.validate()?;
        let todo = self.repo.create(input).await?;
        tracing::info!(todo_id = %todo.id, "todo created");
        Ok(todo)
    }

    async fn get(&self, id: TodoId) -> Result<Todo> {
        tracing::debug!(todo_id = %id, "get todo");
        self.repo.get(id).await?.ok_or(TodoError::NotFound(id))
    }

    async fn list(&self, limit: Option<i64>) -> Result<Vec<Todo>> {
        tracing::debug!(?limit, "list todos");
        Ok(self.repo.list(limit).await?)
    }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> Result<Todo> {
        input.validate()?;
        let todo = self.repo.update(id, input).await?.ok_or(TodoError::NotFound(id))?;
        tracing::info!(todo_id = %id, "todo updated");
        Ok(todo)
    }

    async fn delete(&self, id: TodoId) -> Result<Todo> {
        let todo = self.repo.delete(id).await?.ok_or(TodoError::NotFound(id))?;
        tracing::info!(todo_id = %id, "todo deleted");
        Ok(todo)
    }
}
