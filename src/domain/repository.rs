use async_trait::async_trait;
use super::todo::{Todo, TodoId, CreateTodo, UpdateTodo};

/// Store seam. Lookups that miss return `None`; the caller decides what that means.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn create(&self, input: CreateTodo) -> anyhow::Result<Todo>;
    async fn get(&self, id: TodoId) -> anyhow::Result<Option<Todo>>;
    async fn list(&self, limit: Option<i64>) -> anyhow::Result<Vec<Todo>>;
    async fn update(&self, id: TodoId, input: UpdateTodo) -> anyhow::Result<Option<Todo>>;
    async fn delete(&self, id: TodoId) -> anyhow::Result<Option<Todo>>;
}
