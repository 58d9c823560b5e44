use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    repository::TodoRepository,
    todo::{CreateTodo, Priority, Todo, TodoId, UpdateTodo},
};

/// Ordered in-memory store. Insertion order is listing order.
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    items: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self { items: Arc::new(RwLock::new(todos)) }
    }

    /// Store holding the five fixture todos, ids 1 to 5.
    pub fn seeded() -> Self {
        Self::with_todos(seed_todos())
    }
}

pub fn seed_todos() -> Vec<Todo> {
    let seed = |id, name: &str, description: &str, priority| Todo {
        id: TodoId(id),
        name: name.into(),
        description: description.into(),
        priority,
    };
    vec![
        seed(1, "Sports", "Play football", Priority::High),
        seed(2, "Read", "Merchant of Venice", Priority::Medium),
        seed(3, "Shop", "Buy groceries", Priority::Low),
        seed(4, "Study", "Study for exams", Priority::Medium),
        seed(5, "Mediate", "Meditate for 30 minutes", Priority::Low),
    ]
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, input: CreateTodo) -> Result<Todo> {
        let mut items = self.items.write().await;
        let next = items.iter().map(|t| t.id.0).max().map_or(1, |max| max + 1);
        let todo = input.into_todo(TodoId(next));
        items.push(todo.clone());
        Ok(todo)
    }

    async fn get(&self, id: TodoId) -> Result<Option<Todo>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self, limit: Option<i64>) -> Result<Vec<Todo>> {
        let items = self.items.read().await;
        let end = prefix_len(items.len(), limit);
        Ok(items[..end].to_vec())
    }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> Result<Option<Todo>> {
        let mut items = self.items.write().await;
        let Some(todo) = items.iter_mut().find(|t| t.id == id) else { return Ok(None) };
        input.apply_to(todo);
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: TodoId) -> Result<Option<Todo>> {
        let mut items = self.items.write().await;
        let Some(index) = items.iter().position(|t| t.id == id) else { return Ok(None) };
        Ok(Some(items.remove(index)))
    }
}

/// Length of the listed prefix. Zero and absent both mean "everything";
/// a negative limit drops that many entries from the end.
fn prefix_len(len: usize, limit: Option<i64>) -> usize {
    match limit {
        None | Some(0) => len,
        Some(n) if n > 0 => len.min(usize::try_from(n).unwrap_or(usize::MAX)),
        Some(n) => len.saturating_sub(usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX)),
    }
}
