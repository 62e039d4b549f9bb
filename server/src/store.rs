//! The todo store: an ordered, insertion-order sequence of records.
//!
//! Handlers only see the [`TodoStore`] trait, so a persistent backend can
//! replace [`MemoryStore`] without touching the routes.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::model::{Priority, Todo, TodoCreate, TodoUpdate};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Todo not found")]
    NotFound { todo_id: i64 },

    #[error("no todo id left after {max}")]
    IdsExhausted { max: i64 },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD operations over the todo sequence.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// First record with `todo_id`.
    async fn get(&self, todo_id: i64) -> StoreResult<Todo>;

    /// All records, or a prefix of them when `first_n` is set and nonzero.
    ///
    /// A negative `first_n` drops that many records from the end.
    async fn list(&self, first_n: Option<i64>) -> StoreResult<Vec<Todo>>;

    /// Append a new record with id `max(ids) + 1`, or `1` for an empty store.
    async fn create(&self, input: TodoCreate) -> StoreResult<Todo>;

    async fn update(&self, todo_id: i64, patch: TodoUpdate) -> StoreResult<Todo>;

    /// Remove and return the record; the remaining order is kept.
    async fn delete(&self, todo_id: i64) -> StoreResult<Todo>;
}

/// Process-local store guarded by a single lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    todos: RwLock<Vec<Todo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the three startup records.
    pub fn seeded() -> Self {
        Self::with_todos(seed_todos())
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: RwLock::new(todos),
        }
    }
}

/// Records every fresh process starts with.
pub fn seed_todos() -> Vec<Todo> {
    let seed = [
        (1, "Sports", "go to the gym", Priority::Medium),
        (2, "Study", "read a book", Priority::High),
        (3, "Shopping", "buy groceries", Priority::Low),
    ];
    seed.into_iter()
        .map(|(todo_id, name, description, priority)| Todo {
            todo_id,
            todo_name: name.to_string(),
            todo_description: description.to_string(),
            priority,
        })
        .collect()
}

/// Number of leading records a `first_n` query selects out of `len`.
fn prefix_len(len: usize, first_n: Option<i64>) -> usize {
    match first_n {
        None | Some(0) => len,
        Some(n) if n > 0 => usize::try_from(n).map_or(len, |n| n.min(len)),
        Some(n) => {
            let drop = usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX);
            len.saturating_sub(drop)
        }
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn get(&self, todo_id: i64) -> StoreResult<Todo> {
        let todos = self.todos.read().await;
        todos
            .iter()
            .find(|todo| todo.todo_id == todo_id)
            .cloned()
            .ok_or(StoreError::NotFound { todo_id })
    }

    async fn list(&self, first_n: Option<i64>) -> StoreResult<Vec<Todo>> {
        let todos = self.todos.read().await;
        let n = prefix_len(todos.len(), first_n);
        Ok(todos[..n].to_vec())
    }

    async fn create(&self, input: TodoCreate) -> StoreResult<Todo> {
        let mut todos = self.todos.write().await;
        let todo_id = match todos.iter().map(|todo| todo.todo_id).max() {
            Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted { max })?,
            None => 1,
        };
        let todo = input.into_todo(todo_id);
        todos.push(todo.clone());
        tracing::debug!(todo_id, "todo created");
        Ok(todo)
    }

    async fn update(&self, todo_id: i64, patch: TodoUpdate) -> StoreResult<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|todo| todo.todo_id == todo_id)
            .ok_or(StoreError::NotFound { todo_id })?;
        patch.apply(todo);
        tracing::debug!(todo_id, "todo updated");
        Ok(todo.clone())
    }

    async fn delete(&self, todo_id: i64) -> StoreResult<Todo> {
        let mut todos = self.todos.write().await;
        let index = todos
            .iter()
            .position(|todo| todo.todo_id == todo_id)
            .ok_or(StoreError::NotFound { todo_id })?;
        let removed = todos.remove(index);
        tracing::debug!(todo_id, "todo deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(name: &str, description: &str, priority: Priority) -> TodoCreate {
        TodoCreate {
            todo_name: name.to_string(),
            todo_description: description.to_string(),
            priority,
        }
    }

    async fn ids(store: &MemoryStore) -> Vec<i64> {
        store
            .list(None)
            .await
            .unwrap()
            .iter()
            .map(|todo| todo.todo_id)
            .collect()
    }

    #[test]
    fn prefix_len_follows_slice_semantics() {
        assert_eq!(prefix_len(3, None), 3);
        assert_eq!(prefix_len(3, Some(0)), 3);
        assert_eq!(prefix_len(3, Some(2)), 2);
        assert_eq!(prefix_len(3, Some(100)), 3);
        assert_eq!(prefix_len(3, Some(-1)), 2);
        assert_eq!(prefix_len(3, Some(-5)), 0);
        assert_eq!(prefix_len(3, Some(i64::MIN)), 0);
        assert_eq!(prefix_len(0, Some(4)), 0);
    }

    #[tokio::test]
    async fn seeded_store_has_three_records_in_order() {
        let store = MemoryStore::seeded();
        assert_eq!(ids(&store).await, vec![1, 2, 3]);
        let study = store.get(2).await.unwrap();
        assert_eq!(study.todo_name, "Study");
        assert_eq!(study.priority, Priority::High);
    }

    #[tokio::test]
    async fn get_missing_id_is_not_found() {
        let store = MemoryStore::seeded();
        assert_eq!(
            store.get(42).await,
            Err(StoreError::NotFound { todo_id: 42 })
        );
    }

    #[tokio::test]
    async fn list_first_n_returns_prefix() {
        let store = MemoryStore::seeded();
        let firsts = store.list(Some(2)).await.unwrap();
        assert_eq!(
            firsts.iter().map(|t| t.todo_id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(store.list(Some(100)).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn create_assigns_next_id_and_appends() {
        let store = MemoryStore::seeded();
        let created = store
            .create(create_input("Clean", "house", Priority::Medium))
            .await
            .unwrap();
        assert_eq!(created.todo_id, 4);
        assert_eq!(store.get(4).await.unwrap(), created);
        assert_eq!(store.list(None).await.unwrap().last(), Some(&created));
    }

    #[tokio::test]
    async fn create_uses_max_id_not_length() {
        let store = MemoryStore::seeded();
        store.delete(1).await.unwrap();
        store.delete(2).await.unwrap();
        let created = store
            .create(create_input("Clean", "house", Priority::Low))
            .await
            .unwrap();
        assert_eq!(created.todo_id, 4);
    }

    #[tokio::test]
    async fn create_on_empty_store_starts_at_one() {
        let store = MemoryStore::new();
        let created = store
            .create(create_input("First", "ever", Priority::Low))
            .await
            .unwrap();
        assert_eq!(created.todo_id, 1);
    }

    #[tokio::test]
    async fn create_fails_when_ids_run_out() {
        let mut last = seed_todos().remove(0);
        last.todo_id = i64::MAX;
        let store = MemoryStore::with_todos(vec![last]);
        let err = store
            .create(create_input("Overflow", "nope", Priority::Low))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::IdsExhausted { max: i64::MAX });
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let store = MemoryStore::seeded();
        let err = store.update(9, TodoUpdate::default()).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound { todo_id: 9 });
    }

    #[tokio::test]
    async fn update_with_empty_patch_is_a_no_op() {
        let store = MemoryStore::seeded();
        let before = store.get(3).await.unwrap();
        let after = store.update(3, TodoUpdate::default()).await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn delete_removes_one_and_keeps_order() {
        let store = MemoryStore::seeded();
        let removed = store.delete(2).await.unwrap();
        assert_eq!(removed.todo_name, "Study");
        assert_eq!(ids(&store).await, vec![1, 3]);
        assert_eq!(
            store.delete(2).await,
            Err(StoreError::NotFound { todo_id: 2 })
        );
    }

    #[tokio::test]
    async fn seed_scenario() {
        let store = MemoryStore::seeded();
        let created = store
            .create(create_input("Clean", "house", Priority::Medium))
            .await
            .unwrap();
        assert_eq!(created.todo_id, 4);

        let removed = store.delete(2).await.unwrap();
        assert_eq!(removed.todo_id, 2);
        assert_eq!(ids(&store).await, vec![1, 3, 4]);

        let updated = store
            .update(
                1,
                TodoUpdate {
                    priority: Some(Priority::High),
                    ..TodoUpdate::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.todo_name, "Sports");
        assert_eq!(updated.todo_description, "go to the gym");
    }
}
