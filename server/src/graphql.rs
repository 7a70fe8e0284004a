//! GraphQL resolver layer.
//!
//! # Design
//! Four operations, one-to-one with the store: a read with an optional
//! filter, and create/toggle/delete mutations. The shared store is
//! injected as schema data when the schema is built, so resolvers carry
//! no global state. Store errors cross the wire as field errors with a
//! machine-readable `code` extension (`NOT_FOUND`, `BAD_USER_INPUT`).

use async_graphql::{
    Context, EmptySubscription, Error, ErrorExtensions, InputObject, Object, Result, Schema, ID,
};

use crate::store::{Priority, SharedStore, StoreError, Todo, TodoFilter};

/// Schema with the store attached as data.
pub type TodoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over a shared store.
pub fn build_schema(store: SharedStore) -> TodoSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Payload for `addTodo`. Priority defaults to medium when unspecified.
#[derive(Debug, Clone, InputObject)]
pub struct TodoInput {
    pub task: String,
    #[graphql(default_with = "Priority::Medium")]
    pub priority: Priority,
}

impl ErrorExtensions for StoreError {
    fn extend(&self) -> Error {
        Error::new(self.to_string()).extend_with(|_, e| match self {
            StoreError::NotFound(_) => e.set("code", "NOT_FOUND"),
            StoreError::EmptyTask => e.set("code", "BAD_USER_INPUT"),
        })
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List todos, optionally narrowed by completion state and priority.
    async fn get_todos(
        &self,
        ctx: &Context<'_>,
        filter: Option<TodoFilter>,
    ) -> Result<Vec<Todo>> {
        let store = ctx.data::<SharedStore>()?;
        let filter = filter.unwrap_or_default();
        Ok(store.read().await.list(&filter))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a todo and return it.
    async fn add_todo(&self, ctx: &Context<'_>, input: TodoInput) -> Result<Todo> {
        let store = ctx.data::<SharedStore>()?;
        let todo = store
            .write()
            .await
            .insert(&input.task, input.priority)
            .map_err(|e| e.extend())?;
        tracing::debug!(id = %todo.id.as_str(), "todo added");
        Ok(todo)
    }

    /// Delete a todo. Reports whether a removal occurred; unknown ids
    /// yield `false` rather than an error.
    async fn delete_todo(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let store = ctx.data::<SharedStore>()?;
        let removed = store.write().await.remove(id.as_str());
        tracing::debug!(id = %id.as_str(), removed, "todo delete");
        Ok(removed)
    }

    /// Flip a todo's completion flag and return the updated item.
    async fn toggle_todo(&self, ctx: &Context<'_>, id: ID) -> Result<Todo> {
        let store = ctx.data::<SharedStore>()?;
        let todo = store
            .write()
            .await
            .toggle(id.as_str())
            .map_err(|e| e.extend())?;
        tracing::debug!(id = %todo.id.as_str(), completed = todo.completed, "todo toggled");
        Ok(todo)
    }
}
