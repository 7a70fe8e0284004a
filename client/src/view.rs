//! View state machine for the todo screen.
//!
//! # Design
//! The interface is a single screen: a creation form, a toggleable
//! filter panel, and the todo list. This module models that screen as a
//! pure state machine in the same host-does-IO style as
//! [`crate::client::TodoClient`]: user interactions and completed
//! requests go in as method calls, state is read back for rendering,
//! and remote work comes out as [`Effect`] values for the host to
//! execute. No I/O, no timers, fully deterministic.
//!
//! Behavioral contract:
//! - every query follows idle → loading → (ready | failed);
//! - each mutation acknowledgment triggers a refetch of the current
//!   filter, so the list always reflects the last successful fetch and
//!   nothing is updated optimistically;
//! - submitting a blank task is a no-op and leaves the input as typed;
//! - a successful add clears the task input but keeps the priority
//!   selection;
//! - mutation failures are surfaced through `notice` and never retried.

use crate::error::ApiError;
use crate::types::{Priority, Todo, TodoFilter, TodoInput};

/// Lifecycle of the current list query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Status options offered by the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

/// Priority options offered by the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

/// Remote work the host must execute on the view's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(TodoFilter),
    Add(TodoInput),
    Toggle(String),
    Delete(String),
}

/// Pure state for the todo screen.
#[derive(Debug, Default)]
pub struct TodoView {
    phase: Phase,
    todos: Vec<Todo>,
    task_input: String,
    priority_input: Priority,
    filters_visible: bool,
    status_filter: StatusFilter,
    priority_filter: PriorityFilter,
    notice: Option<String>,
}

impl TodoView {
    pub fn new() -> Self {
        Self::default()
    }

    // --- state read back by the host for rendering ---

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The list as of the last successful fetch.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn task_input(&self) -> &str {
        &self.task_input
    }

    pub fn priority_input(&self) -> Priority {
        self.priority_input
    }

    pub fn filters_visible(&self) -> bool {
        self.filters_visible
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn priority_filter(&self) -> PriorityFilter {
        self.priority_filter
    }

    /// Last surfaced mutation error, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The filter implied by the panel's current selections.
    pub fn current_filter(&self) -> TodoFilter {
        TodoFilter {
            completed: match self.status_filter {
                StatusFilter::All => None,
                StatusFilter::Active => Some(false),
                StatusFilter::Completed => Some(true),
            },
            priority: match self.priority_filter {
                PriorityFilter::All => None,
                PriorityFilter::High => Some(Priority::High),
                PriorityFilter::Medium => Some(Priority::Medium),
                PriorityFilter::Low => Some(Priority::Low),
            },
        }
    }

    // --- user events ---

    /// First event after construction; kicks off the initial query.
    pub fn open(&mut self) -> Effect {
        self.refetch()
    }

    pub fn set_task_input(&mut self, text: impl Into<String>) {
        self.task_input = text.into();
    }

    pub fn set_priority_input(&mut self, priority: Priority) {
        self.priority_input = priority;
    }

    /// Show or hide the filter panel. Visibility is cosmetic: it never
    /// changes the active filter or triggers a query.
    pub fn toggle_filter_panel(&mut self) {
        self.filters_visible = !self.filters_visible;
    }

    /// Changing a filter selection re-queries immediately.
    pub fn set_status_filter(&mut self, filter: StatusFilter) -> Effect {
        self.status_filter = filter;
        self.refetch()
    }

    pub fn set_priority_filter(&mut self, filter: PriorityFilter) -> Effect {
        self.priority_filter = filter;
        self.refetch()
    }

    /// Submit the creation form. Blank or whitespace-only input is a
    /// no-op: nothing is sent and the input is left as typed.
    pub fn submit(&mut self) -> Option<Effect> {
        let task = self.task_input.trim();
        if task.is_empty() {
            return None;
        }
        self.notice = None;
        Some(Effect::Add(TodoInput {
            task: task.to_string(),
            priority: Some(self.priority_input),
        }))
    }

    pub fn toggle_item(&mut self, id: &str) -> Effect {
        self.notice = None;
        Effect::Toggle(id.to_string())
    }

    pub fn delete_item(&mut self, id: &str) -> Effect {
        self.notice = None;
        Effect::Delete(id.to_string())
    }

    // --- request completions reported by the host ---

    pub fn on_fetched(&mut self, result: Result<Vec<Todo>, ApiError>) {
        match result {
            Ok(todos) => {
                self.todos = todos;
                self.phase = Phase::Ready;
            }
            Err(err) => self.phase = Phase::Failed(err.to_string()),
        }
    }

    /// A successful add clears the task input (priority persists) and
    /// refetches; a failed one surfaces the error and leaves the form
    /// as submitted.
    pub fn on_added(&mut self, result: Result<Todo, ApiError>) -> Option<Effect> {
        match result {
            Ok(_) => {
                self.task_input.clear();
                Some(self.refetch())
            }
            Err(err) => {
                self.notice = Some(err.to_string());
                None
            }
        }
    }

    pub fn on_toggled(&mut self, result: Result<Todo, ApiError>) -> Option<Effect> {
        self.after_mutation(result.map(|_| ()))
    }

    /// A delete that reports `false` (the id was already gone) still
    /// counts as an acknowledgment: the list is stale either way.
    pub fn on_deleted(&mut self, result: Result<bool, ApiError>) -> Option<Effect> {
        self.after_mutation(result.map(|_| ()))
    }

    fn after_mutation(&mut self, result: Result<(), ApiError>) -> Option<Effect> {
        match result {
            Ok(()) => Some(self.refetch()),
            Err(err) => {
                self.notice = Some(err.to_string());
                None
            }
        }
    }

    fn refetch(&mut self) -> Effect {
        self.phase = Phase::Loading;
        Effect::Fetch(self.current_filter())
    }
}
