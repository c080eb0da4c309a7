//! Domain types for the todos slice.
//!
//! A todo list is an ordered collection of items that can be added and
//! toggled. Items are never removed or edited.

use serde::{Deserialize, Serialize};
use todolist_core::Version;
use todolist_macros::{Action, State};
use uuid::Uuid;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, fixed at creation
    pub id: TodoId,
    /// Text as submitted, fixed at creation
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, incomplete todo item
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Flips the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// State of the todos slice
///
/// Items are kept in insertion order, which is the display order before
/// filtering. `version` advances on every change to the items.
#[derive(State, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodosState {
    /// All todos, oldest first
    pub todos: Vec<TodoItem>,
    /// Changes applied to `todos` so far
    #[version]
    pub version: Version,
}

impl TodosState {
    /// Creates a new empty todos state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            version: Version::INITIAL,
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Returns the number of todos still to do
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.count() - self.completed_count()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn exists(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn get_mut(&mut self, id: TodoId) -> Option<&mut TodoItem> {
        self.todos.iter_mut().find(|t| t.id == id)
    }
}

/// Actions for the todos slice
///
/// Commands are the intents the UI sends; the event is the fact the
/// reducer applies.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Command: Add a todo with the given text
    ///
    /// The reducer assigns the id and feeds back [`TodoAction::TodoAdded`].
    #[command]
    AddTodo {
        /// Text of the new todo
        text: String,
    },

    /// Event: A todo was added
    #[event]
    TodoAdded {
        /// Freshly assigned identifier
        id: TodoId,
        /// Text of the todo
        text: String,
    },

    /// Command: Flip the completion of a todo
    #[command]
    ToggleTodo {
        /// Todo to toggle
        id: TodoId,
    },
}
