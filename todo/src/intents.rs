//! Narrow capabilities handed to components.
//!
//! Components request changes through these traits and never touch the
//! store directly. Each call dispatches exactly one action.

use crate::todos::TodoId;
use crate::visibility::VisibilityFilter;
use todolist_runtime::StoreError;

/// Item intents: add and toggle
pub trait TodoIntents {
    /// Dispatch `AddTodo` with `text` as given
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store rejects the send.
    fn add_todo(&mut self, text: String) -> Result<(), StoreError>;

    /// Dispatch `ToggleTodo` for `id`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store rejects the send.
    fn toggle_todo(&mut self, id: TodoId) -> Result<(), StoreError>;
}

/// Filter intents
pub trait FilterIntents {
    /// Dispatch `SetVisibilityFilter`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store rejects the send.
    fn set_filter(&mut self, filter: VisibilityFilter) -> Result<(), StoreError>;
}
