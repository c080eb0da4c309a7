//! Reducer logic for the todos slice.
//!
//! `AddTodo` draws an id from the environment and feeds back `TodoAdded`;
//! `TodoAdded` appends; `ToggleTodo` flips one item in place.

use crate::todos::types::{TodoAction, TodoId, TodoItem, TodosState};
use std::sync::Arc;
use todolist_core::{
    effect::Effect, environment::IdGenerator, reducer::Reducer, smallvec, SmallVec,
};

/// Environment dependencies for the todos reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Source of fresh todo identifiers
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

/// Reducer for the todos slice
#[derive(Clone, Copy, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Appends a new item, keeping ids unique
    fn apply_added(state: &mut TodosState, id: TodoId, text: String) {
        if state.exists(id) {
            tracing::warn!(%id, "Ignoring TodoAdded for an id that already exists");
            return;
        }

        state.todos.push(TodoItem::new(id, text));
        state.bump_version();
    }

    /// Flips the item's completion; unknown ids are ignored
    fn apply_toggle(state: &mut TodosState, id: TodoId) {
        let Some(todo) = state.get_mut(id) else {
            tracing::trace!(%id, "Toggle for unknown todo ignored");
            return;
        };

        todo.toggle();
        state.bump_version();
    }
}

impl Reducer for TodosReducer {
    type State = TodosState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            TodoAction::AddTodo { text } => {
                // The id exists before the item is visible to anyone.
                let id = TodoId::from_uuid(env.ids.next_id());
                tracing::debug!(%id, "Assigned id to new todo");

                smallvec![Effect::Send(TodoAction::TodoAdded { id, text })]
            },

            TodoAction::ToggleTodo { id } => {
                Self::apply_toggle(state, id);
                smallvec![Effect::None]
            },

            // ========== Events ==========
            TodoAction::TodoAdded { id, text } => {
                Self::apply_added(state, id, text);
                smallvec![Effect::None]
            },
        }
    }
}
