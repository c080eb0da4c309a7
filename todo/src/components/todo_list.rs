//! List component: the visible todos, one clickable row each.

use crate::intents::TodoIntents;
use crate::todos::{TodoId, TodoItem};
use crate::view::{Node, TextDecoration, UiEvent};
use todolist_runtime::StoreError;

/// One row of the list
#[derive(Clone, Copy, Debug)]
pub struct TodoListItem<'a> {
    todo: &'a TodoItem,
}

impl<'a> TodoListItem<'a> {
    /// Row for `todo`
    #[must_use]
    pub const fn new(todo: &'a TodoItem) -> Self {
        Self { todo }
    }

    /// Row keyed by the todo's id, struck through when completed
    #[must_use]
    pub fn render(&self) -> Node {
        let decoration = if self.todo.completed {
            TextDecoration::LineThrough
        } else {
            TextDecoration::None
        };

        Node::ListItem {
            key: self.todo.id,
            text: self.todo.text.clone(),
            decoration,
            on_click: UiEvent::RowClicked(self.todo.id),
        }
    }
}

/// The list of visible todos
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoList;

impl TodoList {
    /// List of rows in the order given
    #[must_use]
    pub fn render(&self, visible: &[&TodoItem]) -> Node {
        Node::List(
            visible
                .iter()
                .map(|todo| TodoListItem::new(todo).render())
                .collect(),
        )
    }

    /// A row was clicked: toggle its todo
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store rejects the send.
    pub fn click(&self, id: TodoId, intents: &mut impl TodoIntents) -> Result<(), StoreError> {
        intents.toggle_todo(id)
    }
}
