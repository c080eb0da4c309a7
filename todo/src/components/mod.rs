//! Headless UI components.
//!
//! Each component renders a [`Node`](crate::view::Node) from the data it is
//! given and reacts to user input through the intent traits in
//! [`crate::intents`].

mod add_todo;
mod footer;
mod todo_list;

pub use add_todo::{AddTodo, TextPolicy};
pub use footer::{FilterButton, Footer};
pub use todo_list::{TodoList, TodoListItem};
