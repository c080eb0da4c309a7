//! Item store: the ordered collection of todos and its two intents.

pub mod reducer;
pub mod types;

pub use reducer::{TodoEnvironment, TodosReducer};
pub use types::{TodoAction, TodoId, TodoItem, TodosState};
