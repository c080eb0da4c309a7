//! Filter store: the single value selecting which todos are visible.

pub mod reducer;
pub mod types;

pub use reducer::FilterReducer;
pub use types::{FilterAction, FilterError, VisibilityFilter};
