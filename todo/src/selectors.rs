//! View composition: which todos are visible under the current filter.

use crate::app::RootState;
use crate::todos::TodoItem;
use crate::visibility::VisibilityFilter;
use todolist_core::Version;

/// Todos visible under `filter`, in their original relative order.
///
/// `ShowAll` returns every item.
#[must_use]
pub fn visible_todos(todos: &[TodoItem], filter: VisibilityFilter) -> Vec<&TodoItem> {
    match filter {
        VisibilityFilter::ShowAll => todos.iter().collect(),
        VisibilityFilter::ShowActive => todos.iter().filter(|t| !t.completed).collect(),
        VisibilityFilter::ShowCompleted => todos.iter().filter(|t| t.completed).collect(),
    }
}

/// [`visible_todos`] over a whole application state.
#[must_use]
pub fn select_visible_todos(state: &RootState) -> Vec<&TodoItem> {
    visible_todos(&state.todos.todos, state.visibility_filter)
}

#[derive(Debug, Clone)]
struct CacheEntry {
    version: Version,
    filter: VisibilityFilter,
    indices: Vec<usize>,
}

/// Memoizing [`select_visible_todos`].
///
/// Remembers which positions were visible for the last
/// `(todos version, filter)` pair. Versions are only comparable within one
/// store, so use one selector per store.
#[derive(Debug, Clone, Default)]
pub struct VisibleTodosSelector {
    cache: Option<CacheEntry>,
    hits: u64,
    misses: u64,
}

impl VisibleTodosSelector {
    /// Creates a selector with an empty cache
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cache: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Visible todos of `state`
    pub fn select<'s>(&mut self, state: &'s RootState) -> Vec<&'s TodoItem> {
        let version = state.todos.version();
        let filter = state.visibility_filter;
        let todos = &state.todos.todos;

        let fresh = self
            .cache
            .as_ref()
            .is_some_and(|entry| entry.version == version && entry.filter == filter);

        if fresh {
            self.hits += 1;
        } else {
            self.misses += 1;
            tracing::trace!(%version, %filter, "Recomputing visible todos");
            let indices = todos
                .iter()
                .enumerate()
                .filter(|(_, todo)| match filter {
                    VisibilityFilter::ShowAll => true,
                    VisibilityFilter::ShowActive => !todo.completed,
                    VisibilityFilter::ShowCompleted => todo.completed,
                })
                .map(|(index, _)| index)
                .collect();
            self.cache = Some(CacheEntry {
                version,
                filter,
                indices,
            });
        }

        self.cache
            .as_ref()
            .map(|entry| entry.indices.iter().filter_map(|&i| todos.get(i)).collect())
            .unwrap_or_default()
    }

    /// Selections answered from the cache
    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Selections that had to be recomputed
    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }
}
