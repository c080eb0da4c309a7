//! Composition root: the store, the root reducer and the components.

use crate::components::{AddTodo, FilterButton, Footer, TodoList};
use crate::config::Config;
use crate::intents::{FilterIntents, TodoIntents};
use crate::selectors::VisibleTodosSelector;
use crate::todos::{TodoAction, TodoEnvironment, TodoId, TodosReducer, TodosState};
use crate::view::{Node, UiEvent};
use crate::visibility::{FilterAction, FilterReducer, VisibilityFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use todolist_core::composition::{combine_reducers, scope, BoxedReducer, CombinedReducer};
use todolist_core::environment::RandomIdGenerator;
use todolist_runtime::{Store, StoreError};
use tokio::sync::{broadcast, watch};

/// The whole application state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootState {
    /// Item store
    pub todos: TodosState,
    /// Filter store
    pub visibility_filter: VisibilityFilter,
}

/// Every action the application handles
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RootAction {
    /// Action for the todos slice
    Todos(TodoAction),
    /// Action for the filter slice
    VisibilityFilter(FilterAction),
}

impl RootAction {
    /// Variant name of the wrapped slice action
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Todos(action) => action.name(),
            Self::VisibilityFilter(action) => action.name(),
        }
    }
}

impl From<TodoAction> for RootAction {
    fn from(action: TodoAction) -> Self {
        Self::Todos(action)
    }
}

impl From<FilterAction> for RootAction {
    fn from(action: FilterAction) -> Self {
        Self::VisibilityFilter(action)
    }
}

/// Dependencies for the root reducer
#[derive(Clone)]
pub struct AppEnvironment {
    /// Todos slice dependencies
    pub todos: TodoEnvironment,
}

impl AppEnvironment {
    /// Environment with random todo ids
    #[must_use]
    pub fn production() -> Self {
        Self {
            todos: TodoEnvironment::new(Arc::new(RandomIdGenerator)),
        }
    }
}

/// Root reducer type
pub type RootReducer = CombinedReducer<RootState, RootAction, AppEnvironment>;

/// Store holding the application state
pub type AppStore = Store<RootState, RootAction, AppEnvironment, RootReducer>;

fn todos_state(state: &mut RootState) -> &mut TodosState {
    &mut state.todos
}

fn todos_action(action: RootAction) -> Option<TodoAction> {
    match action {
        RootAction::Todos(action) => Some(action),
        RootAction::VisibilityFilter(_) => None,
    }
}

fn todos_env(env: &AppEnvironment) -> &TodoEnvironment {
    &env.todos
}

fn filter_state(state: &mut RootState) -> &mut VisibilityFilter {
    &mut state.visibility_filter
}

fn filter_action(action: RootAction) -> Option<FilterAction> {
    match action {
        RootAction::VisibilityFilter(action) => Some(action),
        RootAction::Todos(_) => None,
    }
}

fn filter_env(_env: &AppEnvironment) -> &() {
    &()
}

/// Both slice reducers, each scoped to its part of [`RootState`]
#[must_use]
pub fn root_reducer() -> RootReducer {
    let todos: BoxedReducer<RootState, RootAction, AppEnvironment> = Box::new(scope(
        TodosReducer::new(),
        todos_state,
        todos_action,
        RootAction::Todos,
        todos_env,
    ));
    let visibility_filter: BoxedReducer<RootState, RootAction, AppEnvironment> = Box::new(scope(
        FilterReducer,
        filter_state,
        filter_action,
        RootAction::VisibilityFilter,
        filter_env,
    ));

    combine_reducers(vec![todos, visibility_filter])
}

/// Intent implementation over the store
struct Dispatcher<'a> {
    store: &'a mut AppStore,
}

impl Dispatcher<'_> {
    fn dispatch(&mut self, action: RootAction) -> Result<(), StoreError> {
        tracing::debug!(intent = action.name(), "Dispatching intent");
        self.store.send(action).map(|_| ())
    }
}

impl TodoIntents for Dispatcher<'_> {
    fn add_todo(&mut self, text: String) -> Result<(), StoreError> {
        self.dispatch(TodoAction::AddTodo { text }.into())
    }

    fn toggle_todo(&mut self, id: TodoId) -> Result<(), StoreError> {
        self.dispatch(TodoAction::ToggleTodo { id }.into())
    }
}

impl FilterIntents for Dispatcher<'_> {
    fn set_filter(&mut self, filter: VisibilityFilter) -> Result<(), StoreError> {
        self.dispatch(FilterAction::SetVisibilityFilter(filter).into())
    }
}

/// The to-do application
///
/// Owns the store and the component state. Components only ever see
/// snapshots and intents.
pub struct App {
    store: AppStore,
    input: AddTodo,
    list: TodoList,
    footer: Footer,
    selector: VisibleTodosSelector,
}

impl App {
    /// Creates the application with an empty list and the `ShowAll` filter
    #[must_use]
    pub fn new(config: &Config, environment: AppEnvironment) -> Self {
        Self {
            store: Store::with_config(RootState::default(), root_reducer(), environment, config.store),
            input: AddTodo::new(config.text_policy),
            list: TodoList,
            footer: Footer,
            selector: VisibleTodosSelector::new(),
        }
    }

    /// Latest committed state
    #[must_use]
    pub fn state(&self) -> Arc<RootState> {
        self.store.snapshot()
    }

    /// Subscribe to committed states
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<RootState>> {
        self.store.subscribe()
    }

    /// Subscribe to processed actions
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<RootAction> {
        self.store.subscribe_actions()
    }

    /// The add-todo form
    #[must_use]
    pub const fn input(&self) -> &AddTodo {
        &self.input
    }

    /// Visible todos selector, for inspecting cache behaviour
    #[must_use]
    pub const fn selector(&self) -> &VisibleTodosSelector {
        &self.selector
    }

    /// View of the current state: form, visible rows, filter buttons
    pub fn render(&mut self) -> Node {
        let state = self.store.snapshot();
        let visible = self.selector.select(&state);

        Node::Column(vec![
            self.input.render(),
            self.list.render(&visible),
            self.footer.render(state.visibility_filter),
        ])
    }

    /// Routes a user event to the component it belongs to
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the resulting send is rejected.
    pub fn handle(&mut self, event: UiEvent) -> Result<(), StoreError> {
        tracing::trace!(?event, "Handling UI event");

        match event {
            UiEvent::InputChanged(value) => {
                self.input.on_change(value);
                Ok(())
            },
            UiEvent::Submit => {
                let mut intents = Dispatcher {
                    store: &mut self.store,
                };
                self.input.submit(&mut intents).map(|_| ())
            },
            UiEvent::RowClicked(id) => {
                let mut intents = Dispatcher {
                    store: &mut self.store,
                };
                self.list.click(id, &mut intents)
            },
            UiEvent::FilterClicked(filter) => {
                let current = self.store.state(|state| state.visibility_filter);
                let mut intents = Dispatcher {
                    store: &mut self.store,
                };
                FilterButton::new(filter).activate(current, &mut intents).map(|_| ())
            },
        }
    }
}
