//! # Todolist
//!
//! A to-do list built on a single predictable store.
//!
//! - **Item store** ([`todos`]): ordered todos that can be added and toggled
//! - **Filter store** ([`visibility`]): which todos are shown
//! - **View composer** ([`selectors`]): the visible subset, in order
//! - **Components** ([`components`]): input form, list rows, filter buttons
//!
//! [`App`] wires them together: it owns the store, routes [`UiEvent`]s to
//! components and renders a [`Node`] tree that [`Shell`] draws as text.
//!
//! ```
//! use todolist::{App, AppEnvironment, Config, UiEvent};
//!
//! let mut app = App::new(&Config::default(), AppEnvironment::production());
//!
//! app.handle(UiEvent::InputChanged("Buy milk".to_string()))?;
//! app.handle(UiEvent::Submit)?;
//!
//! assert_eq!(app.state().todos.count(), 1);
//! assert_eq!(app.render().row_ids().len(), 1);
//! # Ok::<(), todolist_runtime::StoreError>(())
//! ```

pub mod app;
pub mod components;
pub mod config;
pub mod intents;
pub mod selectors;
pub mod shell;
pub mod todos;
pub mod view;
pub mod visibility;

pub use app::{root_reducer, App, AppEnvironment, AppStore, RootAction, RootReducer, RootState};
pub use config::Config;
pub use selectors::{select_visible_todos, visible_todos, VisibleTodosSelector};
pub use shell::{Command, Outcome, Shell, ShellError};
pub use view::{render_text, Node, RenderOptions, TextDecoration, UiEvent};
pub use visibility::{FilterError, VisibilityFilter};
