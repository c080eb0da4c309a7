//! Input component: a single-line form that adds a todo.

use crate::intents::TodoIntents;
use crate::view::{Node, UiEvent};
use todolist_runtime::StoreError;

/// What text an accepted submission stores
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextPolicy {
    /// The text exactly as typed
    #[default]
    Raw,
    /// The text with surrounding whitespace removed
    Trimmed,
}

impl TextPolicy {
    fn apply(self, text: String) -> String {
        match self {
            Self::Raw => text,
            Self::Trimmed => text.trim().to_string(),
        }
    }
}

/// The add-todo form
///
/// The field contents are local to the component and never reach the store
/// until submitted.
#[derive(Clone, Debug, Default)]
pub struct AddTodo {
    text: String,
    policy: TextPolicy,
}

impl AddTodo {
    /// Creates an empty form
    #[must_use]
    pub const fn new(policy: TextPolicy) -> Self {
        Self {
            text: String::new(),
            policy,
        }
    }

    /// Current field contents
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the field contents
    pub fn on_change(&mut self, value: String) {
        self.text = value;
    }

    /// Submits the form.
    ///
    /// Whitespace-only text is discarded without dispatching and the field
    /// is left as is. Otherwise `add_todo` is dispatched and the field is
    /// cleared.
    ///
    /// # Returns
    ///
    /// Whether a todo was requested
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store rejects the send. The field keeps
    /// its text in that case.
    pub fn submit(&mut self, intents: &mut impl TodoIntents) -> Result<bool, StoreError> {
        if self.text.trim().is_empty() {
            tracing::trace!("Blank submission ignored");
            return Ok(false);
        }

        intents.add_todo(self.policy.apply(self.text.clone()))?;
        self.text.clear();
        Ok(true)
    }

    /// Form with the input field and the submit button
    #[must_use]
    pub fn render(&self) -> Node {
        Node::Form {
            on_submit: UiEvent::Submit,
            children: vec![
                Node::Input {
                    value: self.text.clone(),
                },
                Node::Button {
                    label: "Add Todo".to_string(),
                    disabled: false,
                    on_click: Some(UiEvent::Submit),
                },
            ],
        }
    }
}
