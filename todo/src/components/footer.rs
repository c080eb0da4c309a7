//! Filter control: a "Show:" label and one button per filter.

use crate::intents::FilterIntents;
use crate::view::{Node, UiEvent};
use crate::visibility::VisibilityFilter;
use todolist_runtime::StoreError;

/// Button selecting one filter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterButton {
    filter: VisibilityFilter,
}

impl FilterButton {
    /// Button for `filter`
    #[must_use]
    pub const fn new(filter: VisibilityFilter) -> Self {
        Self { filter }
    }

    /// The filter this button selects
    #[must_use]
    pub const fn filter(&self) -> VisibilityFilter {
        self.filter
    }

    /// Whether the button is disabled while `current` is active
    #[must_use]
    pub fn is_active(&self, current: VisibilityFilter) -> bool {
        self.filter == current
    }

    /// Button node; disabled and inert when its filter is already current
    #[must_use]
    pub fn render(&self, current: VisibilityFilter) -> Node {
        let disabled = self.is_active(current);
        Node::Button {
            label: self.filter.label().to_string(),
            disabled,
            on_click: (!disabled).then_some(UiEvent::FilterClicked(self.filter)),
        }
    }

    /// Clicks the button.
    ///
    /// # Returns
    ///
    /// Whether a filter change was dispatched
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store rejects the send.
    pub fn activate(
        &self,
        current: VisibilityFilter,
        intents: &mut impl FilterIntents,
    ) -> Result<bool, StoreError> {
        if self.is_active(current) {
            return Ok(false);
        }

        intents.set_filter(self.filter)?;
        Ok(true)
    }
}

/// Row of filter buttons
#[derive(Clone, Copy, Debug, Default)]
pub struct Footer;

impl Footer {
    /// Buttons in display order: All, Active, Completed
    #[must_use]
    pub fn buttons(&self) -> [FilterButton; 3] {
        VisibilityFilter::ALL.map(FilterButton::new)
    }

    /// "Show:" followed by the buttons
    #[must_use]
    pub fn render(&self, current: VisibilityFilter) -> Node {
        let mut children = vec![Node::Label("Show:".to_string())];
        children.extend(self.buttons().iter().map(|button| button.render(current)));
        Node::Row(children)
    }
}
