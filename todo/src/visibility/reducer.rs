//! Reducer for the visibility filter slice.

use crate::visibility::types::{FilterAction, VisibilityFilter};
use todolist_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Reducer for the visibility filter slice
///
/// The filter is overwritten wholesale; there is nothing to validate.
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterReducer;

impl Reducer for FilterReducer {
    type State = VisibilityFilter;
    type Action = FilterAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            FilterAction::SetVisibilityFilter(filter) => {
                tracing::debug!(from = %state, to = %filter, "Visibility filter changed");
                *state = filter;
            },
        }

        smallvec![Effect::None]
    }
}
