//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope`**: Run a slice reducer against part of a larger state
//!
//! A root reducer is usually `combine_reducers` over one `scope` per slice:
//!
//! ```
//! use todolist_core::composition::{combine_reducers, scope};
//! use todolist_core::{Effect, Reducer, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct AppState {
//!     count: i32,
//!     name: String,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     Counter(i32),
//!     Name(String),
//! }
//!
//! struct AddReducer;
//!
//! impl Reducer for AddReducer {
//!     type State = i32;
//!     type Action = i32;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut i32, action: i32, _env: &()) -> SmallVec<[Effect<i32>; 4]> {
//!         *state += action;
//!         SmallVec::new()
//!     }
//! }
//!
//! struct RenameReducer;
//!
//! impl Reducer for RenameReducer {
//!     type State = String;
//!     type Action = String;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut String, action: String, _env: &()) -> SmallVec<[Effect<String>; 4]> {
//!         *state = action;
//!         SmallVec::new()
//!     }
//! }
//!
//! fn count_mut(state: &mut AppState) -> &mut i32 {
//!     &mut state.count
//! }
//! fn name_mut(state: &mut AppState) -> &mut String {
//!     &mut state.name
//! }
//! fn counter_action(action: AppAction) -> Option<i32> {
//!     match action {
//!         AppAction::Counter(n) => Some(n),
//!         AppAction::Name(_) => None,
//!     }
//! }
//! fn name_action(action: AppAction) -> Option<String> {
//!     match action {
//!         AppAction::Name(name) => Some(name),
//!         AppAction::Counter(_) => None,
//!     }
//! }
//! fn same_env(env: &()) -> &() {
//!     env
//! }
//!
//! let root = combine_reducers(vec![
//!     Box::new(scope(AddReducer, count_mut, counter_action, AppAction::Counter, same_env)),
//!     Box::new(scope(RenameReducer, name_mut, name_action, AppAction::Name, same_env)),
//! ]);
//!
//! let mut state = AppState::default();
//! let _ = root.reduce(&mut state, AppAction::Counter(3), &());
//! let _ = root.reduce(&mut state, AppAction::Name("todos".to_string()), &());
//! assert_eq!(state.count, 3);
//! assert_eq!(state.name, "todos");
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// Boxed reducer over a fixed state, action and environment.
pub type BoxedReducer<S, A, E> = Box<dyn Reducer<State = S, Action = A, Environment = E>>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence with a clone of the action, and all
/// effects are concatenated in reducer order.
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    A: Clone,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E> {
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    A: Clone,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

/// Scopes a slice reducer to part of a larger state.
///
/// # Arguments
///
/// - `reducer`: The slice reducer
/// - `state`: Projects the parent state onto the slice
/// - `extract`: Returns the slice action, or `None` for actions the slice ignores
/// - `embed`: Wraps slice actions (from effects) back into the parent action
/// - `environment`: Projects the parent environment onto the slice environment
pub fn scope<R, S, A, E>(
    reducer: R,
    state: fn(&mut S) -> &mut R::State,
    extract: fn(A) -> Option<R::Action>,
    embed: fn(R::Action) -> A,
    environment: fn(&E) -> &R::Environment,
) -> Scope<R, S, A, E>
where
    R: Reducer,
{
    Scope {
        reducer,
        state,
        extract,
        embed,
        environment,
    }
}

/// A reducer lifted onto a parent state, action and environment.
///
/// Created by [`scope`].
pub struct Scope<R, S, A, E>
where
    R: Reducer,
{
    reducer: R,
    state: fn(&mut S) -> &mut R::State,
    extract: fn(A) -> Option<R::Action>,
    embed: fn(R::Action) -> A,
    environment: fn(&E) -> &R::Environment,
}

impl<R, S, A, E> Reducer for Scope<R, S, A, E>
where
    R: Reducer,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(local) = (self.extract)(action) else {
            return SmallVec::new();
        };

        let effects = self
            .reducer
            .reduce((self.state)(state), local, (self.environment)(env));

        effects.into_iter().map(|effect| effect.map(self.embed)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smallvec;

    #[derive(Clone, Default)]
    struct TestState {
        counter: i32,
        name: String,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Increment,
        Decrement,
        SetName(String),
    }

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Increment => state.counter += 1,
                TestAction::Decrement => state.counter -= 1,
                TestAction::SetName(_) => {},
            }
            smallvec![Effect::None]
        }
    }

    struct NameReducer;

    impl Reducer for NameReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            if let TestAction::SetName(name) = action {
                state.name = name;
            }
            smallvec![Effect::None]
        }
    }

    #[test]
    fn test_combine_reducers() {
        let combined = combine_reducers(vec![Box::new(CounterReducer), Box::new(NameReducer)]);

        let mut state = TestState::default();

        let effects = combined.reduce(&mut state, TestAction::Increment, &());
        assert_eq!(state.counter, 1);
        assert_eq!(effects.len(), 2);

        let _ = combined.reduce(&mut state, TestAction::SetName("Alice".to_string()), &());
        assert_eq!(state.name, "Alice");

        let _ = combined.reduce(&mut state, TestAction::Decrement, &());
        assert_eq!(state.counter, 0);
        assert_eq!(state.name, "Alice");
    }

    // Scoped reducer tests
    #[derive(Clone, Debug, PartialEq)]
    enum SubAction {
        Add(i32),
        Echo(i32),
    }

    struct SubReducer;

    impl Reducer for SubReducer {
        type State = i32;
        type Action = SubAction;
        type Environment = i32;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                SubAction::Add(n) => {
                    *state += n * env;
                    SmallVec::new()
                },
                SubAction::Echo(n) => smallvec![Effect::Send(SubAction::Add(n))],
            }
        }
    }

    #[derive(Clone, Default)]
    struct ParentState {
        sub: i32,
        other: String,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum ParentAction {
        Sub(SubAction),
        Other,
    }

    struct ParentEnv {
        multiplier: i32,
    }

    fn sub_mut(state: &mut ParentState) -> &mut i32 {
        &mut state.sub
    }

    fn sub_action(action: ParentAction) -> Option<SubAction> {
        match action {
            ParentAction::Sub(action) => Some(action),
            ParentAction::Other => None,
        }
    }

    fn sub_env(env: &ParentEnv) -> &i32 {
        &env.multiplier
    }

    #[test]
    fn test_scope_projects_state_and_environment() {
        let scoped = scope(SubReducer, sub_mut, sub_action, ParentAction::Sub, sub_env);
        let env = ParentEnv { multiplier: 2 };

        let mut state = ParentState {
            sub: 5,
            other: "test".to_string(),
        };

        let _ = scoped.reduce(&mut state, ParentAction::Sub(SubAction::Add(3)), &env);
        assert_eq!(state.sub, 11);
        assert_eq!(state.other, "test");
    }

    #[test]
    fn test_scope_ignores_foreign_actions() {
        let scoped = scope(SubReducer, sub_mut, sub_action, ParentAction::Sub, sub_env);
        let env = ParentEnv { multiplier: 1 };
        let mut state = ParentState::default();

        let effects = scoped.reduce(&mut state, ParentAction::Other, &env);
        assert!(effects.is_empty());
        assert_eq!(state.sub, 0);
    }

    #[test]
    fn test_scope_embeds_effects() {
        let scoped = scope(SubReducer, sub_mut, sub_action, ParentAction::Sub, sub_env);
        let env = ParentEnv { multiplier: 1 };
        let mut state = ParentState::default();

        let effects = scoped.reduce(&mut state, ParentAction::Sub(SubAction::Echo(4)), &env);
        assert_eq!(
            effects.as_slice(),
            &[Effect::Send(ParentAction::Sub(SubAction::Add(4)))]
        );
    }
}
