//! # Todolist Runtime
//!
//! Runtime implementation for the todolist store architecture.
//!
//! This crate provides the [`Store`]: the single owned state container that
//! runs a reducer, feeds effect actions back into it and publishes each
//! committed state.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, reducer and environment; processes actions
//! - **Snapshots**: Every commit produces a new `Arc<State>`; old snapshots never change
//! - **Subscriptions**: `watch` channel of committed states, `broadcast` channel of processed actions
//!
//! ## Example
//!
//! ```ignore
//! use todolist_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use todolist_core::{effect::Effect, reducer::Reducer, Version};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A single `send` fed back more actions than allowed
        ///
        /// This indicates a reducer loop. The whole `send` is discarded and
        /// the committed state is left untouched.
        #[error("Effect feedback exceeded {limit} actions in a single send")]
        FeedbackLimitExceeded {
            /// The configured limit
            limit: usize,
        },
    }
}

pub use error::StoreError;

/// Store configuration
///
/// # Example
///
/// ```
/// use todolist_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_max_feedback_actions(8)
///     .with_action_broadcast_capacity(64);
///
/// assert_eq!(config.max_feedback_actions, 8);
/// assert_eq!(config.action_broadcast_capacity, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of actions fed back by effects during one `send`
    pub max_feedback_actions: usize,
    /// Buffer size of the processed-action broadcast channel
    pub action_broadcast_capacity: usize,
}

impl StoreConfig {
    /// Largest action broadcast buffer a store will allocate
    pub const MAX_ACTION_BROADCAST_CAPACITY: usize = 1 << 16;

    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_actions: usize, action_broadcast_capacity: usize) -> Self {
        Self {
            max_feedback_actions,
            action_broadcast_capacity,
        }
    }

    /// Set the feedback limit
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }

    /// Set the action broadcast capacity
    ///
    /// The store clamps it to `1..=MAX_ACTION_BROADCAST_CAPACITY`.
    #[must_use]
    pub const fn with_action_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.action_broadcast_capacity = capacity;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_actions: 64,
            action_broadcast_capacity: 16,
        }
    }
}

/// Store module - the runtime coordinator
pub mod store {
    use super::{Effect, Reducer, StoreConfig, StoreError, Version};
    use std::collections::VecDeque;
    use std::fmt::Debug;
    use std::sync::Arc;
    use tokio::sync::{broadcast, watch};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store owns:
    /// 1. State (as an immutable `Arc` snapshot, replaced on every commit)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    ///
    /// `send` takes `&mut self`: the store belongs to exactly one owner, and
    /// every action runs to completion before the next one starts. Readers
    /// get snapshots or subscriptions, never mutable access.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<S>,
        reducer: R,
        environment: E,
        config: StoreConfig,
        version: Version,
        state_broadcast: watch::Sender<Arc<S>>,
        /// Every action the reducer processed, published after its commit.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: Clone,
        A: Clone + Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with a custom configuration
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
            let state = Arc::new(initial_state);
            let (state_broadcast, _) = watch::channel(Arc::clone(&state));
            let (action_broadcast, _) = broadcast::channel(
                config
                    .action_broadcast_capacity
                    .clamp(1, StoreConfig::MAX_ACTION_BROADCAST_CAPACITY),
            );

            Self {
                state,
                reducer,
                environment,
                config,
                version: Version::INITIAL,
                state_broadcast,
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer on a copy of the current state, then every action
        /// fed back through [`Effect::Send`], in order. When the queue is
        /// drained the copy is committed as the new snapshot, published to
        /// state subscribers, and the processed actions are broadcast.
        ///
        /// # Returns
        ///
        /// The store version after the commit
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] if effects feed back
        /// more than `max_feedback_actions` actions. Nothing is committed.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> Result<Version, StoreError> {
            tracing::debug!(?action, "Processing action");
            metrics::counter!("store.actions.total").increment(1);

            let mut next = S::clone(&self.state);
            let mut queue = VecDeque::from([action]);
            let mut processed = Vec::new();
            let mut fed_back = 0_usize;

            while let Some(action) = queue.pop_front() {
                let effects = {
                    let span = tracing::debug_span!("reducer_execution");
                    let _enter = span.enter();

                    let start = std::time::Instant::now();
                    let effects = self.reducer.reduce(&mut next, action.clone(), &self.environment);
                    metrics::histogram!("store.reducer.duration_seconds")
                        .record(start.elapsed().as_secs_f64());

                    tracing::trace!("Reducer completed, returned {} effects", effects.len());
                    effects
                };
                processed.push(action);

                for effect in effects {
                    match effect {
                        Effect::None => {},
                        Effect::Send(feedback) => {
                            fed_back += 1;
                            if fed_back > self.config.max_feedback_actions {
                                tracing::warn!(
                                    limit = self.config.max_feedback_actions,
                                    "Effect feedback limit exceeded, discarding send"
                                );
                                metrics::counter!("store.feedback.limit_exceeded").increment(1);
                                return Err(StoreError::FeedbackLimitExceeded {
                                    limit: self.config.max_feedback_actions,
                                });
                            }
                            tracing::trace!(action = ?feedback, "Effect::Send queued");
                            metrics::counter!("store.feedback.total").increment(1);
                            queue.push_back(feedback);
                        },
                    }
                }
            }

            self.state = Arc::new(next);
            self.version = self.version.next();
            self.state_broadcast.send_replace(Arc::clone(&self.state));

            for action in processed {
                // No receivers is fine; observers are optional.
                let _ = self.action_broadcast.send(action);
            }

            tracing::debug!(version = %self.version, fed_back, "Committed state");
            Ok(self.version)
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.todos.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// The latest committed state
        ///
        /// The returned snapshot is immutable; later sends produce new ones.
        #[must_use]
        pub fn snapshot(&self) -> Arc<S> {
            Arc::clone(&self.state)
        }

        /// Number of commits so far
        #[must_use]
        pub const fn version(&self) -> Version {
            self.version
        }

        /// Subscribe to committed states
        ///
        /// The receiver always holds the latest committed snapshot.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<Arc<S>> {
            self.state_broadcast.subscribe()
        }

        /// Subscribe to processed actions
        ///
        /// Every action the reducer handled, including those fed back by
        /// effects, is broadcast once its `send` has committed.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }
    }
}

pub use store::Store;
