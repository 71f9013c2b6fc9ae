//! # Reflow
//!
//! A unidirectional state container for Rust.
//!
//! Reflow keeps application state in a single [`Store`]. All changes flow
//! one way: an action describing an intent is dispatched to the store, a
//! pure [`Reducer`] computes the next state
//! from the current state and that action, the store commits the result,
//! and subscribers are notified synchronously in registration order.
//!
//! ## Core pieces
//!
//! - [`Store<S, A>`](Store) - owns the current state, serializes
//!   transitions, fans out notifications
//! - [`Reducer<S, A>`](Reducer) - pure `(&S, &A) -> S`; any matching `Fn`
//!   qualifies
//! - [`Subscription`] - unsubscribe handle returned by
//!   [`Store::subscribe`]
//!
//! ## Example
//!
//! ```
//! use reflow::Store;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct CounterState {
//!     counter: i64,
//! }
//!
//! enum CounterAction {
//!     Init,
//!     Increment,
//!     Decrement,
//! }
//!
//! fn counter_reducer(state: &CounterState, action: &CounterAction) -> CounterState {
//!     match action {
//!         CounterAction::Increment => CounterState { counter: state.counter + 1 },
//!         CounterAction::Decrement => CounterState { counter: state.counter - 1 },
//!         _ => state.clone(),
//!     }
//! }
//!
//! let store = Store::new(counter_reducer, CounterAction::Init);
//! assert_eq!(store.get().counter, 0);
//!
//! store.dispatch(CounterAction::Increment).unwrap();
//! assert_eq!(store.get().counter, 1);
//! ```

pub mod reducer;
pub mod store;

// Re-export main types for convenience
pub use reducer::Reducer;
pub use store::{DispatchError, Store, Subscription};
