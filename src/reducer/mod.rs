//! Pure state-transition functions.
//!
//! A reducer computes the next state from the current state and an action.
//! Reducers are the only place state transitions are described; the store
//! applies them and handles everything else.

mod reducer;

pub use reducer::Reducer;
