//! State containers and change notifications.
//!
//! The store owns the current state, routes every transition through its
//! reducer, and fans notifications out to subscribers after each commit.

mod error;
mod store;
mod subscription;

pub use error::DispatchError;
pub use store::Store;
pub use subscription::Subscription;
