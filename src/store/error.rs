use thiserror::Error;

/// Errors returned by [`Store::dispatch`](crate::Store::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DispatchError {
    /// A dispatch began while another dispatch on the same store was
    /// still in flight, either re-entrantly from a reducer or subscriber,
    /// or from another thread. The rejected dispatch changes nothing.
    #[error("dispatch called while another dispatch is in progress")]
    AlreadyDispatching,
}
