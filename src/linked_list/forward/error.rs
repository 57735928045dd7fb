use alloc::collections::TryReserveError;

/// Errors reported by the checked list operations.
///
/// When one of these is returned the list has not been modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("position does not refer to a live element of this list")]
    StalePosition,

    #[error("position belongs to a different list")]
    ForeignPosition,

    #[error("the end position cannot be used as an anchor")]
    PastTheEnd,

    #[error("position has no element after it")]
    NoSuccessor,

    #[error("failed to allocate storage for a new node: {0}")]
    Alloc(#[from] TryReserveError),
}
