//! Error type shared by all containers.

/// Failure raised by a container operation whose precondition was not met.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// `pop`, `dequeue` or `peek` on a container with no elements.
    #[error("container is empty")]
    EmptyContainer,

    /// Positional access outside `[0, len)`.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = core::result::Result<T, CollectionError>;
