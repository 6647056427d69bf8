//! Core Entity Trait
//!
//! The contract every row type in an editable list satisfies, plus the
//! shared error type for list transitions.

use std::fmt::Debug;
use std::hash::Hash;

/// Core trait for list entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + Hash + Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for list transitions
pub type ListResult<T> = Result<T, ListError>;

/// Reasons a transition was ignored.
///
/// A transition returning `Err` leaves the list exactly as it was.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("operation not available in {0:?} mode")]
    WrongMode(crate::Mode),
    #[error("no item with id {0}")]
    UnknownItem(String),
    #[error("a drag is already in progress")]
    DragInProgress,
    #[error("no drag in progress")]
    NotDragging,
    #[error("row {0} is busy with another gesture")]
    RowBusy(String),
    #[error("row {0} has not been armed for deletion")]
    NotArmed(String),
    #[error("row {0} is already being removed")]
    AlreadyRemoving(String),
    #[error("invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(String),
}

impl ListError {
    pub(crate) fn unknown<I: Debug>(id: I) -> Self {
        ListError::UnknownItem(format!("{:?}", id))
    }

    pub(crate) fn busy<I: Debug>(id: I) -> Self {
        ListError::RowBusy(format!("{:?}", id))
    }

    pub(crate) fn not_armed<I: Debug>(id: I) -> Self {
        ListError::NotArmed(format!("{:?}", id))
    }

    pub(crate) fn removing<I: Debug>(id: I) -> Self {
        ListError::AlreadyRemoving(format!("{:?}", id))
    }
}
