//! Blood request lifecycle.
//!
//! ```text
//! Pending --approve--> Approved
//! Pending --reject---> Rejected
//! ```
//!
//! Approved and Rejected are terminal. The numeric ids match the seed rows of
//! `blood_request_statuses`.

use serde::Serialize;

use crate::error::CoreError;
pub use crate::types::StatusId;

#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequestStatus {
    Pending = 1,
    Approved = 2,
    Rejected = 3,
}

impl RequestStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Map a database status ID back to a variant.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            1 => Some(Self::Pending),
            2 => Some(Self::Approved),
            3 => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Check that moving from `self` to `next` is allowed.
    ///
    /// Only `Pending -> Approved` and `Pending -> Rejected` are legal. Any
    /// move out of a terminal state (including a repeat of the same
    /// decision) is a conflict.
    pub fn transition_to(self, next: RequestStatus) -> Result<RequestStatus, CoreError> {
        match (self, next) {
            (Self::Pending, Self::Approved) | (Self::Pending, Self::Rejected) => Ok(next),
            (current, _) if current.is_terminal() => Err(CoreError::Conflict(format!(
                "Blood request is already {}",
                current.as_str().to_lowercase()
            ))),
            (current, next) => Err(CoreError::Conflict(format!(
                "Cannot move blood request from {} to {}",
                current.as_str(),
                next.as_str()
            ))),
        }
    }
}

impl From<RequestStatus> for StatusId {
    fn from(value: RequestStatus) -> Self {
        value as StatusId
    }
}
