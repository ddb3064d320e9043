//! Error types for folio-core.

use serde::{Deserialize, Serialize};

use crate::contact::ContactField;
use crate::ids::HandleId;

/// Configuration could not be parsed.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Contact form submission errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ContactError {
    /// A required field is empty (or whitespace only).
    #[error("required field `{0}` is empty")]
    MissingField(ContactField),

    /// `begin_submit` was called while a previous submission is still in flight.
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    /// `finish` was called without a matching `begin_submit`.
    #[error("no submission in progress")]
    NotSubmitting,

    /// The delivery provider rejected or never received the message.
    #[error("delivery failed: {reason}")]
    Delivery { reason: String },
}

impl ContactError {
    pub fn delivery(reason: impl Into<String>) -> Self {
        ContactError::Delivery {
            reason: reason.into(),
        }
    }
}

/// Key-value storage failures (quota, privacy mode, missing backend).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage write failed for `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Resource ledger misuse.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("unknown handle {0:?}")]
    UnknownHandle(HandleId),

    #[error("handle {0:?} already released")]
    AlreadyReleased(HandleId),
}
