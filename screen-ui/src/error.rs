//! Error taxonomy for the panel manager and content modules.
//!
//! Nothing here is fatal: every failure stops at a notification plus a
//! console entry, never a page-wide crash.

use screen_types::UnknownPanelKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    /// Bad caller input: missing panel type, malformed import text.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An expected DOM prerequisite was missing.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// Durable storage read failed; in-memory state stays authoritative.
    #[error("failed to load {key}: {reason}")]
    StorageLoad { key: String, reason: String },

    /// Durable storage write failed; in-memory state stays authoritative.
    #[error("failed to save {key}: {reason}")]
    StorageSave { key: String, reason: String },

    #[error(transparent)]
    UnknownKind(#[from] UnknownPanelKind),

    #[error(transparent)]
    Codec(#[from] serde_json::Error),
}
