//! Persistence errors.

use std::io;

/// Error returned when the preference store cannot be used.
///
/// This is the only failure a store adapter reports. The resolver never
/// passes it on: every variant is recovered by falling back to "no stored
/// preference" on read, or by keeping the theme for the current process
/// only on write.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceUnavailable {
    /// No storage exists in this environment (server-side, headless).
    #[error("no preference storage in this environment")]
    NoStorage,
    /// The store refused the operation (disabled storage, quota, security policy).
    #[error("preference storage rejected the operation: {reason}")]
    Rejected { reason: String },
    /// Reading or writing the backing file failed.
    #[error("preference storage I/O failed: {0}")]
    Io(#[from] io::Error),
    /// The backing data could not be decoded as a key/value map.
    #[error("preference storage is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl PersistenceUnavailable {
    pub fn rejected(reason: impl Into<String>) -> Self {
        PersistenceUnavailable::Rejected {
            reason: reason.into(),
        }
    }
}
