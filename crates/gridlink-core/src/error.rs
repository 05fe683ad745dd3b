// ── Core error types ──
//
// Consumer-facing errors from gridlink-core. Transport detail stays
// wrapped: callers see one typed "refresh failed" outcome per cycle and
// decide for themselves whether to keep using the last good snapshot.

use std::time::Duration;

use thiserror::Error;

use gridlink_api::ApiError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    /// Establishing the connection failed; the link stays down and the
    /// next cycle retries from scratch.
    #[error("Cannot connect to plant: {source}")]
    ConnectionFailed {
        #[source]
        source: ApiError,
    },

    /// An operation requiring a live link found none.
    #[error("Plant link is disconnected")]
    Disconnected,

    // ── Refresh errors ───────────────────────────────────────────────
    /// The refresh command failed terminally for this cycle.
    #[error("Refresh failed: {source}")]
    RefreshFailed {
        #[source]
        source: ApiError,
    },

    /// Timeouts have accumulated past the staleness threshold; the
    /// connection was torn down so the next cycle can rebuild it.
    #[error("Cached data is {staleness:?} stale -- connection torn down for recovery")]
    StaleData { staleness: Duration },

    // ── Write errors ─────────────────────────────────────────────────
    /// No settable command is registered under this key. A caller or
    /// configuration bug; never retried.
    #[error("Unknown writable attribute: {key}")]
    UnknownAttribute { key: String },

    /// The key exists but the supplied value is the wrong shape or out
    /// of range for it.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    /// The device rejected or never acknowledged the write.
    #[error("Write failed: {source}")]
    WriteFailed {
        #[source]
        source: ApiError,
    },
}

impl CoreError {
    /// Returns `true` if the failure is expected to clear once the next
    /// cycle re-establishes the connection.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed { .. }
                | Self::Disconnected
                | Self::RefreshFailed { .. }
                | Self::StaleData { .. }
        )
    }
}
