use std::time::Duration;

use thiserror::Error;

/// Top-level error type for the `gridlink-api` crate.
///
/// Every terminal outcome a [`DeviceClient`](crate::client::DeviceClient)
/// can report maps onto one of these variants. `gridlink-core` translates
/// them into consumer-facing diagnostics and never exposes them raw.
#[derive(Debug, Error)]
pub enum ApiError {
    // ── Connection ──────────────────────────────────────────────────
    /// Establishing the connection failed (refused, unreachable, DNS).
    #[error("Cannot connect to plant: {reason}")]
    Connect { reason: String },

    /// A command was issued while no connection is established.
    #[error("Not connected to plant")]
    NotConnected,

    // ── Command execution ───────────────────────────────────────────
    /// Transport broke mid-command (reset, unexpected EOF, framing
    /// failure). The connection can no longer be trusted.
    #[error("Communication failure: {message}")]
    Communication { message: String },

    /// The command exhausted its retry budget without a response.
    /// The connection itself may still be healthy.
    #[error("Command timed out after {attempts} attempts of {timeout:?}")]
    Timeout { timeout: Duration, attempts: u8 },
}

impl ApiError {
    /// Returns `true` if this outcome means the transport is broken and
    /// the connection should be torn down before the next command.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Connect { .. } | Self::Communication { .. })
    }

    /// Returns `true` for an exhausted-retries timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

// Client implementations bubble socket errors up with `?`.
impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        Self::Communication {
            message: err.to_string(),
        }
    }
}
