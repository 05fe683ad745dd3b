// ── Device client contract ──
//
// The seam between the coordination layer and the wire. Implementations
// own the transport, per-attempt timeouts, resend-on-timeout retries, and
// the serialization of wire traffic (one in-flight request per
// connection). Consumers issue one call and get one terminal outcome.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::command::Command;
use crate::error::ApiError;
use crate::model::Plant;

/// A persistent link to an energy plant's data adapter.
///
/// The contract the refresh coordinator is written against. A production
/// implementation wraps the actual register protocol; tests script one
/// directly.
#[async_trait]
pub trait DeviceClient: Send + Sync {
    /// Establish the connection. Must be callable again after [`close`](Self::close).
    async fn connect(&self) -> Result<(), ApiError>;

    /// Tear down the connection. Idempotent: closing an already-closed
    /// link succeeds.
    async fn close(&self) -> Result<(), ApiError>;

    /// Whether a connection is currently established.
    fn is_connected(&self) -> bool;

    /// Execute one logical command with a per-attempt `timeout`, resending
    /// on timeout up to `retries` times before giving up.
    ///
    /// Returns the refreshed plant snapshot on success. A
    /// [`Timeout`](ApiError::Timeout) outcome means the retry budget was
    /// exhausted but the connection may still be usable; a
    /// [`Communication`](ApiError::Communication) outcome means it is not.
    async fn execute(
        &self,
        command: Command,
        timeout: Duration,
        retries: u8,
    ) -> Result<Arc<Plant>, ApiError>;

    /// The most recent plant snapshot this client produced, if any.
    fn plant(&self) -> Option<Arc<Plant>>;
}
