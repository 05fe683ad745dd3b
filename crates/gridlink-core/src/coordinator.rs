// ── Refresh coordination ──
//
// Full lifecycle management for a plant link: connect/reconnect policy,
// full-vs-partial poll selection, timeout tolerance with a bounded
// staleness window, and the write-through path for settable attributes.
// The host drives `refresh()` on a fixed cadence (or lets
// `spawn_polling` own the cadence); consumers read the cached snapshot.

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwapOption;
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use gridlink_api::{ApiError, Command, DeviceClient, Plant, Value};

use crate::config::PlantConfig;
use crate::error::CoreError;
use crate::registry::SetterRegistry;

// Per-mode execute budgets. A full refresh walks every register bank, so
// it gets a longer per-attempt timeout and one more resend; a partial
// refresh touches only the fast-changing banks and stays cheap.
const FULL_REFRESH_TIMEOUT: Duration = Duration::from_secs(2);
const FULL_REFRESH_RETRIES: u8 = 3;
const PARTIAL_REFRESH_TIMEOUT: Duration = Duration::from_secs(1);
const PARTIAL_REFRESH_RETRIES: u8 = 2;

// Write-through budget, independent of the poll cycle.
const WRITE_TIMEOUT: Duration = Duration::from_secs(1);
const WRITE_RETRIES: u8 = 3;

// ── ConnectionState ──────────────────────────────────────────────

/// Connection state observable by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connected,
}

// ── Schedule bookkeeping ─────────────────────────────────────────

/// Which poll a cycle selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RefreshMode {
    Full,
    Partial,
}

/// Poll schedule state, guarded by the cycle mutex.
///
/// `None` timestamps mean "never since (re)connect" and force the next
/// cycle into a full refresh; a timeout with no prior success always
/// counts as past the staleness window.
struct RefreshSchedule {
    connected: bool,
    last_full_refresh: Option<Instant>,
    last_success: Option<Instant>,
}

impl RefreshSchedule {
    fn new() -> Self {
        Self {
            connected: false,
            last_full_refresh: None,
            last_success: None,
        }
    }

    /// Forget everything we knew. Called on (re)connect so the next poll
    /// rebuilds topology from scratch.
    fn reset(&mut self) {
        self.last_full_refresh = None;
        self.last_success = None;
    }

    /// Full refresh once more than `interval` has elapsed since the last
    /// one. The boundary itself still polls partial: a cycle landing
    /// exactly on the interval is the last cheap one.
    fn choose_mode(&self, now: Instant, interval: Duration) -> RefreshMode {
        match self.last_full_refresh {
            Some(at) if now.duration_since(at) <= interval => RefreshMode::Partial,
            _ => RefreshMode::Full,
        }
    }

    /// Elapsed time since the last successful refresh of any kind.
    fn staleness(&self, now: Instant) -> Duration {
        self.last_success
            .map_or(Duration::MAX, |at| now.duration_since(at))
    }
}

// ── Coordinator ──────────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc`. Owns the connection state machine, the
/// poll schedule, and the cached [`Plant`] snapshot; issues exactly one
/// device command per refresh cycle.
pub struct Coordinator<C> {
    inner: Arc<CoordinatorInner<C>>,
}

impl<C> Clone for Coordinator<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct CoordinatorInner<C> {
    client: C,
    config: PlantConfig,
    registry: SetterRegistry,
    snapshot: ArcSwapOption<Plant>,
    sched: Mutex<RefreshSchedule>,
    connection_state: watch::Sender<ConnectionState>,
    last_success_at: watch::Sender<Option<DateTime<Utc>>>,
    // Retained so the channels keep at least one receiver alive; without
    // this `Sender::send` is a no-op and the observable state never
    // updates.
    #[allow(dead_code)]
    connection_state_rx: watch::Receiver<ConnectionState>,
    #[allow(dead_code)]
    last_success_at_rx: watch::Receiver<Option<DateTime<Utc>>>,
}

impl<C: DeviceClient> Coordinator<C> {
    /// Create a coordinator with the standard settable-attribute catalog.
    /// Does NOT connect -- the first [`refresh()`](Self::refresh) does.
    pub fn new(client: C, config: PlantConfig) -> Self {
        Self::with_registry(client, config, SetterRegistry::standard())
    }

    /// Create a coordinator with a custom settable-attribute registry.
    pub fn with_registry(client: C, config: PlantConfig, registry: SetterRegistry) -> Self {
        let (connection_state, connection_state_rx) =
            watch::channel(ConnectionState::Disconnected);
        let (last_success_at, last_success_at_rx) = watch::channel(None);

        Self {
            inner: Arc::new(CoordinatorInner {
                client,
                config,
                registry,
                snapshot: ArcSwapOption::empty(),
                sched: Mutex::new(RefreshSchedule::new()),
                connection_state,
                last_success_at,
                connection_state_rx,
                last_success_at_rx,
            }),
        }
    }

    // ── Refresh cycle ────────────────────────────────────────────

    /// Run one refresh cycle: ensure the link is up, poll full or
    /// partial, classify the outcome, and return the current snapshot.
    ///
    /// A single exhausted-retries timeout is tolerated as noise: the
    /// previous snapshot is returned unchanged. Once staleness exceeds
    /// three poll intervals the connection is presumed wedged, torn
    /// down, and the cycle reports failure so the next one reconnects
    /// with a forced full refresh. Transport failures tear down
    /// immediately.
    ///
    /// Cycles serialize on an internal mutex; overlapping calls queue
    /// rather than race the schedule.
    pub async fn refresh(&self) -> Result<Arc<Plant>, CoreError> {
        let mut sched = self.inner.sched.lock().await;
        self.ensure_connected(&mut sched).await?;

        let now = Instant::now();
        let mode = sched.choose_mode(now, self.inner.config.full_refresh_interval);
        let (command, timeout, retries) = match mode {
            RefreshMode::Full => {
                info!("full refresh");
                (
                    Command::full_refresh(),
                    FULL_REFRESH_TIMEOUT,
                    FULL_REFRESH_RETRIES,
                )
            }
            RefreshMode::Partial => {
                let batteries = self.battery_count();
                debug!(batteries, "partial refresh");
                (
                    Command::partial_refresh(batteries),
                    PARTIAL_REFRESH_TIMEOUT,
                    PARTIAL_REFRESH_RETRIES,
                )
            }
        };

        match self.inner.client.execute(command, timeout, retries).await {
            Ok(plant) => {
                sched.last_success = Some(now);
                if mode == RefreshMode::Full {
                    sched.last_full_refresh = Some(now);
                }
                self.inner.snapshot.store(Some(Arc::clone(&plant)));
                let _ = self.inner.last_success_at.send(Some(Utc::now()));
                Ok(plant)
            }
            Err(err @ ApiError::Timeout { .. }) => {
                let staleness = sched.staleness(now);
                if staleness > self.inner.config.stale_after() {
                    warn!(
                        staleness_secs = staleness.as_secs(),
                        "refresh timed out past the staleness window -- tearing down connection"
                    );
                    self.teardown(&mut sched).await;
                    return Err(CoreError::StaleData { staleness });
                }
                warn!(
                    staleness_secs = staleness.as_secs(),
                    "timeout refreshing data, will retry next cycle"
                );
                self.plant().ok_or(CoreError::RefreshFailed { source: err })
            }
            Err(err) => {
                warn!(error = %err, "refresh failed, tearing down connection");
                self.teardown(&mut sched).await;
                Err(CoreError::RefreshFailed { source: err })
            }
        }
    }

    /// Bring the link up if it is down. A successful (re)connect wipes
    /// the schedule so the next poll is a full refresh.
    async fn ensure_connected(&self, sched: &mut RefreshSchedule) -> Result<(), CoreError> {
        if sched.connected {
            return Ok(());
        }

        self.inner
            .client
            .connect()
            .await
            .map_err(|source| CoreError::ConnectionFailed { source })?;

        sched.connected = true;
        sched.reset();
        let _ = self
            .inner
            .connection_state
            .send(ConnectionState::Connected);
        info!(
            host = %self.inner.config.host,
            port = self.inner.config.port,
            "connected to plant"
        );
        Ok(())
    }

    /// Drop to `Disconnected`. The snapshot is retained -- consumers
    /// keep reading the last good data while the next cycle reconnects.
    async fn teardown(&self, sched: &mut RefreshSchedule) {
        if let Err(err) = self.inner.client.close().await {
            warn!(error = %err, "close failed (non-fatal)");
        }
        sched.connected = false;
        let _ = self
            .inner
            .connection_state
            .send(ConnectionState::Disconnected);
        debug!("disconnected");
    }

    /// Tear down the link. Idempotent: closing a closed link is a no-op.
    pub async fn close(&self) {
        let mut sched = self.inner.sched.lock().await;
        self.teardown(&mut sched).await;
    }

    // ── Attribute write-through ──────────────────────────────────

    /// Write one settable attribute straight through to the device.
    ///
    /// Independent of the poll cycle: the write does not touch the
    /// refresh schedule, and the cached snapshot does not reflect it
    /// until the next refresh observes the device's new state.
    pub async fn set_attribute(&self, key: &str, value: Value) -> Result<(), CoreError> {
        let command = self.inner.registry.build(key, value)?;
        debug!(key, ?command, "write-through set");

        self.inner
            .client
            .execute(command, WRITE_TIMEOUT, WRITE_RETRIES)
            .await
            .map_err(|source| CoreError::WriteFailed { source })?;
        Ok(())
    }

    // ── State observation ────────────────────────────────────────

    /// The cached plant snapshot, if at least one refresh succeeded.
    pub fn plant(&self) -> Option<Arc<Plant>> {
        self.inner.snapshot.load_full()
    }

    /// Battery packs known from the last refresh.
    pub fn battery_count(&self) -> usize {
        self.plant().map_or(0, |plant| plant.battery_count())
    }

    /// Subscribe to connection state changes.
    pub fn connection_state(&self) -> watch::Receiver<ConnectionState> {
        self.inner.connection_state.subscribe()
    }

    pub fn is_connected(&self) -> bool {
        *self.inner.connection_state.borrow() == ConnectionState::Connected
    }

    /// Wall-clock time of the last successful refresh of any kind.
    pub fn last_success_at(&self) -> Option<DateTime<Utc>> {
        *self.inner.last_success_at.borrow()
    }

    /// Subscribe to last-success updates.
    pub fn subscribe_last_success(&self) -> watch::Receiver<Option<DateTime<Utc>>> {
        self.inner.last_success_at.subscribe()
    }

    /// Elapsed time since the last successful refresh, or `None` if
    /// nothing has succeeded since the link (re)connected.
    pub async fn staleness(&self) -> Option<Duration> {
        let sched = self.inner.sched.lock().await;
        sched.last_success.map(|at| at.elapsed())
    }

    // ── Connection identity (for display) ────────────────────────

    pub fn host(&self) -> &str {
        &self.inner.config.host
    }

    pub fn port(&self) -> u16 {
        self.inner.config.port
    }

    pub fn config(&self) -> &PlantConfig {
        &self.inner.config
    }
}

impl<C: DeviceClient + 'static> Coordinator<C> {
    /// Drive `refresh()` at the configured poll cadence until cancelled.
    ///
    /// For hosts that want the library to own the cadence; failures are
    /// logged and the loop keeps going, since each cycle already embeds
    /// the reconnect policy.
    pub fn spawn_polling(&self, cancel: CancellationToken) -> JoinHandle<()> {
        let coordinator = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(coordinator.inner.config.poll_interval);
            interval.tick().await; // consume the immediate first tick

            loop {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => break,
                    _ = interval.tick() => {
                        if let Err(err) = coordinator.refresh().await {
                            warn!(error = %err, "periodic refresh failed");
                        }
                    }
                }
            }
        })
    }
}
