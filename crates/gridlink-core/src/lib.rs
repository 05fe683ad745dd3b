// gridlink-core: Refresh coordination between a plant link and its consumers.
//
// Owns the poll schedule (cheap partial vs. expensive full refresh), the
// reconnect policy, the cached plant snapshot, and the write-through path
// for settable attributes. The wire itself lives behind the
// `gridlink_api::DeviceClient` trait.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod registry;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::PlantConfig;
pub use coordinator::{ConnectionState, Coordinator};
pub use error::CoreError;
pub use registry::SetterRegistry;

// Re-export the device-facing surface so consumers depend on one crate.
pub use gridlink_api::{
    ApiError, AttrValue, Battery, BatteryAttr, ChargeStatus, Command, DeviceClient, Inverter,
    InverterAttr, InverterStatus, Plant, SystemMode, Value,
};
