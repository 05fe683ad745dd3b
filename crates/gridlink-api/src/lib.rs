// gridlink-api: Device-facing contract for local plant links.
//
// Defines what a plant connection must provide (the `DeviceClient` trait),
// the logical commands it executes (`Command`), and the typed snapshot model
// it produces (`Plant` / `Inverter` / `Battery`). Wire encoding is the
// client implementor's concern -- nothing in this crate touches the network.

pub mod client;
pub mod command;
pub mod error;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use client::DeviceClient;
pub use command::Command;
pub use error::ApiError;
pub use model::{
    AttrValue, Battery, BatteryAttr, ChargeStatus, Inverter, InverterAttr, InverterStatus, Plant,
    SystemMode, Value,
};
