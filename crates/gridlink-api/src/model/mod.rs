// ── Plant snapshot model ──
//
// Typed records for everything the plant reports: one root inverter plus
// a variable-length battery collection. Attribute access is enum-keyed:
// consumers resolve an `InverterAttr`/`BatteryAttr` once at startup and
// read through `get()`, never by string lookup.

mod battery;
mod common;
mod inverter;
mod plant;

pub use battery::{Battery, BatteryAttr};
pub use common::{AttrValue, Value};
pub use inverter::{ChargeStatus, Inverter, InverterAttr, InverterStatus, SystemMode};
pub use plant::Plant;
