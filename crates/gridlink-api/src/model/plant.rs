// ── Plant: the cached device snapshot ──

use serde::{Deserialize, Serialize};

use super::battery::Battery;
use super::inverter::Inverter;

/// Everything known about the plant as of the last refresh: the data
/// adapter identity, the inverter root record, and the attached battery
/// packs.
///
/// Produced by the device client, cached and handed out by reference by
/// the coordinator. Consumers treat it as immutable; a refresh replaces
/// the whole snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    /// Serial of the data adapter the link terminates at.
    pub data_adapter_serial_number: String,
    pub inverter: Inverter,
    pub batteries: Vec<Battery>,
}

impl Plant {
    /// Number of battery packs known from the last full refresh.
    ///
    /// Sizes partial refreshes so they never rediscover topology.
    pub fn battery_count(&self) -> usize {
        self.batteries.len()
    }

    pub fn inverter_serial(&self) -> &str {
        &self.inverter.serial_number
    }

    pub fn battery(&self, index: usize) -> Option<&Battery> {
        self.batteries.get(index)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_plant() -> Plant {
        Plant {
            data_adapter_serial_number: "WF2209G123".into(),
            inverter: Inverter {
                serial_number: "SA2214G987".into(),
                model: "Hybrid".into(),
                battery_percent: 64,
                ..Inverter::default()
            },
            batteries: vec![
                Battery {
                    serial_number: "BAT001".into(),
                    soc: 63,
                    ..Battery::default()
                },
                Battery {
                    serial_number: "BAT002".into(),
                    soc: 65,
                    ..Battery::default()
                },
            ],
        }
    }

    #[test]
    fn battery_count_tracks_topology() {
        let plant = sample_plant();
        assert_eq!(plant.battery_count(), 2);
        assert_eq!(plant.battery(1).unwrap().serial_number, "BAT002");
        assert!(plant.battery(2).is_none());
    }

    #[test]
    fn serde_round_trip() {
        let plant = sample_plant();
        let json = serde_json::to_string(&plant).unwrap();
        let back: Plant = serde_json::from_str(&json).unwrap();
        assert_eq!(plant, back);
    }
}
