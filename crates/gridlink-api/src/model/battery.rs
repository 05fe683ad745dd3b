// ── Battery: a plant sub-unit ──

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

use super::common::AttrValue;

/// One battery pack attached to the inverter.
///
/// Capacities are Ah, voltage V. Discovered during full refreshes; partial
/// refreshes update measurements in place without re-counting packs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    pub serial_number: String,
    pub bms_firmware_version: String,
    /// State of charge, percent.
    pub soc: u8,
    pub design_capacity: f64,
    pub full_capacity: f64,
    pub remaining_capacity: f64,
    pub num_cycles: u32,
    pub v_battery_out: f64,
}

/// Enum key for every readable battery attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum BatteryAttr {
    SerialNumber,
    BmsFirmwareVersion,
    Soc,
    DesignCapacity,
    FullCapacity,
    RemainingCapacity,
    NumCycles,
    VBatteryOut,
}

impl Battery {
    /// Read one attribute by enum key.
    pub fn get(&self, attr: BatteryAttr) -> AttrValue {
        match attr {
            BatteryAttr::SerialNumber => AttrValue::Text(self.serial_number.clone()),
            BatteryAttr::BmsFirmwareVersion => {
                AttrValue::Text(self.bms_firmware_version.clone())
            }
            BatteryAttr::Soc => AttrValue::Int(i64::from(self.soc)),
            BatteryAttr::DesignCapacity => AttrValue::Float(self.design_capacity),
            BatteryAttr::FullCapacity => AttrValue::Float(self.full_capacity),
            BatteryAttr::RemainingCapacity => AttrValue::Float(self.remaining_capacity),
            BatteryAttr::NumCycles => AttrValue::Int(i64::from(self.num_cycles)),
            BatteryAttr::VBatteryOut => AttrValue::Float(self.v_battery_out),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_attr_resolves() {
        let battery = Battery::default();
        for attr in BatteryAttr::iter() {
            let _ = battery.get(attr);
        }
    }

    #[test]
    fn soc_and_capacity_read_back() {
        let battery = Battery {
            soc: 72,
            full_capacity: 186.4,
            ..Battery::default()
        };
        assert_eq!(battery.get(BatteryAttr::Soc), AttrValue::Int(72));
        assert_eq!(
            battery.get(BatteryAttr::FullCapacity),
            AttrValue::Float(186.4)
        );
    }
}
