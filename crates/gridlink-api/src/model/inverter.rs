// ── Inverter: the plant's root record ──

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

use super::common::AttrValue;

/// Operating state reported by the inverter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum InverterStatus {
    #[default]
    Waiting,
    Normal,
    Warning,
    Fault,
    Updating,
}

/// What the battery subsystem is currently doing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ChargeStatus {
    #[default]
    Idle,
    Charging,
    Discharging,
}

/// Configured energy management strategy.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum SystemMode {
    #[default]
    Eco,
    TimedExport,
    Backup,
}

/// The full register image of the inverter as of the last refresh.
///
/// Energy counters are kWh, power is W (apparent power VA), voltage V,
/// current A, frequency Hz, temperature °C. Percentages are whole `u8`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inverter {
    // ── Identity / diagnostics ───────────────────────────────────────
    pub serial_number: String,
    pub model: String,
    pub firmware_version: String,
    pub device_type_code: String,
    pub status: InverterStatus,
    pub charge_status: ChargeStatus,
    pub system_mode: SystemMode,
    /// Cumulative hours of operation.
    pub work_time_total: u32,

    // ── Control registers (writable through the setter registry) ─────
    pub enable_charge: bool,
    pub enable_charge_target: bool,
    pub enable_discharge: bool,
    pub charge_target: u8,
    pub battery_soc_reserve: u8,
    pub battery_discharge_min_power_reserve: u8,
    pub battery_charge_limit: u8,
    pub battery_discharge_limit: u8,

    // ── Energy counters ──────────────────────────────────────────────
    pub e_inverter_in_day: f64,
    pub e_inverter_in_total: f64,
    pub e_inverter_out_day: f64,
    pub e_inverter_out_total: f64,
    pub e_grid_in_day: f64,
    pub e_grid_in_total: f64,
    pub e_grid_out_day: f64,
    pub e_grid_out_total: f64,
    pub e_pv1_day: f64,
    pub e_pv2_day: f64,
    pub e_pv_total: f64,
    pub e_solar_diverter: f64,
    pub e_battery_charge_day: f64,
    pub e_battery_charge_total: f64,
    pub e_battery_discharge_day: f64,
    pub e_battery_discharge_total: f64,
    pub e_battery_throughput_total: f64,

    // ── Instantaneous power ──────────────────────────────────────────
    pub p_inverter_out: f64,
    pub p_grid_out: f64,
    pub p_grid_apparent: f64,
    pub p_load_demand: f64,
    pub p_eps_backup: f64,
    pub p_pv1: f64,
    pub p_pv2: f64,
    /// Signed: positive discharging, negative charging.
    pub p_battery: f64,

    // ── Voltages ─────────────────────────────────────────────────────
    pub v_ac1: f64,
    pub v_pv1: f64,
    pub v_pv2: f64,
    pub v_battery: f64,
    pub v_eps_backup: f64,

    // ── Currents ─────────────────────────────────────────────────────
    pub i_ac1: f64,
    pub i_grid_port: f64,
    pub i_pv1: f64,
    pub i_pv2: f64,
    pub i_battery: f64,

    // ── Frequencies ──────────────────────────────────────────────────
    pub f_ac1: f64,
    pub f_eps_backup: f64,

    // ── Temperatures ─────────────────────────────────────────────────
    pub temp_inverter_heatsink: f64,
    pub temp_charger: f64,
    pub temp_battery: f64,

    /// Overall battery state of charge, percent.
    pub battery_percent: u8,
}

/// Enum key for every readable inverter attribute.
///
/// The static string form (`IntoStaticStr`, snake_case) is the stable
/// key a presentation layer would use for ids and translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum InverterAttr {
    SerialNumber,
    Model,
    FirmwareVersion,
    DeviceTypeCode,
    InverterStatus,
    ChargeStatus,
    SystemMode,
    WorkTimeTotal,

    EnableCharge,
    EnableChargeTarget,
    EnableDischarge,
    ChargeTarget,
    BatterySocReserve,
    BatteryDischargeMinPowerReserve,
    BatteryChargeLimit,
    BatteryDischargeLimit,

    EInverterInDay,
    EInverterInTotal,
    EInverterOutDay,
    EInverterOutTotal,
    EGridInDay,
    EGridInTotal,
    EGridOutDay,
    EGridOutTotal,
    EPv1Day,
    EPv2Day,
    EPvTotal,
    ESolarDiverter,
    EBatteryChargeDay,
    EBatteryChargeTotal,
    EBatteryDischargeDay,
    EBatteryDischargeTotal,
    EBatteryThroughputTotal,

    PInverterOut,
    PGridOut,
    PGridApparent,
    PLoadDemand,
    PEpsBackup,
    PPv1,
    PPv2,
    PBattery,

    VAc1,
    VPv1,
    VPv2,
    VBattery,
    VEpsBackup,

    IAc1,
    IGridPort,
    IPv1,
    IPv2,
    IBattery,

    FAc1,
    FEpsBackup,

    TempInverterHeatsink,
    TempCharger,
    TempBattery,

    BatteryPercent,
}

impl Inverter {
    /// Read one attribute by enum key.
    #[allow(clippy::too_many_lines)]
    pub fn get(&self, attr: InverterAttr) -> AttrValue {
        match attr {
            InverterAttr::SerialNumber => AttrValue::Text(self.serial_number.clone()),
            InverterAttr::Model => AttrValue::Text(self.model.clone()),
            InverterAttr::FirmwareVersion => AttrValue::Text(self.firmware_version.clone()),
            InverterAttr::DeviceTypeCode => AttrValue::Text(self.device_type_code.clone()),
            InverterAttr::InverterStatus => {
                AttrValue::Text(<&str>::from(self.status).to_owned())
            }
            InverterAttr::ChargeStatus => {
                AttrValue::Text(<&str>::from(self.charge_status).to_owned())
            }
            InverterAttr::SystemMode => {
                AttrValue::Text(<&str>::from(self.system_mode).to_owned())
            }
            InverterAttr::WorkTimeTotal => AttrValue::Int(i64::from(self.work_time_total)),

            InverterAttr::EnableCharge => AttrValue::Bool(self.enable_charge),
            InverterAttr::EnableChargeTarget => AttrValue::Bool(self.enable_charge_target),
            InverterAttr::EnableDischarge => AttrValue::Bool(self.enable_discharge),
            InverterAttr::ChargeTarget => AttrValue::Int(i64::from(self.charge_target)),
            InverterAttr::BatterySocReserve => {
                AttrValue::Int(i64::from(self.battery_soc_reserve))
            }
            InverterAttr::BatteryDischargeMinPowerReserve => {
                AttrValue::Int(i64::from(self.battery_discharge_min_power_reserve))
            }
            InverterAttr::BatteryChargeLimit => {
                AttrValue::Int(i64::from(self.battery_charge_limit))
            }
            InverterAttr::BatteryDischargeLimit => {
                AttrValue::Int(i64::from(self.battery_discharge_limit))
            }

            InverterAttr::EInverterInDay => AttrValue::Float(self.e_inverter_in_day),
            InverterAttr::EInverterInTotal => AttrValue::Float(self.e_inverter_in_total),
            InverterAttr::EInverterOutDay => AttrValue::Float(self.e_inverter_out_day),
            InverterAttr::EInverterOutTotal => AttrValue::Float(self.e_inverter_out_total),
            InverterAttr::EGridInDay => AttrValue::Float(self.e_grid_in_day),
            InverterAttr::EGridInTotal => AttrValue::Float(self.e_grid_in_total),
            InverterAttr::EGridOutDay => AttrValue::Float(self.e_grid_out_day),
            InverterAttr::EGridOutTotal => AttrValue::Float(self.e_grid_out_total),
            InverterAttr::EPv1Day => AttrValue::Float(self.e_pv1_day),
            InverterAttr::EPv2Day => AttrValue::Float(self.e_pv2_day),
            InverterAttr::EPvTotal => AttrValue::Float(self.e_pv_total),
            InverterAttr::ESolarDiverter => AttrValue::Float(self.e_solar_diverter),
            InverterAttr::EBatteryChargeDay => AttrValue::Float(self.e_battery_charge_day),
            InverterAttr::EBatteryChargeTotal => AttrValue::Float(self.e_battery_charge_total),
            InverterAttr::EBatteryDischargeDay => {
                AttrValue::Float(self.e_battery_discharge_day)
            }
            InverterAttr::EBatteryDischargeTotal => {
                AttrValue::Float(self.e_battery_discharge_total)
            }
            InverterAttr::EBatteryThroughputTotal => {
                AttrValue::Float(self.e_battery_throughput_total)
            }

            InverterAttr::PInverterOut => AttrValue::Float(self.p_inverter_out),
            InverterAttr::PGridOut => AttrValue::Float(self.p_grid_out),
            InverterAttr::PGridApparent => AttrValue::Float(self.p_grid_apparent),
            InverterAttr::PLoadDemand => AttrValue::Float(self.p_load_demand),
            InverterAttr::PEpsBackup => AttrValue::Float(self.p_eps_backup),
            InverterAttr::PPv1 => AttrValue::Float(self.p_pv1),
            InverterAttr::PPv2 => AttrValue::Float(self.p_pv2),
            InverterAttr::PBattery => AttrValue::Float(self.p_battery),

            InverterAttr::VAc1 => AttrValue::Float(self.v_ac1),
            InverterAttr::VPv1 => AttrValue::Float(self.v_pv1),
            InverterAttr::VPv2 => AttrValue::Float(self.v_pv2),
            InverterAttr::VBattery => AttrValue::Float(self.v_battery),
            InverterAttr::VEpsBackup => AttrValue::Float(self.v_eps_backup),

            InverterAttr::IAc1 => AttrValue::Float(self.i_ac1),
            InverterAttr::IGridPort => AttrValue::Float(self.i_grid_port),
            InverterAttr::IPv1 => AttrValue::Float(self.i_pv1),
            InverterAttr::IPv2 => AttrValue::Float(self.i_pv2),
            InverterAttr::IBattery => AttrValue::Float(self.i_battery),

            InverterAttr::FAc1 => AttrValue::Float(self.f_ac1),
            InverterAttr::FEpsBackup => AttrValue::Float(self.f_eps_backup),

            InverterAttr::TempInverterHeatsink => {
                AttrValue::Float(self.temp_inverter_heatsink)
            }
            InverterAttr::TempCharger => AttrValue::Float(self.temp_charger),
            InverterAttr::TempBattery => AttrValue::Float(self.temp_battery),

            InverterAttr::BatteryPercent => AttrValue::Int(i64::from(self.battery_percent)),
        }
    }
}
