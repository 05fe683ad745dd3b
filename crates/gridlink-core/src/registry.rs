// ── Writable attribute registry ──
//
// Explicit mapping from attribute key to a typed command builder. The
// coordinator is handed a registry at construction; there is no runtime
// discovery of setters. Builders validate value shape and range before a
// command ever reaches the device.

use std::collections::HashMap;

use gridlink_api::{Command, Value};

use crate::error::CoreError;

/// Builds a command from a write value, or explains why the value is
/// unacceptable for this attribute.
pub type CommandBuilder = fn(Value) -> Result<Command, String>;

// Register limits enforced by the inverter firmware.
const SOC_RESERVE_MIN: u8 = 4;
const RATE_LIMIT_MAX: u8 = 50;

/// The set of attributes that accept write-through mutations.
pub struct SetterRegistry {
    builders: HashMap<&'static str, CommandBuilder>,
}

impl SetterRegistry {
    /// An empty registry. Hosts with exotic firmware can start here and
    /// [`register`](Self::register) their own catalog.
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// The standard settable catalog for supported inverters.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("charge_target", |v| {
            percent_between(v, SOC_RESERVE_MIN, 100)
                .map(|percent| Command::SetChargeTarget { percent })
        });
        registry.register("enable_charge", |v| {
            switch(v).map(|enable| Command::SetEnableCharge { enable })
        });
        registry.register("enable_charge_target", |v| {
            switch(v).map(|enable| Command::SetEnableChargeTarget { enable })
        });
        registry.register("enable_discharge", |v| {
            switch(v).map(|enable| Command::SetEnableDischarge { enable })
        });
        registry.register("battery_soc_reserve", |v| {
            percent_between(v, SOC_RESERVE_MIN, 100)
                .map(|percent| Command::SetBatterySocReserve { percent })
        });
        registry.register("battery_discharge_min_power_reserve", |v| {
            percent_between(v, 0, 100)
                .map(|percent| Command::SetBatteryDischargeMinPowerReserve { percent })
        });
        registry.register("battery_charge_limit", |v| {
            percent_between(v, 0, RATE_LIMIT_MAX)
                .map(|percent| Command::SetBatteryChargeLimit { percent })
        });
        registry.register("battery_discharge_limit", |v| {
            percent_between(v, 0, RATE_LIMIT_MAX)
                .map(|percent| Command::SetBatteryDischargeLimit { percent })
        });
        registry.register("inverter_reboot", |v| {
            switch(v).map(|_| Command::RebootInverter)
        });
        registry
    }

    /// Add or replace the builder for a key.
    pub fn register(&mut self, key: &'static str, builder: CommandBuilder) {
        self.builders.insert(key, builder);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.builders.contains_key(key)
    }

    /// All registered keys, sorted for stable display.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.builders.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Resolve `key` and build its command from `value`.
    pub fn build(&self, key: &str, value: Value) -> Result<Command, CoreError> {
        let builder = self
            .builders
            .get(key)
            .ok_or_else(|| CoreError::UnknownAttribute { key: key.into() })?;
        builder(value).map_err(|reason| CoreError::InvalidValue {
            key: key.into(),
            reason,
        })
    }
}

impl Default for SetterRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

// ── Value validation ─────────────────────────────────────────────────

fn percent_between(value: Value, min: u8, max: u8) -> Result<u8, String> {
    let percent = value
        .as_percent()
        .ok_or_else(|| format!("expected a whole percentage, got {value:?}"))?;
    if (min..=max).contains(&percent) {
        Ok(percent)
    } else {
        Err(format!("must be between {min} and {max}, got {percent}"))
    }
}

fn switch(value: Value) -> Result<bool, String> {
    value
        .as_bool()
        .ok_or_else(|| format!("expected a boolean, got {value:?}"))
}
