// ── Shared value types ──

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value read from the plant through an enum-keyed accessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl AttrValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric reading as `f64`, covering both integer and float attrs.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A value written through the attribute write-through path.
///
/// Mirrors what control surfaces produce: toggles send booleans, sliders
/// and number inputs send integers or floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl Value {
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Interpret as a whole percentage in `0..=100`.
    ///
    /// Floats are accepted when they carry no fractional part -- number
    /// sliders report `50.0`, not `50`.
    pub fn as_percent(self) -> Option<u8> {
        let whole = match self {
            Self::Int(i) => i,
            // Saturating float-to-int cast; the range check comes after.
            #[allow(clippy::cast_possible_truncation)]
            Self::Float(f) if f.fract().abs() < f64::EPSILON => f as i64,
            _ => return None,
        };
        u8::try_from(whole).ok().filter(|p| *p <= 100)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_accepts_whole_numbers_in_range() {
        assert_eq!(Value::Int(80).as_percent(), Some(80));
        assert_eq!(Value::Float(50.0).as_percent(), Some(50));
        assert_eq!(Value::Int(0).as_percent(), Some(0));
        assert_eq!(Value::Int(100).as_percent(), Some(100));
    }

    #[test]
    fn percent_rejects_out_of_range_and_fractional() {
        assert_eq!(Value::Int(101).as_percent(), None);
        assert_eq!(Value::Int(-1).as_percent(), None);
        assert_eq!(Value::Float(49.5).as_percent(), None);
        assert_eq!(Value::Bool(true).as_percent(), None);
    }

    #[test]
    fn bool_is_strict() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(1).as_bool(), None);
    }

    #[test]
    fn attr_value_display() {
        assert_eq!(AttrValue::Float(3.6).to_string(), "3.6");
        assert_eq!(AttrValue::Text("normal".into()).to_string(), "normal");
    }
}
