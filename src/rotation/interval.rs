// SPDX-License-Identifier: GPL-3.0-only

//! Rotation cadence

use crate::constants::{DEFAULT_INTERVAL_MS, MIN_INTERVAL_MS};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::Duration;
use tracing::warn;

/// Time between automatic advances, always strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RotationInterval(Duration);

impl RotationInterval {
    /// Build from a millisecond count; values ≤ 0 fall back to the default
    pub fn from_millis(millis: i64) -> Self {
        if millis <= 0 {
            warn!(millis, "Non-positive rotation interval, using default");
            return Self::default();
        }
        Self(Duration::from_millis(millis as u64))
    }

    pub fn as_duration(self) -> Duration {
        self.0
    }

    pub fn as_millis(self) -> u64 {
        self.0.as_millis() as u64
    }

    /// Interval changed by `delta_ms`, never below [`MIN_INTERVAL_MS`]
    pub fn adjusted(self, delta_ms: i64) -> Self {
        let millis = (self.as_millis() as i64)
            .saturating_add(delta_ms)
            .max(MIN_INTERVAL_MS as i64);
        Self(Duration::from_millis(millis as u64))
    }
}

impl Default for RotationInterval {
    fn default() -> Self {
        Self(Duration::from_millis(DEFAULT_INTERVAL_MS))
    }
}

impl fmt::Display for RotationInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let millis = self.as_millis();
        if millis % 1000 == 0 {
            write!(f, "{}s", millis / 1000)
        } else {
            write!(f, "{}ms", millis)
        }
    }
}

impl Serialize for RotationInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.as_millis())
    }
}

/// Lenient: any JSON value is accepted. Numbers are rounded to whole
/// milliseconds, numeric strings are parsed, anything else (or a
/// non-positive number) becomes the default interval.
impl<'de> Deserialize<'de> for RotationInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let millis = match &value {
            serde_json::Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64)),
            serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };

        Ok(match millis {
            Some(millis) => Self::from_millis(millis),
            None => {
                warn!(value = %value, "Non-numeric rotation interval, using default");
                Self::default()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_falls_back() {
        assert_eq!(RotationInterval::from_millis(0), RotationInterval::default());
        assert_eq!(RotationInterval::from_millis(-20), RotationInterval::default());
        assert_eq!(RotationInterval::from_millis(1200).as_millis(), 1200);
    }

    #[test]
    fn test_lenient_deserialize() {
        let parse = |json: &str| serde_json::from_str::<RotationInterval>(json).unwrap();

        assert_eq!(parse("3000").as_millis(), 3000);
        assert_eq!(parse("2500.4").as_millis(), 2500);
        assert_eq!(parse("\"4000\"").as_millis(), 4000);
        assert_eq!(parse("\"fast\""), RotationInterval::default());
        assert_eq!(parse("null"), RotationInterval::default());
        assert_eq!(parse("-1"), RotationInterval::default());
    }

    #[test]
    fn test_adjusted_has_floor() {
        let interval = RotationInterval::from_millis(2000);
        assert_eq!(interval.adjusted(1000).as_millis(), 3000);
        assert_eq!(interval.adjusted(-10_000).as_millis(), MIN_INTERVAL_MS);
    }

    #[test]
    fn test_display() {
        assert_eq!(RotationInterval::default().to_string(), "5s");
        assert_eq!(RotationInterval::from_millis(750).to_string(), "750ms");
    }
}
