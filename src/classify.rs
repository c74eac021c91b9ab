//! Breach Classification Against Cooling Bands
//!
//! Pure predicates only: a reading and a band map to exactly one
//! [`BreachType`], with no state and no side effects. The comparisons
//! are strict, so a reading exactly on a band boundary is in band.

use crate::battery::CoolingType;

/// Permitted temperature band for a cooling arrangement
///
/// Invariant: `lower_limit <= upper_limit` for every band produced by
/// [`CoolingType::temperature_range`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureRange {
    /// Minimum in-band temperature in Celsius
    pub lower_limit: f32,
    /// Maximum in-band temperature in Celsius
    pub upper_limit: f32,
}

impl TemperatureRange {
    /// Create a band from its limits
    pub const fn new(lower_limit: f32, upper_limit: f32) -> Self {
        Self {
            lower_limit,
            upper_limit,
        }
    }
}

/// Breach category for a classified reading
///
/// The numeric codes are the controller wire contract and must not be
/// reordered: the controller parses them off its alert line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BreachType {
    /// Reading inside the permitted band
    Normal = 0,
    /// Reading below the lower limit
    TooLow = 1,
    /// Reading above the upper limit
    TooHigh = 2,
}

impl BreachType {
    /// Wire code sent to the controller
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            BreachType::Normal => "normal",
            BreachType::TooLow => "too low",
            BreachType::TooHigh => "too high",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BreachType {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name());
    }
}

/// Classify a reading against a temperature band
///
/// Strict comparisons: boundary equality is [`BreachType::Normal`].
/// NaN readings fail both comparisons and therefore classify as
/// `Normal`; callers should not rely on that.
pub fn infer_breach(value: f32, range: TemperatureRange) -> BreachType {
    if value < range.lower_limit {
        return BreachType::TooLow;
    }
    if value > range.upper_limit {
        return BreachType::TooHigh;
    }
    BreachType::Normal
}

/// Classify a reading against the band for a cooling arrangement
pub fn classify_temperature_breach(cooling_type: CoolingType, temperature_c: f32) -> BreachType {
    infer_breach(temperature_c, cooling_type.temperature_range())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trichotomy() {
        let range = TemperatureRange::new(0.0, 35.0);

        assert_eq!(infer_breach(-1.0, range), BreachType::TooLow);
        assert_eq!(infer_breach(20.0, range), BreachType::Normal);
        assert_eq!(infer_breach(36.0, range), BreachType::TooHigh);
    }

    #[test]
    fn boundary_equality_is_normal() {
        let range = TemperatureRange::new(0.0, 35.0);

        assert_eq!(infer_breach(0.0, range), BreachType::Normal);
        assert_eq!(infer_breach(35.0, range), BreachType::Normal);
    }

    #[test]
    fn nan_reading_is_normal() {
        let range = TemperatureRange::new(0.0, 35.0);

        // Both strict comparisons fail for NaN
        assert_eq!(infer_breach(f32::NAN, range), BreachType::Normal);
    }

    #[test]
    fn classify_per_cooling_type() {
        // Passive: 0 to 35
        assert_eq!(
            classify_temperature_breach(CoolingType::Passive, -1.0),
            BreachType::TooLow
        );
        assert_eq!(
            classify_temperature_breach(CoolingType::Passive, 0.0),
            BreachType::Normal
        );
        assert_eq!(
            classify_temperature_breach(CoolingType::Passive, 35.0),
            BreachType::Normal
        );
        assert_eq!(
            classify_temperature_breach(CoolingType::Passive, 36.0),
            BreachType::TooHigh
        );

        // HiActive: 0 to 45
        assert_eq!(
            classify_temperature_breach(CoolingType::HiActive, 45.0),
            BreachType::Normal
        );
        assert_eq!(
            classify_temperature_breach(CoolingType::HiActive, 46.0),
            BreachType::TooHigh
        );

        // MedActive: 0 to 40
        assert_eq!(
            classify_temperature_breach(CoolingType::MedActive, 40.0),
            BreachType::Normal
        );
        assert_eq!(
            classify_temperature_breach(CoolingType::MedActive, 41.0),
            BreachType::TooHigh
        );
    }

    #[test]
    fn wire_codes_are_stable() {
        assert_eq!(BreachType::Normal.code(), 0);
        assert_eq!(BreachType::TooLow.code(), 1);
        assert_eq!(BreachType::TooHigh.code(), 2);
    }
}
