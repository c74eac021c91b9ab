//! Battery Pack Descriptors
//!
//! The supervisory loop hands the library a [`BatteryCharacter`]
//! describing the installed pack. Only the cooling type influences
//! classification; the brand is an opaque identifier carried for
//! operator-facing tooling.

use core::fmt;

use crate::classify::TemperatureRange;
use crate::constants::thermal::{
    COOLING_LOWER_LIMIT_C, HI_ACTIVE_COOLING_MAX_C, MED_ACTIVE_COOLING_MAX_C,
    PASSIVE_COOLING_MAX_C,
};
use crate::errors::AlertError;

/// Maximum length for inline brand identifiers
pub const MAX_BRAND_LEN: usize = 23;

/// Cooling arrangement installed on a battery pack
///
/// Determines the permitted temperature band: more capable cooling
/// tolerates a higher pack temperature before a breach is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CoolingType {
    /// Convection-only cooling, narrowest band
    Passive = 0,
    /// Liquid or high-flow forced cooling, widest band
    HiActive = 1,
    /// Forced-air cooling, intermediate band
    MedActive = 2,
}

impl CoolingType {
    /// Permitted temperature band for this cooling arrangement
    ///
    /// The mapping is fixed at build time; see [`crate::constants::thermal`]
    /// for the individual limits.
    pub const fn temperature_range(self) -> TemperatureRange {
        match self {
            CoolingType::Passive => {
                TemperatureRange::new(COOLING_LOWER_LIMIT_C, PASSIVE_COOLING_MAX_C)
            }
            CoolingType::HiActive => {
                TemperatureRange::new(COOLING_LOWER_LIMIT_C, HI_ACTIVE_COOLING_MAX_C)
            }
            CoolingType::MedActive => {
                TemperatureRange::new(COOLING_LOWER_LIMIT_C, MED_ACTIVE_COOLING_MAX_C)
            }
        }
    }

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            CoolingType::Passive => "passive",
            CoolingType::HiActive => "hi-active",
            CoolingType::MedActive => "med-active",
        }
    }
}

impl TryFrom<u8> for CoolingType {
    type Error = AlertError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CoolingType::Passive),
            1 => Ok(CoolingType::HiActive),
            2 => Ok(CoolingType::MedActive),
            _ => Err(AlertError::UnknownCoolingType { code }),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CoolingType {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name());
    }
}

/// Inline string for battery brand identifiers
///
/// Avoids heap allocation for common brand lengths
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Brand {
    len: u8,
    data: [u8; MAX_BRAND_LEN],
}

impl Brand {
    /// Create from string slice
    ///
    /// Returns `None` if the identifier exceeds [`MAX_BRAND_LEN`] bytes.
    pub fn new(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() > MAX_BRAND_LEN {
            return None;
        }

        let mut data = [0u8; MAX_BRAND_LEN];
        data[..bytes.len()].copy_from_slice(bytes);

        Some(Self {
            len: bytes.len() as u8,
            data,
        })
    }

    /// Get as string slice
    pub fn as_str(&self) -> &str {
        // We only store valid UTF-8 from new(), so this should never panic
        core::str::from_utf8(&self.data[..self.len as usize])
            .expect("Brand contains invalid UTF-8")
    }
}

impl fmt::Debug for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

/// Descriptor for an installed battery pack
///
/// Bundles the cooling arrangement with the pack's brand identifier.
/// Only `cooling_type` affects classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryCharacter {
    /// Cooling arrangement installed on the pack
    pub cooling_type: CoolingType,
    /// Opaque brand identifier, carried for operator tooling
    pub brand: Brand,
}

impl BatteryCharacter {
    /// Create a descriptor for a pack
    pub const fn new(cooling_type: CoolingType, brand: Brand) -> Self {
        Self { cooling_type, brand }
    }
}
