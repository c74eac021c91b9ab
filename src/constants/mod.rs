//! Constants for Cellguard
//!
//! Centralized numeric and wire-format constants used throughout the
//! crate. All values are defined here with their purpose and source so
//! the rest of the code never carries magic numbers.
//!
//! Constants are grouped by domain:
//! - **Thermal**: cooling-band temperature limits
//! - **Wire**: controller frame header and email text constants

/// Cooling-band temperature limits for the supported cooling types.
pub mod thermal;

/// Controller frame and email wire-format constants.
pub mod wire;

// Re-export commonly used constants for convenience
pub use thermal::{
    COOLING_LOWER_LIMIT_C, HI_ACTIVE_COOLING_MAX_C, MED_ACTIVE_COOLING_MAX_C,
    PASSIVE_COOLING_MAX_C,
};

pub use wire::{CONTROLLER_ALERT_HEADER, EMAIL_RECIPIENT};
