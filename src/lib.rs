//! Battery thermal breach alerting for Cellguard
//!
//! Classifies a sampled battery temperature against the limits of the
//! installed cooling arrangement and dispatches a breach notification
//! to a delivery target (controller bus frame or email text).
//!
//! Key constraints:
//! - Runs inside a supervisory BMS loop on embedded targets
//! - No heap allocation in the classification path
//! - Side effects confined to the alert sinks
//!
//! ```
//! use cellguard::{check_and_alert, AlertTarget, BatteryCharacter, Brand, CoolingType};
//!
//! let battery = BatteryCharacter::new(CoolingType::Passive, Brand::new("BrandX").unwrap());
//!
//! // Passive cooling tops out at 35°C, so 36°C is a high breach
//! let mut out = String::new();
//! check_and_alert(&mut out, AlertTarget::ToController, &battery, 36.0)?;
//! assert_eq!(out, "feed : 2\n");
//! # Ok::<(), cellguard::AlertError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod alert;
pub mod battery;
pub mod classify;
pub mod constants;
pub mod errors;

// Public API
pub use alert::{check_and_alert, check_and_alert_raw, send_to_controller, send_to_email, AlertTarget};
#[cfg(feature = "std")]
pub use alert::{
    check_and_alert_stdout, send_to_controller_stdout, send_to_email_stdout, StdoutSink,
};
pub use battery::{BatteryCharacter, Brand, CoolingType};
pub use classify::{classify_temperature_breach, infer_breach, BreachType, TemperatureRange};
pub use errors::{AlertError, AlertResult};

/// Crate version from the cargo manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
