//! Alert Dispatch and Delivery Sinks
//!
//! The dispatcher composes classification with routing: it classifies
//! the reading for the pack's cooling arrangement and hands the result
//! to exactly one sink. Sinks write to any [`core::fmt::Write`]
//! implementor so tests and embedded targets can inject their own
//! writer; under the `std` feature a stdout convenience layer matches
//! the classic surface.
//!
//! A sink accepts a [`BreachType`] and produces side effects; it is
//! the only place in the crate where side effects happen. Dispatch is
//! a closed match, the natural extension point if more sinks appear.

mod controller;
mod email;

pub use controller::send_to_controller;
pub use email::send_to_email;

use core::fmt::Write;

use crate::battery::BatteryCharacter;
use crate::classify::classify_temperature_breach;
use crate::errors::{AlertError, AlertResult};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Delivery target for a breach notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AlertTarget {
    /// Fixed-framed line on the battery controller bus
    ToController = 0,
    /// Operator-readable email text
    ToEmail = 1,
}

impl TryFrom<u8> for AlertTarget {
    type Error = AlertError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AlertTarget::ToController),
            1 => Ok(AlertTarget::ToEmail),
            _ => Err(AlertError::UnknownAlertTarget { code }),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AlertTarget {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ToController => defmt::write!(fmt, "controller"),
            Self::ToEmail => defmt::write!(fmt, "email"),
        }
    }
}

/// Classify a reading and deliver the result to one sink
///
/// The single entry point for the supervisory loop: classifies
/// `temperature_c` for the pack's cooling arrangement and routes the
/// breach to the sink named by `target`. The only observable effect is
/// the write performed by that sink.
pub fn check_and_alert<W: Write>(
    out: &mut W,
    target: AlertTarget,
    battery: &BatteryCharacter,
    temperature_c: f32,
) -> AlertResult<()> {
    let breach = classify_temperature_breach(battery.cooling_type, temperature_c);

    match target {
        AlertTarget::ToController => send_to_controller(out, breach),
        AlertTarget::ToEmail => send_to_email(out, breach),
    }
}

/// Dispatch on a raw target code received off the supervisory bus
///
/// Unknown codes are absorbed, not raised: the dispatcher emits the
/// fixed diagnostic line `Unknown alert target` and returns `Ok` so
/// the supervisory loop keeps running.
pub fn check_and_alert_raw<W: Write>(
    out: &mut W,
    target_code: u8,
    battery: &BatteryCharacter,
    temperature_c: f32,
) -> AlertResult<()> {
    match AlertTarget::try_from(target_code) {
        Ok(target) => check_and_alert(out, target, battery, temperature_c),
        Err(_) => {
            log_warn!("alert requested for unknown target code {}", target_code);
            out.write_str("Unknown alert target\n")?;
            Ok(())
        }
    }
}

#[cfg(feature = "std")]
mod stdout {
    use super::*;
    use crate::classify::BreachType;
    use std::io::Write as IoWrite;

    /// [`core::fmt::Write`] adapter over the process standard output
    ///
    /// Byte interleaving is possible if multiple threads write at
    /// once; callers needing atomic lines must serialize externally.
    pub struct StdoutSink {
        inner: std::io::Stdout,
    }

    impl StdoutSink {
        /// Create an adapter over this process's stdout
        pub fn new() -> Self {
            Self {
                inner: std::io::stdout(),
            }
        }
    }

    impl Default for StdoutSink {
        fn default() -> Self {
            Self::new()
        }
    }

    impl core::fmt::Write for StdoutSink {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            self.inner
                .write_all(s.as_bytes())
                .map_err(|_| core::fmt::Error)
        }
    }

    /// [`check_and_alert`] writing to the process standard output
    pub fn check_and_alert_stdout(
        target: AlertTarget,
        battery: &BatteryCharacter,
        temperature_c: f32,
    ) -> AlertResult<()> {
        check_and_alert(&mut StdoutSink::new(), target, battery, temperature_c)
    }

    /// [`send_to_controller`] writing to the process standard output
    pub fn send_to_controller_stdout(breach: BreachType) -> AlertResult<()> {
        send_to_controller(&mut StdoutSink::new(), breach)
    }

    /// [`send_to_email`] writing to the process standard output
    pub fn send_to_email_stdout(breach: BreachType) -> AlertResult<()> {
        send_to_email(&mut StdoutSink::new(), breach)
    }
}

#[cfg(feature = "std")]
pub use stdout::{
    check_and_alert_stdout, send_to_controller_stdout, send_to_email_stdout, StdoutSink,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battery::{Brand, CoolingType};

    fn battery(cooling_type: CoolingType) -> BatteryCharacter {
        BatteryCharacter::new(cooling_type, Brand::new("BrandX").unwrap())
    }

    #[test]
    fn routes_to_controller() {
        let mut out = String::new();
        check_and_alert(&mut out, AlertTarget::ToController, &battery(CoolingType::Passive), 36.0)
            .unwrap();
        assert_eq!(out, "feed : 2\n");
    }

    #[test]
    fn routes_to_email() {
        let mut out = String::new();
        check_and_alert(&mut out, AlertTarget::ToEmail, &battery(CoolingType::Passive), -5.0)
            .unwrap();
        assert_eq!(out, "To: a.b@c.com\nHi, the temperature is too low\n");
    }

    #[test]
    fn raw_dispatch_known_code() {
        let mut out = String::new();
        check_and_alert_raw(&mut out, 0, &battery(CoolingType::Passive), 30.0).unwrap();
        assert_eq!(out, "feed : 0\n");
    }

    #[test]
    fn raw_dispatch_unknown_code() {
        let mut out = String::new();
        check_and_alert_raw(&mut out, 99, &battery(CoolingType::Passive), 50.0).unwrap();
        assert_eq!(out, "Unknown alert target\n");
    }

    #[test]
    fn target_from_wire_code() {
        assert_eq!(AlertTarget::try_from(0), Ok(AlertTarget::ToController));
        assert_eq!(AlertTarget::try_from(1), Ok(AlertTarget::ToEmail));
        assert_eq!(
            AlertTarget::try_from(7),
            Err(AlertError::UnknownAlertTarget { code: 7 })
        );
    }
}
