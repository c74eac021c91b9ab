//! Controller Bus Sink
//!
//! Emits the fixed-framed alert line the battery controller parses:
//! `feed : <code>\n`, one line per call. The header renders as
//! lowercase hex without a `0x` prefix and the code is the decimal
//! breach ordinal.

use core::fmt::Write;

use crate::classify::BreachType;
use crate::constants::wire::CONTROLLER_ALERT_HEADER;
use crate::errors::AlertResult;

/// Send a breach code to the controller bus
pub fn send_to_controller<W: Write>(out: &mut W, breach: BreachType) -> AlertResult<()> {
    writeln!(out, "{:x} : {}", CONTROLLER_ALERT_HEADER, breach.code())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_per_breach_type() {
        let mut out = String::new();
        send_to_controller(&mut out, BreachType::Normal).unwrap();
        assert_eq!(out, "feed : 0\n");

        let mut out = String::new();
        send_to_controller(&mut out, BreachType::TooLow).unwrap();
        assert_eq!(out, "feed : 1\n");

        let mut out = String::new();
        send_to_controller(&mut out, BreachType::TooHigh).unwrap();
        assert_eq!(out, "feed : 2\n");
    }
}
