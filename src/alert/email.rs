//! Email Text Sink
//!
//! Renders the operator-facing alert block: a recipient line followed
//! by one message line keyed on the breach category. This is a text
//! emitter with a fixed recipient, not an SMTP client.
//!
//! A `Normal` breach emits the "temperature is normal" line rather
//! than staying silent, keeping the sink total over [`BreachType`].

use core::fmt::Write;

use crate::classify::BreachType;
use crate::constants::wire::EMAIL_RECIPIENT;
use crate::errors::AlertResult;

const fn message_for(breach: BreachType) -> &'static str {
    match breach {
        BreachType::Normal => "Hi, the temperature is normal",
        BreachType::TooLow => "Hi, the temperature is too low",
        BreachType::TooHigh => "Hi, the temperature is too high",
    }
}

/// Send a breach notification as email text
pub fn send_to_email<W: Write>(out: &mut W, breach: BreachType) -> AlertResult<()> {
    writeln!(out, "To: {}", EMAIL_RECIPIENT)?;
    writeln!(out, "{}", message_for(breach))?;
    Ok(())
}
