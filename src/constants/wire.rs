//! Wire-Format Constants for Alert Delivery
//!
//! The controller frame layout and the email recipient are fixed
//! external contracts: the controller parses the header and breach
//! code off its bus, and operator tooling matches the email text.

/// Frame header the battery controller expects on its alert line.
///
/// Rendered as lowercase hex without a `0x` prefix, so the wire text
/// is literally `feed`. The controller line format is
/// `feed : <code>\n` with `<code>` the decimal breach code.
pub const CONTROLLER_ALERT_HEADER: u16 = 0xfeed;

/// Recipient address emitted on the first line of every email alert.
pub const EMAIL_RECIPIENT: &str = "a.b@c.com";
