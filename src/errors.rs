//! Error Types for Alert Delivery and Wire Decoding
//!
//! Errors are kept small and `Copy` since they cross the supervisory
//! loop on every sample: no heap allocation, no `String`, only inline
//! data. Classification itself (`infer_breach` and friends) is total
//! and never produces an error; the only fault sources are the sink
//! writer and raw wire codes decoded at the crate boundary.

use thiserror_no_std::Error;

/// Result type for alert operations
pub type AlertResult<T> = Result<T, AlertError>;

/// Alert errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertError {
    /// The sink writer rejected the alert bytes
    #[error("alert sink write failed")]
    Sink(#[from] core::fmt::Error),

    /// Raw wire code does not name a known cooling type
    #[error("unknown cooling type code {code}")]
    UnknownCoolingType {
        /// The raw byte received off the wire
        code: u8,
    },

    /// Raw wire code does not name a known alert target
    #[error("unknown alert target code {code}")]
    UnknownAlertTarget {
        /// The raw byte received off the wire
        code: u8,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for AlertError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Sink(_) => defmt::write!(fmt, "alert sink write failed"),
            Self::UnknownCoolingType { code } => {
                defmt::write!(fmt, "unknown cooling type code {}", code)
            }
            Self::UnknownAlertTarget { code } => {
                defmt::write!(fmt, "unknown alert target code {}", code)
            }
        }
    }
}
