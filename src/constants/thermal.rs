//! Thermal Limits for Battery Cooling Bands
//!
//! Upper temperature limits depend on how much heat the installed
//! cooling arrangement can move away from the pack; the lower limit is
//! shared because lithium cells must not be charged below freezing
//! regardless of cooling hardware.

/// Lower temperature limit shared by every cooling band (°C).
///
/// Charging lithium cells below 0°C causes lithium plating on the
/// anode, so the supervisory loop treats any sub-zero reading as a
/// breach independent of cooling type.
pub const COOLING_LOWER_LIMIT_C: f32 = 0.0;

/// Upper temperature limit for passively cooled packs (°C).
///
/// Passive arrangements rely on convection alone and saturate first.
pub const PASSIVE_COOLING_MAX_C: f32 = 35.0;

/// Upper temperature limit for medium active cooling (°C).
///
/// Forced-air cooling extends the band by 5°C over passive.
pub const MED_ACTIVE_COOLING_MAX_C: f32 = 40.0;

/// Upper temperature limit for high active cooling (°C).
///
/// Liquid or high-flow forced cooling, the widest permitted band.
pub const HI_ACTIVE_COOLING_MAX_C: f32 = 45.0;
