//! Configuration validation
//!
//! Each component carries its own config type ([`crate::ramp::RampConfig`],
//! [`crate::safety::GuardConfig`], [`crate::sequence::StressConfig`]) with a
//! `validate()` method. Bad configuration is a precondition violation
//! caught at initialization, never at runtime during a phase.

/// Errors detected by config validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Max slew step must be finite and positive
    SlewStepOutOfRange,
    /// Jump threshold must be finite and positive
    JumpThresholdOutOfRange,
    /// Overvoltage clear threshold must be strictly below the trip threshold
    InvertedVoltageThresholds,
    /// Poll/tick interval must be nonzero
    ZeroPollInterval,
    /// Phase/dwell/window duration must be nonzero
    ZeroDuration,
    /// Duty target outside [0, 100]
    DutyOutOfRange,
}
