//! Safety interlocks
//!
//! Fault/E-stop polling and the overvoltage trip with hysteresis.

pub mod guard;

pub use guard::{GuardConfig, OvervoltageVerdict, SafetyGuard};
