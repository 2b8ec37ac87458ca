//! Board-agnostic core logic for the Enduro motor stress-test firmware
//!
//! This crate contains all logic that does not depend on specific
//! hardware implementations:
//!
//! - Hardware abstraction traits (drive backend, fault input, voltage sensor, clock)
//! - Safety guard (fault interlock, overvoltage trip with hysteresis)
//! - Slew-limited duty ramp
//! - Stress-test phase sequencer and orchestrator
//! - Configuration validation

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod diag;
pub mod ramp;
pub mod safety;
pub mod sequence;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;
