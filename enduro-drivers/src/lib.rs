//! Hardware driver implementations
//!
//! Concrete implementations of the traits defined in enduro-core, built
//! on embedded-hal 1.0:
//!
//! - Drive backends (full H-bridge PWM, single PWM leg)
//! - Fault input over a GPIO pin
//! - Supply-voltage sensing through a resistor divider on an ADC

#![no_std]
#![deny(unsafe_code)]

pub mod bridge;
pub mod sensor;

#[cfg(test)]
pub(crate) mod mock;
