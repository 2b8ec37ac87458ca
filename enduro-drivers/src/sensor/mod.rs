//! Fault input and supply-voltage sensing

pub mod fault;
pub mod vbus;

pub use fault::GpioFaultInput;
pub use vbus::{AdcReader, DividerVbus};
