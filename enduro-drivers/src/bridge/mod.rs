//! Drive backends over embedded-hal PWM channels

pub mod hbridge;
pub mod single_leg;

pub use hbridge::HBridgePwm;
pub use single_leg::SingleLegPwm;
