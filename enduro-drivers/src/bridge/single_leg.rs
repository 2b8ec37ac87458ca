//! Single-leg backend
//!
//! Alternate drive path for the same bridge: one leg carries the PWM,
//! the other is pinned low through a plain GPIO. Exercises asymmetric
//! switching stress on one half of the bridge.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use enduro_core::ramp::clamp_pct;
use enduro_core::traits::DriveBackend;

/// One PWM leg plus a GPIO-held low leg and an optional enable pin
pub struct SingleLegPwm<P, L, EN> {
    driven: P,
    low_leg: L,
    enable: Option<EN>,
}

impl<P, L, EN> SingleLegPwm<P, L, EN>
where
    P: SetDutyCycle,
    L: OutputPin,
    EN: OutputPin,
{
    pub fn new(driven: P, low_leg: L, enable: Option<EN>) -> Self {
        Self {
            driven,
            low_leg,
            enable,
        }
    }
}

impl<P, L, EN> DriveBackend for SingleLegPwm<P, L, EN>
where
    P: SetDutyCycle,
    L: OutputPin,
    EN: OutputPin,
{
    fn label(&self) -> &'static str {
        "single-leg"
    }

    fn begin(&mut self) {
        self.driven.set_duty_cycle(0).ok();
        self.low_leg.set_low().ok();
        if let Some(enable) = self.enable.as_mut() {
            enable.set_high().ok();
        }
    }

    fn drive(&mut self, pct: f32) {
        let pct = clamp_pct(pct);
        let max = self.driven.max_duty_cycle();
        let duty = (pct * max as f32 / 100.0) as u16;
        self.driven.set_duty_cycle(duty).ok();
    }

    fn coast(&mut self) {
        self.driven.set_duty_cycle(0).ok();
    }

    fn end(&mut self) {
        self.driven.set_duty_cycle(0).ok();
        if let Some(enable) = self.enable.as_mut() {
            enable.set_low().ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockOutputPin, MockPwm};

    #[test]
    fn test_low_leg_held_low_on_begin() {
        let mut backend: SingleLegPwm<_, _, MockOutputPin> =
            SingleLegPwm::new(MockPwm::new(255), MockOutputPin::new(), None);

        backend.begin();
        assert!(!backend.low_leg.is_high);
        assert_eq!(backend.driven.last_duty, 0);
    }

    #[test]
    fn test_drive_scales_to_channel_range() {
        let mut backend: SingleLegPwm<_, _, MockOutputPin> =
            SingleLegPwm::new(MockPwm::new(255), MockOutputPin::new(), None);

        backend.drive(42.0);
        assert_eq!(backend.driven.last_duty, 107);

        backend.coast();
        assert_eq!(backend.driven.last_duty, 0);
    }
}
