//! Full H-bridge backend
//!
//! Drives one bridge leg with PWM while holding the other at zero duty,
//! giving a fixed test direction. An optional enable pin gates the
//! output stage; coasting zeroes both legs so the motor freewheels
//! through the body diodes.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use enduro_core::ramp::clamp_pct;
use enduro_core::traits::DriveBackend;

/// H-bridge over two PWM channels and an optional enable pin
pub struct HBridgePwm<P1, P2, EN> {
    forward: P1,
    reverse: P2,
    enable: Option<EN>,
}

impl<P1, P2, EN> HBridgePwm<P1, P2, EN>
where
    P1: SetDutyCycle,
    P2: SetDutyCycle,
    EN: OutputPin,
{
    pub fn new(forward: P1, reverse: P2, enable: Option<EN>) -> Self {
        Self {
            forward,
            reverse,
            enable,
        }
    }

    fn zero_legs(&mut self) {
        self.forward.set_duty_cycle(0).ok();
        self.reverse.set_duty_cycle(0).ok();
    }
}

impl<P1, P2, EN> DriveBackend for HBridgePwm<P1, P2, EN>
where
    P1: SetDutyCycle,
    P2: SetDutyCycle,
    EN: OutputPin,
{
    fn label(&self) -> &'static str {
        "bridge"
    }

    fn begin(&mut self) {
        self.zero_legs();
        if let Some(enable) = self.enable.as_mut() {
            enable.set_high().ok();
        }
    }

    fn drive(&mut self, pct: f32) {
        let pct = clamp_pct(pct);
        let max = self.forward.max_duty_cycle();
        let duty = (pct * max as f32 / 100.0) as u16;
        self.forward.set_duty_cycle(duty).ok();
        self.reverse.set_duty_cycle(0).ok();
    }

    fn coast(&mut self) {
        self.zero_legs();
    }

    fn end(&mut self) {
        self.zero_legs();
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
    fn test_drive_scales_duty_to_channel_range() {
        let mut bridge: HBridgePwm<_, _, MockOutputPin> =
            HBridgePwm::new(MockPwm::new(1000), MockPwm::new(1000), None);

        bridge.drive(50.0);
        assert_eq!(bridge.forward.last_duty, 500);
        assert_eq!(bridge.reverse.last_duty, 0);

        bridge.drive(100.0);
        assert_eq!(bridge.forward.last_duty, 1000);
    }

    #[test]
    fn test_drive_clamps_out_of_range() {
        let mut bridge: HBridgePwm<_, _, MockOutputPin> =
            HBridgePwm::new(MockPwm::new(1000), MockPwm::new(1000), None);

        bridge.drive(140.0);
        assert_eq!(bridge.forward.last_duty, 1000);

        bridge.drive(-5.0);
        assert_eq!(bridge.forward.last_duty, 0);
    }

    #[test]
    fn test_begin_end_gate_enable_pin() {
        let mut bridge = HBridgePwm::new(
            MockPwm::new(1000),
            MockPwm::new(1000),
            Some(MockOutputPin::new()),
        );

        bridge.begin();
        assert!(bridge.enable.as_ref().unwrap().is_high);

        bridge.drive(75.0);
        bridge.end();
        assert!(!bridge.enable.as_ref().unwrap().is_high);
        assert_eq!(bridge.forward.last_duty, 0);
        assert_eq!(bridge.reverse.last_duty, 0);
    }

    #[test]
    fn test_coast_zeroes_both_legs() {
        let mut bridge: HBridgePwm<_, _, MockOutputPin> =
            HBridgePwm::new(MockPwm::new(1000), MockPwm::new(1000), None);

        bridge.drive(88.0);
        bridge.coast();
        assert_eq!(bridge.forward.last_duty, 0);
        assert_eq!(bridge.reverse.last_duty, 0);
    }
}
