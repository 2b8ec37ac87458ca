//! Mock embedded-hal peripherals for host tests

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType as DigitalErrorType, InputPin, OutputPin};
use embedded_hal::pwm::{ErrorType as PwmErrorType, SetDutyCycle};

/// PWM channel that remembers the last duty written
pub struct MockPwm {
    max: u16,
    pub last_duty: u16,
    pub writes: usize,
}

impl MockPwm {
    pub fn new(max: u16) -> Self {
        Self {
            max,
            last_duty: 0,
            writes: 0,
        }
    }
}

impl PwmErrorType for MockPwm {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.last_duty = duty;
        self.writes += 1;
        Ok(())
    }
}

/// Output pin that remembers its level
pub struct MockOutputPin {
    pub is_high: bool,
}

impl MockOutputPin {
    pub fn new() -> Self {
        Self { is_high: false }
    }
}

impl DigitalErrorType for MockOutputPin {
    type Error = Infallible;
}

impl OutputPin for MockOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.is_high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.is_high = true;
        Ok(())
    }
}

/// Input pin with a settable level
pub struct MockInputPin {
    pub is_high: bool,
}

impl MockInputPin {
    pub fn new(is_high: bool) -> Self {
        Self { is_high }
    }
}

impl DigitalErrorType for MockInputPin {
    type Error = Infallible;
}

impl InputPin for MockInputPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.is_high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_high)
    }
}
