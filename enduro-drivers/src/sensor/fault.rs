//! GPIO fault input
//!
//! Gate drivers typically pull an open-drain nFAULT line low, so the
//! default constructor is active-low with a pull-up expected on the pin.

use embedded_hal::digital::InputPin;

use enduro_core::traits::FaultInput;

/// Fault / E-stop input over a digital pin
pub struct GpioFaultInput<P> {
    pin: P,
    active_low: bool,
}

impl<P: InputPin> GpioFaultInput<P> {
    /// Fault asserted when the pin reads low (open-drain nFAULT)
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Fault asserted when the pin reads high
    pub fn active_high(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }
}

impl<P: InputPin> FaultInput for GpioFaultInput<P> {
    fn is_active(&mut self) -> bool {
        // A pin read error is treated as no fault rather than latching
        // the rig into a permanent abort.
        if self.active_low {
            self.pin.is_low().unwrap_or(false)
        } else {
            self.pin.is_high().unwrap_or(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockInputPin;

    #[test]
    fn test_active_low_polarity() {
        let mut fault = GpioFaultInput::active_low(MockInputPin::new(false));
        assert!(fault.is_active());

        let mut fault = GpioFaultInput::active_low(MockInputPin::new(true));
        assert!(!fault.is_active());
    }

    #[test]
    fn test_active_high_polarity() {
        let mut fault = GpioFaultInput::active_high(MockInputPin::new(true));
        assert!(fault.is_active());

        let mut fault = GpioFaultInput::active_high(MockInputPin::new(false));
        assert!(!fault.is_active());
    }
}
