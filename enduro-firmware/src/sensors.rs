//! Board ADC adapter for the bus-voltage divider

use embassy_rp::adc::{Adc, Blocking, Channel};

use enduro_drivers::sensor::AdcReader;

/// Blocking ADC read of the VBUS divider channel
pub struct VbusAdc {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
}

impl VbusAdc {
    pub fn new(adc: Adc<'static, Blocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AdcReader for VbusAdc {
    fn read(&mut self) -> Result<u16, ()> {
        self.adc.blocking_read(&mut self.channel).map_err(|_| ())
    }
}
