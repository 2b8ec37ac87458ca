//! Supply-voltage sensing through a resistor divider
//!
//! Circuit: VBUS -- R_top -- ADC_PIN -- R_bottom -- GND
//!
//! The divider scales the bus down into the ADC range; readings pinned
//! at either rail are reported as wiring faults rather than voltages.

use enduro_core::traits::{SenseError, SupplyVoltageSensor};

/// Margin from either ADC rail treated as a stuck reading
const RAIL_MARGIN: u16 = 10;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read a raw conversion (0..=max for the configured resolution)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Bus-voltage sensor over a resistor divider and an ADC channel
pub struct DividerVbus<ADC> {
    adc: ADC,
    /// ADC reference voltage in mV (typically 3300)
    vref_mv: u16,
    /// Full-scale ADC count (4096 for 12-bit)
    adc_max: u16,
    /// Divider attenuation, (R_top + R_bottom) / R_bottom
    divider_ratio: f32,
}

impl<ADC> DividerVbus<ADC> {
    pub fn new(adc: ADC, vref_mv: u16, adc_max: u16, divider_ratio: f32) -> Self {
        Self {
            adc,
            vref_mv,
            adc_max,
            divider_ratio,
        }
    }

    /// Convert a raw count into bus volts, rejecting rail-stuck readings
    pub fn counts_to_volts(&self, counts: u16) -> Result<f32, SenseError> {
        if counts >= self.adc_max - RAIL_MARGIN {
            return Err(SenseError::OpenCircuit);
        }
        if counts < RAIL_MARGIN {
            return Err(SenseError::ShortCircuit);
        }

        let pin_volts = counts as f32 / self.adc_max as f32 * self.vref_mv as f32 / 1000.0;
        Ok(pin_volts * self.divider_ratio)
    }
}

impl<ADC: AdcReader> SupplyVoltageSensor for DividerVbus<ADC> {
    fn read_volts(&mut self) -> Result<f32, SenseError> {
        let counts = self.adc.read().map_err(|_| SenseError::Unavailable)?;
        self.counts_to_volts(counts)
    }
}
