//! Fault and supply-voltage sensor traits

/// Errors that can occur when reading the supply voltage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SenseError {
    /// Sensor not connected or reading unavailable
    Unavailable,
    /// Reading pinned at the high ADC rail (open divider)
    OpenCircuit,
    /// Reading pinned at the low ADC rail (shorted divider)
    ShortCircuit,
    /// Reading outside the plausible range
    OutOfRange,
}

/// Digital fault / E-stop input
///
/// Polarity (active-high vs active-low) is handled by the
/// implementation. A system without a fault input simply omits the
/// sensor; see [`crate::safety::SafetyGuard::new`].
pub trait FaultInput {
    /// Read the input and report whether the fault is asserted
    ///
    /// Re-read on every call; implementations must not cache.
    fn is_active(&mut self) -> bool;
}

/// DC bus supply-voltage sensor
pub trait SupplyVoltageSensor {
    /// Read the supply voltage in volts
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read_volts(&mut self) -> Result<f32, SenseError>;
}
