//! Fault and overvoltage guard
//!
//! The guard owns the (optional) fault input and supply-voltage sensor
//! and produces a "must coast" verdict for the ramp. Fault state is
//! recomputed fresh on every check, never cached. The overvoltage trip
//! uses two thresholds: it fires above `trip_volts` and re-arms only
//! once a reading falls below the strictly lower `clear_volts`, so the
//! band between them never re-arms the drive.

use crate::config::ConfigError;
use crate::diag::{EventSink, Notice};
use crate::traits::{Clock, FaultInput, SupplyVoltageSensor};

/// Overvoltage guard configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuardConfig {
    /// Trip threshold in volts
    pub trip_volts: f32,
    /// Re-arm threshold in volts, strictly below `trip_volts`
    pub clear_volts: f32,
    /// Poll cadence during the wait-for-clear loop (ms)
    pub poll_ms: u32,
    /// Upper bound on the wait-for-clear loop (ms)
    pub wait_ms: u32,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            trip_volts: 28.0,
            clear_volts: 26.5,
            poll_ms: 10,
            wait_ms: 3000,
        }
    }
}

impl GuardConfig {
    /// Check threshold ordering and poll cadence
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.clear_volts < self.trip_volts) {
            return Err(ConfigError::InvertedVoltageThresholds);
        }
        if self.poll_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}

/// Result of one overvoltage check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OvervoltageVerdict {
    /// No trip in effect; driving may proceed
    Clear,
    /// Trip fired and the supply fell below the clear threshold within
    /// the bounded wait
    TrippedCleared,
    /// Trip in effect and the supply has not yet cleared; the guard
    /// stays latched and keeps coasting on subsequent checks
    TrippedPending,
}

impl OvervoltageVerdict {
    /// True for either tripped variant
    pub fn is_tripped(&self) -> bool {
        !matches!(self, OvervoltageVerdict::Clear)
    }
}

/// Fault and overvoltage interlock
///
/// `None` for either sensor disables that check (the sentinel-pin case
/// of the hardware config): a missing fault input reads inactive, a
/// missing voltage sensor never trips.
pub struct SafetyGuard<F, V> {
    fault: Option<F>,
    vbus: Option<V>,
    config: GuardConfig,
    /// Trip latched across calls until a reading clears it
    tripped: bool,
}

impl<F: FaultInput, V: SupplyVoltageSensor> SafetyGuard<F, V> {
    /// Create a guard; `None` disables the corresponding check
    pub fn new(fault: Option<F>, vbus: Option<V>, config: GuardConfig) -> Self {
        Self {
            fault,
            vbus,
            config,
            tripped: false,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// True while an overvoltage trip is latched
    pub fn is_latched(&self) -> bool {
        self.tripped
    }

    /// Read the fault input; false when the input is disabled
    pub fn fault_active(&mut self) -> bool {
        match self.fault.as_mut() {
            Some(input) => input.is_active(),
            None => false,
        }
    }

    /// Check the supply voltage, coasting through `coast` on a trip
    ///
    /// On a fresh trip this coasts immediately, then polls every
    /// `poll_ms` for up to `wait_ms` or until a reading drops below the
    /// clear threshold. A wait that expires leaves the guard latched;
    /// later checks report [`OvervoltageVerdict::TrippedPending`] (and
    /// keep coasting) until a reading clears. Sensor read errors never
    /// trip and never clear.
    pub fn check_overvoltage<C, S>(
        &mut self,
        label: &'static str,
        clock: &mut C,
        sink: &mut S,
        mut coast: impl FnMut(),
    ) -> OvervoltageVerdict
    where
        C: Clock,
        S: EventSink,
    {
        let vbus = match self.vbus.as_mut() {
            Some(vbus) => vbus,
            None => return OvervoltageVerdict::Clear,
        };

        if self.tripped {
            match vbus.read_volts() {
                Ok(volts) if volts < self.config.clear_volts => {
                    self.tripped = false;
                    sink.notify(Notice::OvervoltageClear {
                        backend: label,
                        volts,
                    });
                    OvervoltageVerdict::Clear
                }
                _ => {
                    coast();
                    sink.notify(Notice::OvervoltageHold { backend: label });
                    OvervoltageVerdict::TrippedPending
                }
            }
        } else {
            let volts = match vbus.read_volts() {
                Ok(volts) => volts,
                Err(_) => return OvervoltageVerdict::Clear,
            };
            if volts <= self.config.trip_volts {
                return OvervoltageVerdict::Clear;
            }

            sink.notify(Notice::OvervoltageTrip {
                backend: label,
                volts,
            });
            coast();

            let deadline = clock.deadline_ms(self.config.wait_ms);
            loop {
                if let Ok(volts) = vbus.read_volts() {
                    if volts < self.config.clear_volts {
                        sink.notify(Notice::OvervoltageClear {
                            backend: label,
                            volts,
                        });
                        return OvervoltageVerdict::TrippedCleared;
                    }
                }
                if clock.now_ms() >= deadline {
                    break;
                }
                clock.sleep_ms(self.config.poll_ms);
            }

            // Wait expired without clearing; latch and let the caller
            // re-evaluate on its next check.
            self.tripped = true;
            OvervoltageVerdict::TrippedPending
        }
    }
}
