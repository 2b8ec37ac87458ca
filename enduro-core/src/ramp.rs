//! Slew-limited duty ramp
//!
//! All duty changes go through [`DutyRamp::ramp_to`], which clamps the
//! target, checks the safety guard before and between steps, brackets
//! large jumps with coast intervals, and walks the duty in bounded
//! steps with a fixed tick between them.

use libm::{ceilf, fabsf};

use crate::config::ConfigError;
use crate::diag::EventSink;
use crate::safety::SafetyGuard;
use crate::traits::{Clock, DriveBackend, FaultInput, SupplyVoltageSensor};

/// Clamp a duty request to [0, 100] percent
///
/// Non-finite input (NaN, infinities below zero) folds to 0.
pub fn clamp_pct(pct: f32) -> f32 {
    if !(pct > 0.0) {
        0.0
    } else if pct > 100.0 {
        100.0
    } else {
        pct
    }
}

/// Slew limiter configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RampConfig {
    /// Largest duty change applied in a single step (percent)
    pub max_step_pct: f32,
    /// Delay between successive steps (ms)
    pub slew_tick_ms: u32,
    /// Duty changes at or above this magnitude get coast-bracketed (percent)
    pub jump_threshold_pct: f32,
    /// Coast dwell before a bracketed jump (ms)
    pub coast_before_ms: u32,
    /// Coast dwell after a bracketed jump (ms)
    pub coast_after_ms: u32,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            max_step_pct: 3.0,
            slew_tick_ms: 18,
            jump_threshold_pct: 12.0,
            coast_before_ms: 90,
            coast_after_ms: 60,
        }
    }
}

impl RampConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_step_pct > 0.0) || !self.max_step_pct.is_finite() {
            return Err(ConfigError::SlewStepOutOfRange);
        }
        if !(self.jump_threshold_pct > 0.0) || !self.jump_threshold_pct.is_finite() {
            return Err(ConfigError::JumpThresholdOutOfRange);
        }
        Ok(())
    }
}

/// How a single ramp request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampOutcome {
    /// Target reached after `steps` drive calls
    Completed { steps: u32 },
    /// Fault input asserted; the backend was coasted and the ramp stopped
    FaultAbort,
    /// Overvoltage trip did not clear; the drive is coasting and the
    /// tracked duty reset to zero
    OvervoltageAbort,
}

/// Duty slew limiter
///
/// Tracks the last commanded duty so consecutive requests slew from
/// where the previous one left off.
pub struct DutyRamp {
    config: RampConfig,
    last_pct: f32,
}

impl DutyRamp {
    /// Create a ramp starting from 0 % duty
    pub fn new(config: RampConfig) -> Self {
        Self {
            config,
            last_pct: 0.0,
        }
    }

    /// Last duty handed to the backend, percent
    pub fn last_duty(&self) -> f32 {
        self.last_pct
    }

    pub fn config(&self) -> &RampConfig {
        &self.config
    }

    /// Slew the backend from the tracked duty to `target_pct`
    ///
    /// The fault input and overvoltage guard are consulted on entry and
    /// again between every step. A fault coasts the backend and leaves
    /// the tracked duty wherever the ramp had advanced it. An
    /// overvoltage abort resets the tracked duty to zero because the
    /// guard already coasted the drive, so the next request re-ramps
    /// from standstill.
    pub fn ramp_to<B, F, V, C, S>(
        &mut self,
        backend: &mut B,
        guard: &mut SafetyGuard<F, V>,
        clock: &mut C,
        sink: &mut S,
        target_pct: f32,
    ) -> RampOutcome
    where
        B: DriveBackend,
        F: FaultInput,
        V: SupplyVoltageSensor,
        C: Clock,
        S: EventSink,
    {
        let label = backend.label();
        let target = clamp_pct(target_pct);

        if guard.fault_active() {
            backend.coast();
            return RampOutcome::FaultAbort;
        }
        if guard
            .check_overvoltage(label, clock, sink, || backend.coast())
            .is_tripped()
        {
            self.last_pct = 0.0;
            return RampOutcome::OvervoltageAbort;
        }

        let delta = target - self.last_pct;
        let jump = fabsf(delta) >= self.config.jump_threshold_pct;
        if jump {
            backend.coast();
            clock.sleep_ms(self.config.coast_before_ms);
        }

        let steps = (ceilf(fabsf(delta) / self.config.max_step_pct) as u32).max(1);
        let step_size = delta / steps as f32;

        for _ in 0..steps {
            self.last_pct += step_size;

            if guard.fault_active() {
                backend.coast();
                return RampOutcome::FaultAbort;
            }
            if guard
                .check_overvoltage(label, clock, sink, || backend.coast())
                .is_tripped()
            {
                self.last_pct = 0.0;
                return RampOutcome::OvervoltageAbort;
            }

            backend.drive(self.last_pct);
            clock.sleep_ms(self.config.slew_tick_ms);
        }

        // Equal-sized f32 steps accumulate error; pin the tracked duty
        // to the clamped target once the walk finishes.
        self.last_pct = target;

        if jump {
            backend.coast();
            clock.sleep_ms(self.config.coast_after_ms);
        }

        RampOutcome::Completed { steps }
    }
}
