//! Stress-test phase sequencing
//!
//! A pass is four phases run in fixed order, each slewing through the
//! duty ramp and ending with the bridge coasted: a warmup hold, an
//! alternating step-load block, an on/coast burst block, and a long
//! soak hold. The orchestrator alternates two backends with a cooldown
//! between passes.

pub mod orchestrator;
pub mod runner;

pub use orchestrator::{CycleReport, Orchestrator};
pub use runner::{PassReport, PhaseResult, PhaseRunner};

use crate::config::ConfigError;

/// Number of phases in one pass
pub const PHASE_COUNT: usize = 4;

/// The four stress phases, in run order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Moderate steady duty to bring the bridge up to temperature
    Warmup,
    /// Alternate between a low and a high duty on a fixed dwell
    StepLoad,
    /// Repeated high-duty bursts separated by coast windows
    Bursts,
    /// Long steady hold at an elevated duty
    Soak,
}

impl Phase {
    /// Run order of one pass
    pub const ALL: [Phase; PHASE_COUNT] = [Phase::Warmup, Phase::StepLoad, Phase::Bursts, Phase::Soak];

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Warmup => "warmup",
            Phase::StepLoad => "step-load",
            Phase::Bursts => "bursts",
            Phase::Soak => "soak",
        }
    }
}

/// How a phase ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseOutcome {
    /// Ran for its full duration
    Completed,
    /// Cut short by the fault input
    FaultAbort,
}

/// Timing and duty targets for one full pass
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StressConfig {
    /// Warmup hold length (ms)
    pub warmup_ms: u32,
    /// Warmup duty (percent)
    pub warmup_duty: f32,
    /// Re-assert cadence during the warmup hold (ms)
    pub warmup_tick_ms: u32,

    /// Step-load block length (ms)
    pub step_block_ms: u32,
    /// Dwell at each step level (ms)
    pub step_hold_ms: u32,
    /// Low step duty (percent)
    pub step_low_duty: f32,
    /// High step duty (percent)
    pub step_high_duty: f32,

    /// Burst block length (ms)
    pub burst_block_ms: u32,
    /// Driven window inside each burst (ms)
    pub burst_on_ms: u32,
    /// Coast window before each burst (ms)
    pub burst_coast_ms: u32,
    /// Burst duty (percent)
    pub burst_duty: f32,

    /// Soak hold length (ms)
    pub soak_ms: u32,
    /// Soak duty (percent)
    pub soak_duty: f32,
    /// Re-assert cadence during the soak hold (ms)
    pub soak_tick_ms: u32,

    /// Coast gap after every phase (ms)
    pub phase_gap_ms: u32,
    /// Cooldown between passes (ms)
    pub cooldown_ms: u32,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            warmup_ms: 30_000,
            warmup_duty: 42.0,
            warmup_tick_ms: 10,
            step_block_ms: 240_000,
            step_hold_ms: 500,
            step_low_duty: 35.0,
            step_high_duty: 75.0,
            burst_block_ms: 240_000,
            burst_on_ms: 320,
            burst_coast_ms: 120,
            burst_duty: 88.0,
            soak_ms: 600_000,
            soak_duty: 68.0,
            soak_tick_ms: 20,
            phase_gap_ms: 1_200,
            cooldown_ms: 300_000,
        }
    }
}

impl StressConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            self.warmup_ms,
            self.step_block_ms,
            self.step_hold_ms,
            self.burst_block_ms,
            self.burst_on_ms,
            self.soak_ms,
        ];
        if durations.iter().any(|&ms| ms == 0) {
            return Err(ConfigError::ZeroDuration);
        }
        if self.warmup_tick_ms == 0 || self.soak_tick_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        let duties = [
            self.warmup_duty,
            self.step_low_duty,
            self.step_high_duty,
            self.burst_duty,
            self.soak_duty,
        ];
        if duties
            .iter()
            .any(|&pct| !pct.is_finite() || !(0.0..=100.0).contains(&pct))
        {
            return Err(ConfigError::DutyOutOfRange);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order_fixed() {
        assert_eq!(
            Phase::ALL,
            [Phase::Warmup, Phase::StepLoad, Phase::Bursts, Phase::Soak]
        );
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(StressConfig::default().validate(), Ok(()));

        let zero = StressConfig {
            warmup_ms: 0,
            ..StressConfig::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroDuration));

        let zero_tick = StressConfig {
            soak_tick_ms: 0,
            ..StressConfig::default()
        };
        assert_eq!(zero_tick.validate(), Err(ConfigError::ZeroPollInterval));

        let hot = StressConfig {
            burst_duty: 130.0,
            ..StressConfig::default()
        };
        assert_eq!(hot.validate(), Err(ConfigError::DutyOutOfRange));
    }
}
