//! Backend alternation
//!
//! Runs one full pass on each of two backends in turn, with a cooldown
//! after each pass. The two backends share physical drive pins, so each
//! leg brackets its pass with `begin()`/`end()` and the next leg only
//! arms after the previous one has released.

use crate::diag::{EventSink, Notice};
use crate::ramp::DutyRamp;
use crate::safety::SafetyGuard;
use crate::traits::{Clock, DriveBackend, FaultInput, SupplyVoltageSensor};

use super::{PassReport, PhaseRunner, StressConfig};

/// Outcome of one A/B cycle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Pass on the first backend
    pub first: PassReport,
    /// Pass on the second backend
    pub second: PassReport,
}

/// Alternates passes between two drive backends
pub struct Orchestrator {
    runner: PhaseRunner,
    cooldown_ms: u32,
}

impl Orchestrator {
    pub fn new(config: StressConfig) -> Self {
        let cooldown_ms = config.cooldown_ms;
        Self {
            runner: PhaseRunner::new(config),
            cooldown_ms,
        }
    }

    pub fn runner(&self) -> &PhaseRunner {
        &self.runner
    }

    /// Run one pass on each backend, cooling down after each
    ///
    /// Each backend keeps its own ramp so its duty history survives
    /// across cycles.
    #[allow(clippy::too_many_arguments)]
    pub fn run_cycle<A, B, F, V, C, S>(
        &self,
        first: &mut A,
        first_ramp: &mut DutyRamp,
        second: &mut B,
        second_ramp: &mut DutyRamp,
        guard: &mut SafetyGuard<F, V>,
        clock: &mut C,
        sink: &mut S,
    ) -> CycleReport
    where
        A: DriveBackend,
        B: DriveBackend,
        F: FaultInput,
        V: SupplyVoltageSensor,
        C: Clock,
        S: EventSink,
    {
        let first_report = self.run_leg(first, first_ramp, guard, clock, sink);
        let second_report = self.run_leg(second, second_ramp, guard, clock, sink);
        CycleReport {
            first: first_report,
            second: second_report,
        }
    }

    fn run_leg<B, F, V, C, S>(
        &self,
        backend: &mut B,
        ramp: &mut DutyRamp,
        guard: &mut SafetyGuard<F, V>,
        clock: &mut C,
        sink: &mut S,
    ) -> PassReport
    where
        B: DriveBackend,
        F: FaultInput,
        V: SupplyVoltageSensor,
        C: Clock,
        S: EventSink,
    {
        backend.begin();
        let report = self.runner.run_pass(backend, ramp, guard, clock, sink);
        // release the shared drive pins before the other backend arms
        backend.end();

        sink.notify(Notice::Cooldown {
            ms: self.cooldown_ms,
        });
        clock.sleep_ms(self.cooldown_ms);
        report
    }
}
