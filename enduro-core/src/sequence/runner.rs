//! Phase runner
//!
//! Runs the four phases of a pass against one armed backend. Every
//! duty change goes through the ramp, every wait through the clock, and
//! every phase ends with the bridge coasted followed by the configured
//! gap. A fault cuts the running phase short; the pass then moves on to
//! the next phase, which re-checks the fault on its first ramp.

use heapless::Vec;

use crate::diag::{EventSink, Notice};
use crate::ramp::{DutyRamp, RampOutcome};
use crate::safety::SafetyGuard;
use crate::traits::{Clock, DriveBackend, FaultInput, SupplyVoltageSensor};

use super::{Phase, PhaseOutcome, StressConfig, PHASE_COUNT};

/// Result of one phase within a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseResult {
    pub phase: Phase,
    pub outcome: PhaseOutcome,
}

/// Per-phase outcomes for one completed pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PassReport {
    pub results: Vec<PhaseResult, PHASE_COUNT>,
}

impl PassReport {
    /// True when every phase ran its full duration
    pub fn all_completed(&self) -> bool {
        self.results
            .iter()
            .all(|r| r.outcome == PhaseOutcome::Completed)
    }

    /// First phase the fault input cut short, if any
    pub fn first_fault(&self) -> Option<Phase> {
        self.results
            .iter()
            .find(|r| r.outcome == PhaseOutcome::FaultAbort)
            .map(|r| r.phase)
    }
}

/// Runs the phases of [`Phase::ALL`] in order against one backend
pub struct PhaseRunner {
    config: StressConfig,
}

impl PhaseRunner {
    pub fn new(config: StressConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StressConfig {
        &self.config
    }

    /// Run all four phases on an already-armed backend
    pub fn run_pass<B, F, V, C, S>(
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
        sink.notify(Notice::PassStart {
            backend: backend.label(),
        });
        let mut report = PassReport::default();
        for phase in Phase::ALL {
            let outcome = self.run_phase(phase, backend, ramp, guard, clock, sink);
            if report.results.push(PhaseResult { phase, outcome }).is_err() {
                break;
            }
        }
        sink.notify(Notice::PassEnd {
            backend: backend.label(),
        });
        report
    }

    /// Run one phase, then coast and wait out the phase gap
    pub fn run_phase<B, F, V, C, S>(
        &self,
        phase: Phase,
        backend: &mut B,
        ramp: &mut DutyRamp,
        guard: &mut SafetyGuard<F, V>,
        clock: &mut C,
        sink: &mut S,
    ) -> PhaseOutcome
    where
        B: DriveBackend,
        F: FaultInput,
        V: SupplyVoltageSensor,
        C: Clock,
        S: EventSink,
    {
        sink.notify(Notice::PhaseStart {
            backend: backend.label(),
            phase,
            duty_pct: self.phase_duty(phase),
            duration_ms: self.phase_duration(phase),
        });

        let outcome = match phase {
            Phase::Warmup => self.hold(
                self.config.warmup_ms,
                self.config.warmup_duty,
                self.config.warmup_tick_ms,
                backend,
                ramp,
                guard,
                clock,
                sink,
            ),
            Phase::StepLoad => self.step_load(backend, ramp, guard, clock, sink),
            Phase::Bursts => self.bursts(backend, ramp, guard, clock, sink),
            Phase::Soak => self.hold(
                self.config.soak_ms,
                self.config.soak_duty,
                self.config.soak_tick_ms,
                backend,
                ramp,
                guard,
                clock,
                sink,
            ),
        };

        backend.coast();
        clock.sleep_ms(self.config.phase_gap_ms);
        sink.notify(Notice::PhaseEnd {
            backend: backend.label(),
            phase,
            outcome,
        });
        outcome
    }

    fn phase_duty(&self, phase: Phase) -> f32 {
        match phase {
            Phase::Warmup => self.config.warmup_duty,
            Phase::StepLoad => self.config.step_high_duty,
            Phase::Bursts => self.config.burst_duty,
            Phase::Soak => self.config.soak_duty,
        }
    }

    fn phase_duration(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Warmup => self.config.warmup_ms,
            Phase::StepLoad => self.config.step_block_ms,
            Phase::Bursts => self.config.burst_block_ms,
            Phase::Soak => self.config.soak_ms,
        }
    }

    /// Steady hold: keep re-asserting one duty until the window closes
    ///
    /// An overvoltage abort resets the ramp to zero, so the next tick
    /// re-ramps back up to the hold duty once the supply clears.
    #[allow(clippy::too_many_arguments)]
    fn hold<B, F, V, C, S>(
        &self,
        window_ms: u32,
        duty: f32,
        tick_ms: u32,
        backend: &mut B,
        ramp: &mut DutyRamp,
        guard: &mut SafetyGuard<F, V>,
        clock: &mut C,
        sink: &mut S,
    ) -> PhaseOutcome
    where
        B: DriveBackend,
        F: FaultInput,
        V: SupplyVoltageSensor,
        C: Clock,
        S: EventSink,
    {
        let deadline = clock.deadline_ms(window_ms);
        while clock.now_ms() < deadline {
            match ramp.ramp_to(backend, guard, clock, sink, duty) {
                RampOutcome::FaultAbort => return PhaseOutcome::FaultAbort,
                RampOutcome::Completed { .. } | RampOutcome::OvervoltageAbort => {}
            }
            clock.sleep_ms(tick_ms);
        }
        PhaseOutcome::Completed
    }

    /// Alternate low and high duty, dwelling at each level
    fn step_load<B, F, V, C, S>(
        &self,
        backend: &mut B,
        ramp: &mut DutyRamp,
        guard: &mut SafetyGuard<F, V>,
        clock: &mut C,
        sink: &mut S,
    ) -> PhaseOutcome
    where
        B: DriveBackend,
        F: FaultInput,
        V: SupplyVoltageSensor,
        C: Clock,
        S: EventSink,
    {
        let deadline = clock.deadline_ms(self.config.step_block_ms);
        let mut high = false;
        while clock.now_ms() < deadline {
            let target = if high {
                self.config.step_high_duty
            } else {
                self.config.step_low_duty
            };
            match ramp.ramp_to(backend, guard, clock, sink, target) {
                RampOutcome::FaultAbort => return PhaseOutcome::FaultAbort,
                RampOutcome::Completed { .. } | RampOutcome::OvervoltageAbort => {}
            }
            clock.sleep_ms(self.config.step_hold_ms);
            high = !high;
        }
        PhaseOutcome::Completed
    }

    /// High-duty bursts separated by coast windows
    fn bursts<B, F, V, C, S>(
        &self,
        backend: &mut B,
        ramp: &mut DutyRamp,
        guard: &mut SafetyGuard<F, V>,
        clock: &mut C,
        sink: &mut S,
    ) -> PhaseOutcome
    where
        B: DriveBackend,
        F: FaultInput,
        V: SupplyVoltageSensor,
        C: Clock,
        S: EventSink,
    {
        let deadline = clock.deadline_ms(self.config.burst_block_ms);
        while clock.now_ms() < deadline {
            // let winding current decay before the next hit
            backend.coast();
            clock.sleep_ms(self.config.burst_coast_ms);
            match ramp.ramp_to(backend, guard, clock, sink, self.config.burst_duty) {
                RampOutcome::FaultAbort => return PhaseOutcome::FaultAbort,
                RampOutcome::Completed { .. } | RampOutcome::OvervoltageAbort => {}
            }
            clock.sleep_ms(self.config.burst_on_ms);
        }
        PhaseOutcome::Completed
    }
}
