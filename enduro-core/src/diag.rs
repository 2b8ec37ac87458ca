//! Diagnostic event sink
//!
//! The original firmware announced phase transitions and trip/clear
//! events over serial behind compile-time debug macros. Here the core
//! reports through an injected capability instead; the firmware plugs in
//! a defmt-backed sink, tests record, and [`NullSink`] discards.
//! Notices are informational only and never gate correctness.

use crate::sequence::{Phase, PhaseOutcome};

/// Diagnostic notice emitted by the guard, sequencer, and orchestrator
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notice {
    /// A full four-phase pass is starting on a backend
    PassStart { backend: &'static str },
    /// A full four-phase pass finished on a backend
    PassEnd { backend: &'static str },
    /// A phase is starting; `duty_pct` is its (high) target duty
    PhaseStart {
        backend: &'static str,
        phase: Phase,
        duty_pct: f32,
        duration_ms: u32,
    },
    /// A phase finished, normally or via fault early-exit
    PhaseEnd {
        backend: &'static str,
        phase: Phase,
        outcome: PhaseOutcome,
    },
    /// Supply voltage exceeded the trip threshold; outputs coasted
    OvervoltageTrip { backend: &'static str, volts: f32 },
    /// Supply voltage fell below the clear threshold
    OvervoltageClear { backend: &'static str, volts: f32 },
    /// Trip still latched; supply has not yet fallen below the clear threshold
    OvervoltageHold { backend: &'static str },
    /// Inter-pass cooldown is starting
    Cooldown { ms: u32 },
}

/// Receiver for diagnostic notices
pub trait EventSink {
    /// Deliver one notice
    fn notify(&mut self, notice: Notice);
}

/// Sink that discards every notice
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _notice: Notice) {}
}
