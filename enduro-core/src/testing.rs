//! Shared test doubles
//!
//! Recording and scripted implementations of the backend, sensor, clock,
//! and sink traits. Host-only; the crate is `no_std` outside of tests.

use std::collections::VecDeque;
use std::vec::Vec;

use crate::diag::{EventSink, Notice};
use crate::safety::{GuardConfig, SafetyGuard};
use crate::traits::{Clock, DriveBackend, FaultInput, SenseError, SupplyVoltageSensor};

/// One recorded backend call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackendCall {
    Begin,
    Drive(f32),
    Coast,
    End,
}

/// Backend that records every call in order
pub struct RecordingBackend {
    label: &'static str,
    pub calls: Vec<BackendCall>,
}

impl RecordingBackend {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            calls: Vec::new(),
        }
    }

    /// Duty arguments of the recorded drive calls, in order
    pub fn drives(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                BackendCall::Drive(pct) => Some(*pct),
                _ => None,
            })
            .collect()
    }

    pub fn coast_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, BackendCall::Coast))
            .count()
    }
}

impl DriveBackend for RecordingBackend {
    fn label(&self) -> &'static str {
        self.label
    }

    fn begin(&mut self) {
        self.calls.push(BackendCall::Begin);
    }

    fn drive(&mut self, pct: f32) {
        self.calls.push(BackendCall::Drive(pct));
    }

    fn coast(&mut self) {
        self.calls.push(BackendCall::Coast);
    }

    fn end(&mut self) {
        self.calls.push(BackendCall::End);
    }
}

/// Clock whose time only advances through `sleep_ms`
pub struct FakeClock {
    now: u64,
}

impl FakeClock {
    pub fn new() -> Self {
        Self { now: 0 }
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.now += ms as u64;
    }
}

/// Fault input that replays a scripted sequence
///
/// Once the script runs out the last value repeats; an empty script
/// reads inactive.
pub struct ScriptedFault {
    script: VecDeque<bool>,
    last: bool,
}

impl ScriptedFault {
    pub fn sequence(values: &[bool]) -> Self {
        Self {
            script: values.iter().copied().collect(),
            last: false,
        }
    }
}

impl FaultInput for ScriptedFault {
    fn is_active(&mut self) -> bool {
        if let Some(value) = self.script.pop_front() {
            self.last = value;
        }
        self.last
    }
}

/// Voltage sensor that replays a scripted sequence
///
/// Once the script runs out the last reading repeats.
pub struct ScriptedVbus {
    script: VecDeque<Result<f32, SenseError>>,
    last: Result<f32, SenseError>,
}

impl ScriptedVbus {
    pub fn sequence(volts: &[f32]) -> Self {
        Self {
            script: volts.iter().map(|&v| Ok(v)).collect(),
            last: Err(SenseError::Unavailable),
        }
    }

    /// Sensor whose every read fails
    pub fn failing() -> Self {
        Self {
            script: VecDeque::new(),
            last: Err(SenseError::Unavailable),
        }
    }
}

impl SupplyVoltageSensor for ScriptedVbus {
    fn read_volts(&mut self) -> Result<f32, SenseError> {
        if let Some(value) = self.script.pop_front() {
            self.last = value;
        }
        self.last
    }
}

/// Sink that records every notice in order
pub struct RecordingSink {
    pub notices: Vec<Notice>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            notices: Vec::new(),
        }
    }
}

impl EventSink for RecordingSink {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Guard with both checks disabled
pub fn disabled_guard() -> SafetyGuard<ScriptedFault, ScriptedVbus> {
    SafetyGuard::new(None, None, GuardConfig::default())
}
