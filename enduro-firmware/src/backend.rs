//! PWM drive backends over one RP2040 slice
//!
//! Both backends command the same bridge through the same PWM slice and
//! pin pair; the orchestrator guarantees only one is armed at a time.
//! They differ in switching profile: the bridge backend runs the slice
//! edge-aligned with a fine compare range, the single-leg backend runs
//! phase-correct with a coarse range and never touches channel B.

use core::cell::RefCell;

use embassy_rp::pwm::{Config as PwmConfig, Pwm};

use enduro_core::ramp::clamp_pct;
use enduro_core::traits::DriveBackend;

fn compare_for(pct: f32, top: u16) -> u16 {
    (clamp_pct(pct) * top as f32 / 100.0) as u16
}

/// The one PWM slice both backends hand off between passes
pub struct SharedSlice {
    pwm: RefCell<Pwm<'static>>,
}

impl SharedSlice {
    pub fn new(pwm: Pwm<'static>) -> Self {
        Self {
            pwm: RefCell::new(pwm),
        }
    }

    fn apply(&self, config: &PwmConfig) {
        self.pwm.borrow_mut().set_config(config);
    }
}

/// Full-bridge backend: channel A carries the duty, channel B held at zero
pub struct SliceBridge {
    slice: &'static SharedSlice,
    config: PwmConfig,
}

impl SliceBridge {
    pub fn new(slice: &'static SharedSlice) -> Self {
        let mut config = PwmConfig::default();
        config.top = 1000;
        config.compare_a = 0;
        config.compare_b = 0;
        Self { slice, config }
    }
}

impl DriveBackend for SliceBridge {
    fn label(&self) -> &'static str {
        "bridge"
    }

    fn begin(&mut self) {
        self.config.compare_a = 0;
        self.config.compare_b = 0;
        self.slice.apply(&self.config);
    }

    fn drive(&mut self, pct: f32) {
        self.config.compare_a = compare_for(pct, self.config.top);
        self.config.compare_b = 0;
        self.slice.apply(&self.config);
    }

    fn coast(&mut self) {
        self.config.compare_a = 0;
        self.config.compare_b = 0;
        self.slice.apply(&self.config);
    }

    fn end(&mut self) {
        self.coast();
    }
}

/// Single-leg backend: phase-correct PWM on channel A only
pub struct SingleSlice {
    slice: &'static SharedSlice,
    config: PwmConfig,
}

impl SingleSlice {
    pub fn new(slice: &'static SharedSlice) -> Self {
        let mut config = PwmConfig::default();
        config.top = 255;
        config.phase_correct = true;
        config.compare_a = 0;
        config.compare_b = 0;
        Self { slice, config }
    }
}

impl DriveBackend for SingleSlice {
    fn label(&self) -> &'static str {
        "single-leg"
    }

    fn begin(&mut self) {
        self.config.compare_a = 0;
        self.slice.apply(&self.config);
    }

    fn drive(&mut self, pct: f32) {
        self.config.compare_a = compare_for(pct, self.config.top);
        self.slice.apply(&self.config);
    }

    fn coast(&mut self) {
        self.config.compare_a = 0;
        self.slice.apply(&self.config);
    }

    fn end(&mut self) {
        self.coast();
    }
}
