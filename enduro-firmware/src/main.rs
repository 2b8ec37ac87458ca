//! Enduro - DC motor bridge stress rig firmware
//!
//! Runs an endless thermal/switching stress sequence against a DC motor
//! bridge on RP2040-based boards, alternating between two PWM drive
//! backends with safety interlocks on a fault line and the bus voltage.
//!
//! Board wiring (Pico defaults):
//! - GPIO14/15: bridge IN1/IN2 (one PWM slice, channels A/B)
//! - GPIO16:    gate driver nFAULT, open drain, pulled up
//! - GPIO26:    VBUS divider tap (ADC0)

#![no_std]
#![no_main]

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use enduro_core::ramp::RampConfig;
use enduro_core::safety::{GuardConfig, SafetyGuard};
use enduro_core::sequence::StressConfig;
use enduro_drivers::sensor::{DividerVbus, GpioFaultInput};

use crate::backend::{SharedSlice, SingleSlice, SliceBridge};
use crate::sensors::VbusAdc;

mod backend;
mod clock;
mod sensors;
mod sink;
mod tasks;

/// VBUS divider: 100k over 10k, so the pin sees VBUS / 11
const VBUS_DIVIDER_RATIO: f32 = 11.0;

static DRIVE_SLICE: StaticCell<SharedSlice> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Enduro firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Validate configuration before anything drives the bridge
    let ramp_config = RampConfig::default();
    let guard_config = GuardConfig::default();
    let stress_config = StressConfig::default();
    unwrap!(ramp_config.validate());
    unwrap!(guard_config.validate());
    unwrap!(stress_config.validate());

    // One PWM slice drives both bridge inputs; the backends hand it off
    let pwm = Pwm::new_output_ab(p.PWM_SLICE7, p.PIN_14, p.PIN_15, PwmConfig::default());
    let slice = DRIVE_SLICE.init(SharedSlice::new(pwm));
    let bridge = SliceBridge::new(slice);
    let single = SingleSlice::new(slice);
    info!("Drive backends initialized");

    // Gate driver nFAULT: open drain, active low
    let fault_pin = Input::new(p.PIN_16, Pull::Up);
    let fault = GpioFaultInput::active_low(fault_pin);

    // VBUS through the resistor divider on ADC0
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let vbus_channel = Channel::new_pin(p.PIN_26, Pull::None);
    let vbus = DividerVbus::new(
        VbusAdc::new(adc, vbus_channel),
        3300,
        4096,
        VBUS_DIVIDER_RATIO,
    );
    info!("Safety sensors initialized");

    let guard = SafetyGuard::new(Some(fault), Some(vbus), guard_config);

    unwrap!(spawner.spawn(tasks::stress_task(
        bridge,
        single,
        guard,
        stress_config,
        ramp_config,
    )));
    info!("Stress task spawned, firmware running");
}
