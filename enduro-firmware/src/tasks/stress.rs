//! Endless A/B stress task
//!
//! Owns the whole actuation stack and alternates passes between the two
//! backends forever. All timing inside a cycle is blocking through the
//! clock; the task yields to the executor between cycles.

use defmt::info;
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use enduro_core::ramp::{DutyRamp, RampConfig};
use enduro_core::safety::SafetyGuard;
use enduro_core::sequence::{Orchestrator, StressConfig};
use enduro_drivers::sensor::{DividerVbus, GpioFaultInput};

use crate::backend::{SingleSlice, SliceBridge};
use crate::clock::EmbassyClock;
use crate::sensors::VbusAdc;
use crate::sink::DefmtSink;

#[embassy_executor::task]
pub async fn stress_task(
    mut bridge: SliceBridge,
    mut single: SingleSlice,
    mut guard: SafetyGuard<GpioFaultInput<Input<'static>>, DividerVbus<VbusAdc>>,
    stress_config: StressConfig,
    ramp_config: RampConfig,
) {
    info!("stress task started");

    let orchestrator = Orchestrator::new(stress_config);
    let mut ramp_a = DutyRamp::new(ramp_config.clone());
    let mut ramp_b = DutyRamp::new(ramp_config);
    let mut clock = EmbassyClock;
    let mut sink = DefmtSink;

    let mut cycle: u32 = 0;
    loop {
        cycle += 1;
        info!("cycle {} starting", cycle);

        let report = orchestrator.run_cycle(
            &mut bridge,
            &mut ramp_a,
            &mut single,
            &mut ramp_b,
            &mut guard,
            &mut clock,
            &mut sink,
        );
        if !report.first.all_completed() || !report.second.all_completed() {
            info!("cycle {} had faulted phases", cycle);
        }

        Timer::after_millis(10).await;
    }
}
