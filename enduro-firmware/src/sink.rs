//! Diagnostic notices over defmt

use defmt::{info, warn};

use enduro_core::diag::{EventSink, Notice};

/// Sink that logs every notice through defmt
pub struct DefmtSink;

impl EventSink for DefmtSink {
    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::PassStart { backend } => info!("[{}] pass start", backend),
            Notice::PassEnd { backend } => info!("[{}] pass end", backend),
            Notice::PhaseStart {
                backend,
                phase,
                duty_pct,
                duration_ms,
            } => info!(
                "[{}] phase {} start: {}% for {} ms",
                backend,
                phase.label(),
                duty_pct,
                duration_ms
            ),
            Notice::PhaseEnd {
                backend,
                phase,
                outcome,
            } => info!("[{}] phase {} end: {}", backend, phase.label(), outcome),
            Notice::OvervoltageTrip { backend, volts } => {
                warn!("[{}] overvoltage trip at {} V, coasting", backend, volts)
            }
            Notice::OvervoltageClear { backend, volts } => {
                info!("[{}] overvoltage cleared at {} V", backend, volts)
            }
            Notice::OvervoltageHold { backend } => {
                warn!("[{}] overvoltage still latched, holding coast", backend)
            }
            Notice::Cooldown { ms } => info!("cooldown for {} ms", ms),
        }
    }
}
