//! Drive backend trait
//!
//! A backend is one concrete PWM peripheral driving the motor bridge.
//! Two backends share the same physical drive pins, so exactly one may
//! be armed at a time: `end()` of one must complete before `begin()` of
//! the other.

/// Capability set for one PWM backend
///
/// All operations are expected to take effect on the physical outputs
/// within a bounded, small number of milliseconds and must not block
/// indefinitely.
pub trait DriveBackend {
    /// Short name for diagnostics (e.g., "bridge", "single-leg")
    fn label(&self) -> &'static str;

    /// Claim the drive pins and enable the output stage
    fn begin(&mut self);

    /// Apply a duty command in the fixed test direction
    ///
    /// `pct` is a percentage of full drive authority in [0, 100].
    /// Implementations clamp out-of-range values.
    fn drive(&mut self, pct: f32);

    /// Release the bridge to high impedance (freewheel, no torque)
    fn coast(&mut self);

    /// Disable the output stage and release the drive pins
    fn end(&mut self);
}
