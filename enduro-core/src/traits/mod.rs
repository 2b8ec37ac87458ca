//! Hardware abstraction traits
//!
//! These traits define the interface between the test logic and
//! hardware-specific implementations.

pub mod backend;
pub mod sensors;
pub mod time;

pub use backend::DriveBackend;
pub use sensors::{FaultInput, SenseError, SupplyVoltageSensor};
pub use time::Clock;
