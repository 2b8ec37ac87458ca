//! Firmware tasks

pub mod stress;

pub use stress::stress_task;
