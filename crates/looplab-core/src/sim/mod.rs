//! Closed-loop scenario runner
//!
//! Drives a [`Plant`](crate::plant::Plant) and a
//! [`Controller`](crate::control::Controller) against each other for a fixed
//! number of steps: read the plant output, compute the error against the
//! setpoint, feed the error to the controller, feed the control signal to the
//! plant. The runner records every step so harnesses can print, export, or
//! stream the trace.

mod config;
mod runner;

pub use config::ScenarioConfig;
pub use runner::{run_scenario, ScenarioTrace, StepRecord};
