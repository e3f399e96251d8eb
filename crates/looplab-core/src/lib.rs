//! looplab-core: a small closed-loop control lab
//!
//! A teaching library built around one closed loop: a PID controller with
//! anti-windup and output clamping, a set of toy plant models to exercise it
//! against, and a scenario runner that drives the two together step by step.
//! A handful of self-contained text-conversion exercises round out the crate.
//!
//! # Modules
//!
//! - [`control`] - PID controller and the controller seam
//! - [`plant`] - Euler-integrated toy plant models
//! - [`sim`] - Closed-loop scenario runner and step traces
//! - [`math`] - Small numeric helpers
//! - [`text`] - FizzBuzz, Roman numerals, and an owned text buffer
//!
//! # Example
//!
//! ```
//! use looplab_core::control::{Controller, Pid, PidConfig};
//! use looplab_core::plant::{Plant, PositionPlant};
//!
//! let mut pid = Pid::new(PidConfig::new(1.0, 0.1, 0.05));
//! let mut plant = PositionPlant::default();
//!
//! let setpoint = 1.0;
//! for _ in 0..100 {
//!     let error = setpoint - plant.output();
//!     let control = pid.control(error);
//!     plant.update(control);
//! }
//! ```

#![warn(unused_must_use)]

pub mod control;
pub mod math;
pub mod plant;
pub mod sim;
pub mod text;

// Re-exports for convenience
pub use control::{Controller, Pid, PidConfig, PidState};
pub use plant::{InvertedPendulum, Plant, PositionPlant, ThermalPlant, VelocityPlant};
pub use sim::{run_scenario, ScenarioConfig, ScenarioTrace, StepRecord};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types for looplab-core
///
/// The controller and plant operations are total functions over reals and
/// never fail; errors only arise at the harness layer (trace export, I/O).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Failed to serialize a scenario trace.
    #[error("Trace serialization error: {0}")]
    Trace(#[from] serde_json::Error),

    /// I/O error while writing a trace or report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for looplab-core operations
pub type Result<T> = std::result::Result<T, Error>;
