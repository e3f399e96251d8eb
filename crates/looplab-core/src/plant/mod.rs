//! Toy plant models
//!
//! A plant consumes a scalar control signal, advances its internal state by
//! one fixed time step, and reports a scalar observable. The models here are
//! Euler-integrated difference equations, deliberately simple: they exist to
//! exercise a controller in a closed loop, not to be physically faithful.

mod linear;
mod pendulum;

pub use linear::{PositionPlant, ThermalPlant, VelocityPlant};
pub use pendulum::InvertedPendulum;

/// Seam for plant models driven by the scenario runner
///
/// Implementations own their state exclusively; the runner mutates them only
/// through sequential `update` calls.
pub trait Plant: Send + Sync {
    /// Get the plant name
    fn name(&self) -> &str;

    /// Advance one fixed time step under the given control signal and return
    /// the new observable
    fn update(&mut self, control_signal: f64) -> f64;

    /// Get the current observable without advancing state
    fn output(&self) -> f64;

    /// Return the plant to its construction-time state
    fn reset(&mut self);
}
