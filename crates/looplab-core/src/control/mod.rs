//! Feedback control
//!
//! Provides the controller seam used by the scenario runner and the one
//! concrete implementation: a PID controller with anti-windup and output
//! clamping.

mod pid;

pub use pid::{Pid, PidConfig, PidState};

/// Seam for scalar feedback controllers
///
/// A controller consumes the latest error sample and produces a control
/// signal. Alternative control laws can be substituted behind this trait;
/// [`Pid`] is the one concrete implementation in this crate.
pub trait Controller: Send + Sync {
    /// Consume an error sample and return the control signal
    fn control(&mut self, error: f64) -> f64;

    /// Replace the proportional gain; takes effect on the next `control` call
    fn set_kp(&mut self, kp: f64);

    /// Replace the integral gain; takes effect on the next `control` call
    fn set_ki(&mut self, ki: f64);

    /// Replace the derivative gain; takes effect on the next `control` call
    fn set_kd(&mut self, kd: f64);

    /// Replace the anti-windup coefficient (nominally in `[0, 1]`, unchecked)
    fn set_anti_windup_gain(&mut self, gain: f64);

    /// Zero the accumulated state; gains and limits are unaffected
    fn reset(&mut self);
}
