//! PID controller implementation
//!
//! A discrete PID (Proportional-Integral-Derivative) controller with output
//! clamping and conditional-integration anti-windup. The controller is
//! sample-based: each call to [`Pid::control`] consumes one error sample, so
//! the integral is a running sum of samples and the derivative a first
//! difference, with no explicit time step.

use serde::{Deserialize, Serialize};

use super::Controller;
use crate::math::clamp;

/// PID controller configuration
///
/// All fields are taken at face value: gains may be negative, the anti-windup
/// coefficient may lie outside `[0, 1]`, and the output limits may be given
/// in either order. Out-of-range values change the arithmetic, not the
/// control flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PidConfig {
    /// Proportional gain
    pub kp: f64,
    /// Integral gain
    pub ki: f64,
    /// Derivative gain
    pub kd: f64,
    /// Fraction of a saturating error sample withheld from the integral
    /// accumulator (nominally `[0, 1]`; 1.0 freezes integration while
    /// clamped, 0.0 accumulates in full)
    pub anti_windup_gain: f64,
    /// Output clamp lower bound
    pub output_min: f64,
    /// Output clamp upper bound
    pub output_max: f64,
}

impl Default for PidConfig {
    fn default() -> Self {
        Self {
            kp: 0.0,
            ki: 0.0,
            kd: 0.0,
            anti_windup_gain: 1.0,
            output_min: -100.0,
            output_max: 100.0,
        }
    }
}

impl PidConfig {
    /// Create a new PID config with given gains
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self {
            kp,
            ki,
            kd,
            ..Default::default()
        }
    }

    /// Create a P-only controller config
    pub fn p(kp: f64) -> Self {
        Self::new(kp, 0.0, 0.0)
    }

    /// Create a PI controller config
    pub fn pi(kp: f64, ki: f64) -> Self {
        Self::new(kp, ki, 0.0)
    }

    /// Create a PD controller config
    pub fn pd(kp: f64, kd: f64) -> Self {
        Self::new(kp, 0.0, kd)
    }

    /// Set output limits
    pub fn with_limits(mut self, min: f64, max: f64) -> Self {
        self.output_min = min;
        self.output_max = max;
        self
    }

    /// Set the anti-windup coefficient
    pub fn with_anti_windup_gain(mut self, gain: f64) -> Self {
        self.anti_windup_gain = gain;
        self
    }
}

/// PID controller internal state
///
/// Defined only relative to the sequence of `control` calls since
/// construction or the last `reset`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PidState {
    /// Running sum of error samples
    pub cumulative_error: f64,
    /// Previous error sample, for the derivative estimate
    pub prev_error: f64,
}

/// PID controller with output clamping and anti-windup
///
/// When the raw P+I+D output saturates against the configured limits, only a
/// `1 - anti_windup_gain` fraction of the saturating error sample is added to
/// the accumulator. This is a softer variant of conditional integration: it
/// trades faster unwind against residual overshoot instead of freezing the
/// integral outright (unless the coefficient is exactly 1.0).
///
/// # Example
/// ```
/// use looplab_core::control::{Controller, Pid, PidConfig};
///
/// let config = PidConfig::new(0.6, 0.08, 0.2).with_limits(-10.0, 10.0);
/// let mut pid = Pid::new(config);
///
/// let setpoint = 1.0;
/// let measurement = 0.5;
/// let output = pid.control(setpoint - measurement);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pid {
    config: PidConfig,
    state: PidState,
}

impl Pid {
    /// Create a new PID controller with the given configuration
    pub fn new(config: PidConfig) -> Self {
        Self {
            config,
            state: PidState::default(),
        }
    }

    /// Create a controller with the given gains and default limits
    pub fn pid(kp: f64, ki: f64, kd: f64) -> Self {
        Self::new(PidConfig::new(kp, ki, kd))
    }

    /// Create a simple P controller
    pub fn p(kp: f64) -> Self {
        Self::new(PidConfig::p(kp))
    }

    /// Create a PI controller
    pub fn pi(kp: f64, ki: f64) -> Self {
        Self::new(PidConfig::pi(kp, ki))
    }

    /// Create a PD controller
    pub fn pd(kp: f64, kd: f64) -> Self {
        Self::new(PidConfig::pd(kp, kd))
    }

    /// Replace the output clamp bounds
    ///
    /// The ordering is not checked; `min > max` yields a permanently
    /// saturated clamp.
    pub fn set_output_limits(&mut self, min: f64, max: f64) {
        if min > max {
            tracing::warn!(min, max, "output limits are inverted");
        }
        self.config.output_min = min;
        self.config.output_max = max;
    }

    /// Get the current state
    pub fn state(&self) -> &PidState {
        &self.state
    }

    /// Get the configuration
    pub fn config(&self) -> &PidConfig {
        &self.config
    }
}

impl Controller for Pid {
    fn control(&mut self, error: f64) -> f64 {
        let p_term = error * self.config.kp;

        // Integral over the proposed (pre-clamp) accumulator
        let proposed = self.state.cumulative_error + error;
        let i_term = proposed * self.config.ki;

        let d_term = (error - self.state.prev_error) * self.config.kd;
        self.state.prev_error = error;

        let raw = p_term + i_term + d_term;
        let output = clamp(raw, self.config.output_min, self.config.output_max);

        if raw != output {
            // Saturated: withhold the anti-windup fraction of this sample
            self.state.cumulative_error += error * (1.0 - self.config.anti_windup_gain);
        } else {
            self.state.cumulative_error = proposed;
        }

        output
    }

    fn set_kp(&mut self, kp: f64) {
        self.config.kp = kp;
    }

    fn set_ki(&mut self, ki: f64) {
        self.config.ki = ki;
    }

    fn set_kd(&mut self, kd: f64) {
        self.config.kd = kd;
    }

    fn set_anti_windup_gain(&mut self, gain: f64) {
        self.config.anti_windup_gain = gain;
    }

    fn reset(&mut self) {
        self.state = PidState::default();
    }
}
