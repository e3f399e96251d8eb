//! Inverted pendulum plant model

use super::Plant;

/// Default time step, in seconds. Smaller than the linear plants: the
/// nonlinear dynamics go unstable quickly under coarse Euler steps.
const DEFAULT_DT: f64 = 0.01;

/// Initial tilt away from upright, in radians
const INITIAL_ANGLE: f64 = 0.1;

const GRAVITY: f64 = 9.81;
const LENGTH: f64 = 1.0;
const INERTIA: f64 = 1.0;

/// Torque-balance inverted pendulum
///
/// The control signal is a torque at the pivot. Angular acceleration is
/// `(torque - g * sin(angle) * length) / inertia` with the full sine term,
/// no small-angle approximation. The observable is the angle, so a setpoint
/// of zero means holding the pendulum vertical. It starts slightly tilted;
/// with no torque the gravity term swings it back and forth about zero.
#[derive(Debug, Clone)]
pub struct InvertedPendulum {
    angle: f64,
    angular_vel: f64,
    dt: f64,
}

impl InvertedPendulum {
    /// Create an inverted pendulum with the given time step
    pub fn new(dt: f64) -> Self {
        Self {
            angle: INITIAL_ANGLE,
            angular_vel: 0.0,
            dt,
        }
    }

    /// Get the current angular velocity in rad/s
    pub fn angular_velocity(&self) -> f64 {
        self.angular_vel
    }
}

impl Default for InvertedPendulum {
    fn default() -> Self {
        Self::new(DEFAULT_DT)
    }
}

impl Plant for InvertedPendulum {
    fn name(&self) -> &str {
        "inverted_pendulum"
    }

    fn update(&mut self, control_signal: f64) -> f64 {
        let torque = control_signal;
        let angular_acc = (torque - GRAVITY * self.angle.sin() * LENGTH) / INERTIA;

        self.angular_vel += angular_acc * self.dt;
        self.angle += self.angular_vel * self.dt;

        self.angle
    }

    fn output(&self) -> f64 {
        self.angle
    }

    fn reset(&mut self) {
        self.angle = INITIAL_ANGLE;
        self.angular_vel = 0.0;
    }
}
