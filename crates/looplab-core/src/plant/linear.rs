//! First-order and double-integrator plant models

use super::Plant;

/// Default time step for the linear plants, in seconds
const DEFAULT_DT: f64 = 0.1;

/// Ambient temperature the thermal plant starts from, in degrees Celsius
const AMBIENT_TEMPERATURE: f64 = 20.0;

/// Double integrator: the control signal is an acceleration
///
/// `velocity += u * dt; position += velocity * dt`. The observable is the
/// position. Both state variables start at zero.
#[derive(Debug, Clone)]
pub struct PositionPlant {
    position: f64,
    velocity: f64,
    dt: f64,
}

impl PositionPlant {
    /// Create a position plant with the given time step
    pub fn new(dt: f64) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            dt,
        }
    }

    /// Get the current velocity
    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}

impl Default for PositionPlant {
    fn default() -> Self {
        Self::new(DEFAULT_DT)
    }
}

impl Plant for PositionPlant {
    fn name(&self) -> &str {
        "position"
    }

    fn update(&mut self, control_signal: f64) -> f64 {
        self.velocity += control_signal * self.dt;
        self.position += self.velocity * self.dt;
        self.position
    }

    fn output(&self) -> f64 {
        self.position
    }

    fn reset(&mut self) {
        self.position = 0.0;
        self.velocity = 0.0;
    }
}

/// Single integrator: the control signal is an acceleration, the observable
/// is the velocity
#[derive(Debug, Clone)]
pub struct VelocityPlant {
    velocity: f64,
    dt: f64,
}

impl VelocityPlant {
    /// Create a velocity plant with the given time step
    pub fn new(dt: f64) -> Self {
        Self { velocity: 0.0, dt }
    }
}

impl Default for VelocityPlant {
    fn default() -> Self {
        Self::new(DEFAULT_DT)
    }
}

impl Plant for VelocityPlant {
    fn name(&self) -> &str {
        "velocity"
    }

    fn update(&mut self, control_signal: f64) -> f64 {
        self.velocity += control_signal * self.dt;
        self.velocity
    }

    fn output(&self) -> f64 {
        self.velocity
    }

    fn reset(&mut self) {
        self.velocity = 0.0;
    }
}

/// First-order thermal model: the control signal is a heating rate
///
/// Starts at ambient temperature rather than zero, so a closed loop has to
/// cover a realistic gap to a setpoint like 100 °C.
#[derive(Debug, Clone)]
pub struct ThermalPlant {
    temperature: f64,
    dt: f64,
}

impl ThermalPlant {
    /// Create a thermal plant with the given time step
    pub fn new(dt: f64) -> Self {
        Self {
            temperature: AMBIENT_TEMPERATURE,
            dt,
        }
    }
}

impl Default for ThermalPlant {
    fn default() -> Self {
        Self::new(DEFAULT_DT)
    }
}

impl Plant for ThermalPlant {
    fn name(&self) -> &str {
        "thermal"
    }

    fn update(&mut self, control_signal: f64) -> f64 {
        self.temperature += control_signal * self.dt;
        self.temperature
    }

    fn output(&self) -> f64 {
        self.temperature
    }

    fn reset(&mut self) {
        self.temperature = AMBIENT_TEMPERATURE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_position_plant_double_integrates() {
        let mut plant = PositionPlant::new(0.1);

        // velocity = 1.0 * 0.1 = 0.1, position = 0.1 * 0.1 = 0.01
        assert_relative_eq!(plant.update(1.0), 0.01);
        assert_relative_eq!(plant.velocity(), 0.1);

        // velocity = 0.2, position = 0.01 + 0.02
        assert_relative_eq!(plant.update(1.0), 0.03);
        assert_relative_eq!(plant.output(), 0.03);
    }

    #[test]
    fn test_velocity_plant_integrates_once() {
        let mut plant = VelocityPlant::new(0.1);
        assert_relative_eq!(plant.update(2.0), 0.2);
        assert_relative_eq!(plant.update(2.0), 0.4);
        assert_relative_eq!(plant.output(), 0.4);
    }

    #[test]
    fn test_thermal_plant_starts_at_ambient() {
        let plant = ThermalPlant::default();
        assert_relative_eq!(plant.output(), 20.0);
    }

    #[test]
    fn test_thermal_plant_heats_linearly() {
        let mut plant = ThermalPlant::new(0.1);
        assert_relative_eq!(plant.update(10.0), 21.0);
        assert_relative_eq!(plant.update(-10.0), 20.0);
    }

    #[test]
    fn test_output_does_not_advance_state() {
        let mut plant = VelocityPlant::default();
        plant.update(1.0);
        let before = plant.output();
        assert_relative_eq!(plant.output(), before);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut plant = ThermalPlant::default();
        plant.update(50.0);
        plant.reset();
        assert_relative_eq!(plant.output(), 20.0);
    }
}
