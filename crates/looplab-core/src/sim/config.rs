//! Scenario configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a closed-loop scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Name for logging and trace labeling
    pub name: String,
    /// Target value the controller drives the plant output toward
    pub setpoint: f64,
    /// Number of steps to run
    pub steps: usize,
    /// Gain applied to the control signal before it reaches the plant
    pub actuator_gain: f64,
    /// Optional sleep between steps, for real-time pacing in interactive
    /// runs; has no effect on the computed trace
    pub pace: Option<Duration>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: "scenario".into(),
            setpoint: 1.0,
            steps: 100,
            actuator_gain: 1.0,
            pace: None,
        }
    }
}

impl ScenarioConfig {
    /// Create a config with the given setpoint and step count
    pub fn new(setpoint: f64, steps: usize) -> Self {
        Self {
            setpoint,
            steps,
            ..Default::default()
        }
    }

    /// Set the scenario name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the actuator gain
    pub fn with_actuator_gain(mut self, gain: f64) -> Self {
        self.actuator_gain = gain;
        self
    }

    /// Sleep this long between steps
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = Some(pace);
        self
    }

    /// Position plant driven to 1.0
    pub fn position() -> Self {
        Self::new(1.0, 100).with_name("position")
    }

    /// Velocity plant driven to 1.0
    pub fn velocity() -> Self {
        Self::new(1.0, 100).with_name("velocity")
    }

    /// Thermal plant driven to 100 degrees
    pub fn thermal() -> Self {
        Self::new(100.0, 100).with_name("thermal")
    }

    /// Inverted pendulum held at the vertical
    pub fn pendulum() -> Self {
        Self::new(0.0, 100).with_name("inverted_pendulum")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScenarioConfig::default();
        assert_eq!(config.steps, 100);
        assert_eq!(config.actuator_gain, 1.0);
        assert!(config.pace.is_none());
    }

    #[test]
    fn test_builders() {
        let config = ScenarioConfig::new(5.0, 20)
            .with_name("bench")
            .with_actuator_gain(2.0)
            .with_pace(Duration::from_millis(50));

        assert_eq!(config.name, "bench");
        assert_eq!(config.setpoint, 5.0);
        assert_eq!(config.steps, 20);
        assert_eq!(config.actuator_gain, 2.0);
        assert_eq!(config.pace, Some(Duration::from_millis(50)));
    }

    #[test]
    fn test_standard_scenarios() {
        assert_eq!(ScenarioConfig::thermal().setpoint, 100.0);
        assert_eq!(ScenarioConfig::pendulum().setpoint, 0.0);
    }
}
