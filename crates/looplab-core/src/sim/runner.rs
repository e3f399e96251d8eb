//! Scenario execution and step traces

use serde::{Deserialize, Serialize};
use std::thread;

use crate::control::Controller;
use crate::plant::Plant;
use crate::Result;

use super::ScenarioConfig;

/// One step of a closed-loop scenario
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StepRecord {
    /// Step index, starting at 0
    pub step: u64,
    /// Setpoint at this step
    pub setpoint: f64,
    /// Plant observable before the step
    pub output: f64,
    /// Error fed to the controller
    pub error: f64,
    /// Control signal the controller produced
    pub control: f64,
    /// Plant observable after applying the control signal
    pub response: f64,
}

/// Recorded trace of a completed scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioTrace {
    /// The configuration the scenario ran with
    pub config: ScenarioConfig,
    /// One record per step, in order
    pub records: Vec<StepRecord>,
}

impl ScenarioTrace {
    /// Plant observable after the last step, if any steps ran
    pub fn final_output(&self) -> Option<f64> {
        self.records.last().map(|r| r.response)
    }

    /// Distance from the setpoint after the last step, if any steps ran
    pub fn final_error(&self) -> Option<f64> {
        self.records
            .last()
            .map(|r| self.config.setpoint - r.response)
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the trace is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize the trace as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the trace as JSON to a file
    pub fn write_json(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Run one closed-loop scenario to completion
///
/// Alternates between the plant and the controller for `config.steps` steps
/// and returns the recorded trace. The loop is synchronous and
/// deterministic; the optional pace only sleeps between steps so interactive
/// harnesses advance in something like real time.
///
/// # Example
/// ```
/// use looplab_core::control::Pid;
/// use looplab_core::plant::VelocityPlant;
/// use looplab_core::sim::{run_scenario, ScenarioConfig};
///
/// let mut plant = VelocityPlant::default();
/// let mut pid = Pid::pid(1.0, 0.1, 0.05);
///
/// let trace = run_scenario(ScenarioConfig::velocity(), &mut plant, &mut pid).unwrap();
/// assert_eq!(trace.len(), 100);
/// ```
pub fn run_scenario(
    config: ScenarioConfig,
    plant: &mut dyn Plant,
    controller: &mut dyn Controller,
) -> Result<ScenarioTrace> {
    let mut records = Vec::with_capacity(config.steps);

    tracing::info!(
        scenario = %config.name,
        plant = plant.name(),
        setpoint = config.setpoint,
        steps = config.steps,
        "scenario start"
    );

    for step in 0..config.steps as u64 {
        let output = plant.output();
        let error = config.setpoint - output;
        let control = controller.control(error);
        let response = plant.update(control * config.actuator_gain);

        tracing::debug!(
            scenario = %config.name,
            step,
            setpoint = config.setpoint,
            output,
            error,
            control,
            response,
            "step"
        );

        records.push(StepRecord {
            step,
            setpoint: config.setpoint,
            output,
            error,
            control,
            response,
        });

        if let Some(pace) = config.pace {
            thread::sleep(pace);
        }
    }

    let trace = ScenarioTrace { config, records };

    tracing::info!(
        scenario = %trace.config.name,
        final_output = trace.final_output(),
        final_error = trace.final_error(),
        "scenario complete"
    );

    Ok(trace)
}
