//! Console simulation driver
//!
//! Runs the four standard closed-loop scenarios in sequence with real-time
//! pacing and prints the step traces. Takes no arguments; set `RUST_LOG` to
//! change verbosity.

use std::time::Duration;

use looplab_core::control::Pid;
use looplab_core::plant::{InvertedPendulum, Plant, PositionPlant, ThermalPlant, VelocityPlant};
use looplab_core::sim::{run_scenario, ScenarioConfig};

/// Pause between steps so the traces scroll in something like real time
const PACE: Duration = Duration::from_millis(50);

fn scenarios() -> Vec<(ScenarioConfig, Box<dyn Plant>, Pid)> {
    vec![
        (
            ScenarioConfig::position().with_pace(PACE),
            Box::new(PositionPlant::default()),
            Pid::pid(1.0, 0.1, 0.05),
        ),
        (
            ScenarioConfig::velocity().with_pace(PACE),
            Box::new(VelocityPlant::default()),
            Pid::pid(1.0, 0.1, 0.05),
        ),
        (
            ScenarioConfig::thermal().with_pace(PACE),
            Box::new(ThermalPlant::default()),
            Pid::pid(1.0, 0.1, 0.05),
        ),
        // The pendulum wants a stiffer hand than the linear plants
        (
            ScenarioConfig::pendulum().with_pace(PACE),
            Box::new(InvertedPendulum::default()),
            Pid::pid(30.0, 1.0, 5.0),
        ),
    ]
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,looplab_core=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();

    for (config, mut plant, mut pid) in scenarios() {
        match run_scenario(config, plant.as_mut(), &mut pid) {
            Ok(trace) => {
                if let (Some(output), Some(error)) = (trace.final_output(), trace.final_error()) {
                    tracing::info!(
                        scenario = %trace.config.name,
                        output,
                        error,
                        "finished"
                    );
                }
            }
            Err(err) => tracing::error!(%err, "scenario failed"),
        }
    }
}
