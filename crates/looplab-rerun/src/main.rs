//! Visualization driver
//!
//! Runs the standard closed-loop scenarios and streams the setpoint, output,
//! error, and control time series to a rerun viewer, one plot group per
//! scenario on a shared `step` timeline.

use looplab_core::control::Pid;
use looplab_core::plant::{InvertedPendulum, Plant, PositionPlant, ThermalPlant, VelocityPlant};
use looplab_core::sim::{run_scenario, ScenarioConfig};
use rerun::Scalars;

fn scenarios() -> Vec<(ScenarioConfig, Box<dyn Plant>, Pid)> {
    vec![
        (
            ScenarioConfig::position(),
            Box::new(PositionPlant::default()),
            Pid::pid(1.0, 0.1, 0.05),
        ),
        (
            ScenarioConfig::velocity(),
            Box::new(VelocityPlant::default()),
            Pid::pid(1.0, 0.1, 0.05),
        ),
        (
            ScenarioConfig::thermal(),
            Box::new(ThermalPlant::default()),
            Pid::pid(1.0, 0.1, 0.05),
        ),
        (
            ScenarioConfig::pendulum(),
            Box::new(InvertedPendulum::default()),
            Pid::pid(30.0, 1.0, 5.0),
        ),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rec = rerun::RecordingStreamBuilder::new("looplab").spawn()?;

    for (config, mut plant, mut pid) in scenarios() {
        let name = config.name.clone();
        let trace = run_scenario(config, plant.as_mut(), &mut pid)?;

        for record in &trace.records {
            rec.set_time_sequence("step", record.step as i64);

            rec.log(
                format!("{name}/setpoint"),
                &Scalars::single(record.setpoint),
            )?;
            rec.log(format!("{name}/output"), &Scalars::single(record.output))?;
            rec.log(format!("{name}/error"), &Scalars::single(record.error))?;
            rec.log(format!("{name}/control"), &Scalars::single(record.control))?;
        }
    }

    Ok(())
}
