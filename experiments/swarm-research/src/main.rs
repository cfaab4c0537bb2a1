//! Reproduces the reference run: a thousand flies minimize two dimensional sphere function and
//! their positions before and after optimization are written into a png file.

use dispersive::prelude::*;
use std::path::Path;
use std::process;
use std::sync::Arc;
use swarm_research::experiment::run_experiment;
use swarm_research::plots::draw_to_png;

fn main() {
    let out_path = std::env::args().nth(1).unwrap_or_else(|| "population.png".to_string());
    let logger: InfoLogger = Arc::new(|msg: &str| println!("{msg}"));

    let result = DfoConfigBuilder::default()
        .with_num_flies(1000)
        .with_bound(5.)
        .with_dim(2)
        .with_delta(0.001)
        .with_max_iter(1000)
        .with_telemetry(TelemetryMode::OnlyLogging { logger: logger.clone(), log_best: 100 })
        .build()
        .and_then(|config| {
            let environment = Arc::new(Environment::new(Arc::new(DefaultRandom::default()), logger));
            run_experiment(config, create_sphere_function(), environment)
        })
        .map_err(|err| err.to_string())
        .and_then(|states| {
            draw_to_png(&states.to_draw_config(), Path::new(out_path.as_str()), (800, 800)).map_err(|err| err.to_string())
        });

    if let Err(err) = result {
        eprintln!("cannot run experiment: '{err}'");
        process::exit(1);
    }

    println!("population is written into '{out_path}'");
}
