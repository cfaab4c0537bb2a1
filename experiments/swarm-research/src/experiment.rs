//! Runs the optimizer and captures population state for plotting.

#[cfg(test)]
#[path = "../tests/unit/experiment_test.rs"]
mod experiment_test;

use crate::plots::{PopulationDrawConfig, PopulationSeries};
use dispersive::prelude::*;
use plotters::style::{BLUE, RED};
use std::sync::Arc;

/// Population state projected on the first two dimensions.
pub struct PopulationStates {
    /// Projection before optimization.
    pub before: Vec<(f64, f64)>,
    /// Projection after the final round.
    pub after: Vec<(f64, f64)>,
    /// The best individual of the final round.
    pub best: Vec<f64>,
    /// Fitness of the best individual.
    pub fitness: f64,
    /// Half-width of the search space.
    pub bound: f64,
}

/// Trains a swarm and returns its states before and after optimization.
pub fn run_experiment(
    config: DfoConfig,
    objective: FitnessFn,
    environment: Arc<Environment>,
) -> DfoResult<PopulationStates> {
    let bound = config.bound;
    let mut flies = DispersiveFlies::new(config, objective, environment)?;

    let before = flies.population().projection(0, 1);
    let (best, fitness, _) = flies.train_with_telemetry();
    let after = flies.population().projection(0, 1);

    Ok(PopulationStates { before, after, best, fitness, bound })
}

impl PopulationStates {
    /// Creates a drawing config where initial positions are blue and final positions are red.
    pub fn to_draw_config(&self) -> PopulationDrawConfig {
        PopulationDrawConfig {
            bound: self.bound,
            point_size: 2,
            series: vec![
                PopulationSeries { points: self.before.clone(), color: BLUE },
                PopulationSeries { points: self.after.clone(), color: RED },
            ],
        }
    }
}
