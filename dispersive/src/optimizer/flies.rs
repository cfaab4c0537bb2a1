#[cfg(test)]
#[path = "../../tests/unit/optimizer/flies_test.rs"]
mod flies_test;

use crate::objectives::FitnessFn;
use crate::optimizer::*;
use crate::population::Population;
use crate::utils::{DfoResult, Environment, Timer};
use std::sync::Arc;

/// A result of the training: the best individual of the final round, its fitness and collected metrics.
pub type TrainResult = (Vec<f64>, f64, Option<TelemetryMetrics>);

/// Implements Dispersive Flies Optimization: a swarm minimizes the objective function by moving
/// each fly relative to its fittest ring neighbour and the best fly of the round.
pub struct DispersiveFlies {
    config: DfoConfig,
    objective: FitnessFn,
    environment: Arc<Environment>,
    population: Population,
}

impl DispersiveFlies {
    /// Creates a new instance of `DispersiveFlies` with uniformly initialized population.
    pub fn new(config: DfoConfig, objective: FitnessFn, environment: Arc<Environment>) -> DfoResult<Self> {
        config.validate()?;

        if config.has_degenerate_topology() {
            (environment.logger)(
                format!("degenerate topology: {} flies make ring neighbours coincide", config.num_flies).as_str(),
            );
        }

        let population = Population::initialize(config.num_flies, config.dim, config.bound, environment.random.as_ref());

        Ok(Self { config, objective, environment, population })
    }

    /// Returns configuration.
    pub fn config(&self) -> &DfoConfig {
        &self.config
    }

    /// Returns current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Returns current positions of all flies.
    pub fn positions(&self) -> &[Vec<f64>] {
        self.population.positions()
    }

    /// Returns fitness values calculated by the last evaluation.
    pub fn fitness(&self) -> &[f64] {
        self.population.fitness()
    }

    /// Runs optimization and returns the best individual found in the final round.
    pub fn train(&mut self) -> Vec<f64> {
        let (individual, _, _) = self.train_with_telemetry();

        individual
    }

    /// Runs exactly `max_iter` rounds and returns the best individual of the final round with
    /// its fitness. No best-ever individual is kept between rounds, so the result can be worse
    /// than the best one of some earlier round. With zero rounds, the population is evaluated
    /// once and its best individual is returned unchanged.
    pub fn train_with_telemetry(&mut self) -> TrainResult {
        let mut telemetry = Telemetry::new(self.config.telemetry.clone());
        let ctx = UpdateContext {
            objective: &self.objective,
            random: self.environment.random.as_ref(),
            mode: self.config.update_mode,
            delta: self.config.delta,
        };

        let best_index = if self.config.max_iter == 0 {
            self.population.evaluate(&self.objective);
            self.population.best_index()
        } else {
            (0..self.config.max_iter).fold(0, |_, round| {
                let round_time = Timer::start();

                self.population.evaluate(&self.objective);
                let best_index = self.population.best_index();

                let stats = update_population(&mut self.population, best_index, &ctx);
                debug_assert!(self.population.is_in_bounds());

                telemetry.on_round(round, &self.population, best_index, stats, round_time);

                best_index
            })
        };

        telemetry.on_result(&self.population, best_index);

        let individual = self.population.individual(best_index).to_vec();
        let fitness = self.population.fitness()[best_index];

        (individual, fitness, telemetry.take_metrics())
    }
}
