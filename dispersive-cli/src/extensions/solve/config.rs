//! Optimizer configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use dispersive::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An algorithm configuration.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Config {
    /// Specifies objective function.
    pub objective: Option<ObjectiveConfig>,
    /// Specifies swarm configuration.
    pub swarm: Option<SwarmConfig>,
    /// Specifies update mode.
    pub update: Option<UpdateType>,
    /// Specifies algorithm termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies random generator configuration.
    pub random: Option<RandomConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// An objective function configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct ObjectiveConfig {
    /// A name of the function: sphere, rosenbrock or rastrigin.
    pub name: String,
}

/// A swarm configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SwarmConfig {
    /// Population size. Default is 50.
    pub num_flies: Option<usize>,
    /// Half-width of the search space. Default is 5.
    pub bound: Option<f64>,
    /// Dimension of the search space. Default is 2.
    pub dim: Option<usize>,
    /// Disturbance threshold. Default is 0.001.
    pub delta: Option<f64>,
}

/// An update mode configuration.
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(tag = "type")]
pub enum UpdateType {
    /// Flies are updated in place one by one.
    #[serde(rename(deserialize = "sequential"))]
    Sequential,
    /// Flies observe neighbours as they were at the start of the round.
    #[serde(rename(deserialize = "synchronous"))]
    Synchronous,
}

/// A termination configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Amount of rounds. Default is 200.
    pub max_iterations: Option<usize>,
}

/// A random generator configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct RandomConfig {
    /// A seed which makes runs repeatable.
    pub seed: Option<u64>,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct TelemetryConfig {
    /// Specifies logging settings.
    pub logging: Option<LoggingConfig>,
    /// Specifies metrics settings.
    pub metrics: Option<MetricsConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Specifies how often best individual is logged. Default is 100 (rounds).
    pub log_best: Option<usize>,
}

/// A metrics configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MetricsConfig {
    /// Specifies whether metrics collection is enabled. Default is false.
    pub enabled: bool,
    /// Specifies how often rounds are tracked. Default is 100 (rounds).
    pub track_rounds: Option<usize>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates an optimizer config builder from config file.
pub fn create_builder_from_config_file<R: Read>(
    reader: BufReader<R>,
    logger: InfoLogger,
) -> Result<(DfoConfigBuilder, Config), String> {
    read_config(reader).map(|config| (create_builder_from_config(&config, logger), config))
}

/// Creates an optimizer config builder from config.
pub fn create_builder_from_config(config: &Config, logger: InfoLogger) -> DfoConfigBuilder {
    let builder = DfoConfigBuilder::default();

    let builder = configure_from_swarm(builder, &config.swarm);
    let builder = configure_from_update(builder, &config.update);
    let builder = configure_from_termination(builder, &config.termination);

    configure_from_telemetry(builder, &config.telemetry, logger)
}

/// Returns objective function specified in config, sphere function is used by default.
pub fn get_objective_from_config(config: &Config) -> Result<FitnessFn, String> {
    match &config.objective {
        Some(ObjectiveConfig { name }) => {
            get_fitness_fn_by_name(name).ok_or_else(|| format!("unknown objective function: '{name}'"))
        }
        None => Ok(create_sphere_function()),
    }
}

/// Creates environment using random seed from config, if any.
pub fn create_environment_from_config(config: &Config, logger: InfoLogger) -> Environment {
    let random: Arc<dyn Random> = match config.random.as_ref().and_then(|random| random.seed) {
        Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
        None => Arc::new(DefaultRandom::default()),
    };

    Environment::new(random, logger)
}

fn configure_from_swarm(builder: DfoConfigBuilder, swarm_config: &Option<SwarmConfig>) -> DfoConfigBuilder {
    let Some(SwarmConfig { num_flies, bound, dim, delta }) = swarm_config else {
        return builder;
    };

    let builder = match *num_flies {
        Some(num_flies) => builder.with_num_flies(num_flies),
        None => builder,
    };
    let builder = match *bound {
        Some(bound) => builder.with_bound(bound),
        None => builder,
    };
    let builder = match *dim {
        Some(dim) => builder.with_dim(dim),
        None => builder,
    };

    match *delta {
        Some(delta) => builder.with_delta(delta),
        None => builder,
    }
}

fn configure_from_update(builder: DfoConfigBuilder, update_type: &Option<UpdateType>) -> DfoConfigBuilder {
    match update_type {
        Some(UpdateType::Sequential) => builder.with_update_mode(UpdateMode::Sequential),
        Some(UpdateType::Synchronous) => builder.with_update_mode(UpdateMode::Synchronous),
        None => builder,
    }
}

fn configure_from_termination(
    builder: DfoConfigBuilder,
    termination_config: &Option<TerminationConfig>,
) -> DfoConfigBuilder {
    match termination_config.as_ref().and_then(|config| config.max_iterations) {
        Some(max_iterations) => builder.with_max_iter(max_iterations),
        None => builder,
    }
}

fn configure_from_telemetry(
    builder: DfoConfigBuilder,
    telemetry_config: &Option<TelemetryConfig>,
    logger: InfoLogger,
) -> DfoConfigBuilder {
    const LOG_BEST: usize = 100;
    const TRACK_ROUNDS: usize = 100;

    let telemetry_mode = match telemetry_config.as_ref().map(|t| (&t.logging, &t.metrics)) {
        Some((Some(LoggingConfig { enabled: logging_enabled, log_best }), metrics)) if *logging_enabled => {
            match metrics {
                Some(MetricsConfig { enabled: true, track_rounds }) => TelemetryMode::All {
                    logger,
                    log_best: log_best.unwrap_or(LOG_BEST),
                    track_rounds: track_rounds.unwrap_or(TRACK_ROUNDS),
                },
                _ => TelemetryMode::OnlyLogging { logger, log_best: log_best.unwrap_or(LOG_BEST) },
            }
        }
        Some((_, Some(MetricsConfig { enabled: true, track_rounds }))) => {
            TelemetryMode::OnlyMetrics { track_rounds: track_rounds.unwrap_or(TRACK_ROUNDS) }
        }
        _ => TelemetryMode::None,
    };

    builder.with_telemetry(telemetry_mode)
}
