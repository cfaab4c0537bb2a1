//! Result serialization.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

use dispersive::prelude::TelemetryMetrics;
use serde::Serialize;
use std::io::{BufWriter, Write};

/// An optimization result in a serializable form.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// The best individual of the final round.
    pub individual: Vec<f64>,
    /// Fitness of the best individual.
    pub fitness: f64,
    /// Amount of rounds performed.
    pub rounds: usize,
    /// Collected metrics, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsSummary>,
}

/// Aggregated metrics.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    /// Duration in seconds.
    pub duration: usize,
    /// Rounds per second.
    pub speed: f64,
    /// Tracked rounds.
    pub evolution: Vec<RoundSummary>,
}

/// A single tracked round.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    /// Round number.
    pub number: usize,
    /// Seconds since start.
    pub timestamp: f64,
    /// Best fitness of the round.
    pub best_fitness: f64,
    /// Amount of disturbed coordinates.
    pub disturbances: usize,
    /// Amount of resampled coordinates.
    pub repairs: usize,
}

impl OptimizationResult {
    /// Creates a new instance of `OptimizationResult`.
    pub fn new(individual: Vec<f64>, fitness: f64, rounds: usize, metrics: Option<TelemetryMetrics>) -> Self {
        let metrics = metrics.map(|metrics| MetricsSummary {
            duration: metrics.duration,
            speed: metrics.speed,
            evolution: metrics
                .evolution
                .into_iter()
                .map(|round| RoundSummary {
                    number: round.number,
                    timestamp: round.timestamp,
                    best_fitness: round.best_fitness,
                    disturbances: round.stats.disturbances,
                    repairs: round.stats.repairs,
                })
                .collect(),
        });

        Self { individual, fitness, rounds, metrics }
    }
}

/// Writes result in json format.
pub fn write_result_json<W: Write>(result: &OptimizationResult, writer: BufWriter<W>) -> Result<(), String> {
    let mut writer = writer;

    serde_json::to_writer_pretty(&mut writer, result).map_err(|err| format!("cannot serialize result: '{err}'"))?;
    writer.flush().map_err(|err| format!("cannot write result: '{err}'"))
}
