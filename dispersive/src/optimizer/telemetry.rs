//! A module which provides the logic to collect metrics about algorithm execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/optimizer/telemetry_test.rs"]
mod telemetry_test;

use crate::optimizer::UpdateStats;
use crate::population::Population;
use crate::utils::{InfoLogger, Timer};

/// Encapsulates different measurements regarding algorithm evaluation.
pub struct TelemetryMetrics {
    /// Algorithm duration.
    pub duration: usize,
    /// Total amount of rounds.
    pub rounds: usize,
    /// Speed: rounds per second.
    pub speed: f64,
    /// Tracked rounds.
    pub evolution: Vec<TelemetryRound>,
}

/// Represents information about a single optimization round.
pub struct TelemetryRound {
    /// Round sequence number.
    pub number: usize,
    /// Time since optimization started.
    pub timestamp: f64,
    /// Index of the best individual.
    pub best_index: usize,
    /// Fitness of the best individual.
    pub best_fitness: f64,
    /// Coordinates of the best individual.
    pub best_individual: Vec<f64>,
    /// Random events of the round's update pass.
    pub stats: UpdateStats,
}

/// Specifies a telemetry mode.
#[derive(Clone, Default)]
pub enum TelemetryMode {
    /// No telemetry at all.
    #[default]
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_best: usize,
    },
    /// Only metrics collection.
    OnlyMetrics {
        /// Specifies how often rounds are tracked.
        track_rounds: usize,
    },
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_best: usize,
        /// Specifies how often rounds are tracked.
        track_rounds: usize,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    metrics: TelemetryMetrics,
    time: Timer,
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self {
            time: Timer::start(),
            metrics: TelemetryMetrics { duration: 0, rounds: 0, speed: 0., evolution: vec![] },
            mode,
        }
    }

    /// Reports round statistics. Expects that the best individual was not moved by the round's update.
    pub fn on_round(
        &mut self,
        round: usize,
        population: &Population,
        best_index: usize,
        stats: UpdateStats,
        round_time: Timer,
    ) {
        self.metrics.rounds = round + 1;

        let (log_best, track_rounds) = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { log_best, .. } => (Some(*log_best), None),
            TelemetryMode::OnlyMetrics { track_rounds } => (None, Some(*track_rounds)),
            TelemetryMode::All { log_best, track_rounds, .. } => (Some(*log_best), Some(*track_rounds)),
        };

        let best_individual = population.individual(best_index);
        let best_fitness = population.fitness()[best_index];

        if is_scheduled(round, log_best) {
            self.log(
                format!(
                    "[{}s] round {} took {}ms, best fly {}: [{}], fitness: {}",
                    self.time.elapsed_secs(),
                    round,
                    round_time.elapsed_millis(),
                    best_index,
                    format_individual(best_individual),
                    best_fitness
                )
                .as_str(),
            );
        }

        if is_scheduled(round, track_rounds) {
            self.metrics.evolution.push(TelemetryRound {
                number: round,
                timestamp: self.time.elapsed_secs_as_float(),
                best_index,
                best_fitness,
                best_individual: best_individual.to_vec(),
                stats,
            });
        }
    }

    /// Reports final statistic.
    pub fn on_result(&mut self, population: &Population, best_index: usize) {
        let rounds = self.metrics.rounds;
        let elapsed = self.time.elapsed_secs() as usize;
        let speed = rounds as f64 / self.time.elapsed_secs_as_float().max(f64::EPSILON);

        self.metrics.duration = elapsed;
        self.metrics.speed = speed;

        self.log(format!("[{elapsed}s] total rounds: {rounds}, speed: {speed:.2} rounds/sec").as_str());
        self.log(
            format!(
                "\tbest fly: [{}], fitness: {}",
                format_individual(population.individual(best_index)),
                population.fitness()[best_index]
            )
            .as_str(),
        );
    }

    /// Gets metrics.
    pub fn take_metrics(self) -> Option<TelemetryMetrics> {
        match &self.mode {
            TelemetryMode::OnlyMetrics { .. } | TelemetryMode::All { .. } => Some(self.metrics),
            _ => None,
        }
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } => (logger)(message),
            TelemetryMode::All { logger, .. } => (logger)(message),
            _ => {}
        }
    }
}

fn is_scheduled(round: usize, frequency: Option<usize>) -> bool {
    frequency.is_some_and(|frequency| round % frequency.max(1) == 0)
}

fn format_individual(individual: &[f64]) -> String {
    individual.iter().map(|value| format!("{value:.6}")).collect::<Vec<_>>().join(", ")
}
