#[cfg(test)]
#[path = "../../tests/unit/optimizer/config_test.rs"]
mod config_test;

use crate::optimizer::{TelemetryMode, UpdateMode};
use crate::utils::{DfoError, DfoResult};

/// The largest half-width for which the search space width `2 * bound` stays finite.
const MAX_BOUND: f64 = f64::MAX / 2.;

/// A configuration which controls optimizer execution. It stays immutable during the run.
///
/// `delta` is expected within `[0, 1]`: values below zero never trigger disturbance, values
/// above one always trigger it.
#[derive(Clone)]
pub struct DfoConfig {
    /// Population size.
    pub num_flies: usize,
    /// Half-width of the search space, symmetric around zero in every dimension.
    pub bound: f64,
    /// Amount of coordinates of each individual.
    pub dim: usize,
    /// Probability of disturbance per coordinate.
    pub delta: f64,
    /// Amount of optimization rounds.
    pub max_iter: usize,
    /// Specifies how neighbours are observed during update.
    pub update_mode: UpdateMode,
    /// Telemetry mode. Per-round reporting is opt-in: the default mode neither logs nor tracks rounds.
    pub telemetry: TelemetryMode,
}

impl DfoConfig {
    /// Checks that search space and population are well defined.
    pub fn validate(&self) -> DfoResult<()> {
        if self.dim < 1 {
            return Err(DfoError::InvalidConfiguration(format!("dim must be at least 1, got {}", self.dim)));
        }

        if !(self.bound.is_finite() && self.bound > 0.) {
            return Err(DfoError::InvalidConfiguration(format!(
                "bound must be positive and finite, got {}",
                self.bound
            )));
        }

        if self.bound > MAX_BOUND {
            return Err(DfoError::InvalidConfiguration(format!(
                "bound must not exceed half of f64::MAX, got {:e}",
                self.bound
            )));
        }

        if self.num_flies < 1 {
            return Err(DfoError::InvalidConfiguration(format!(
                "num_flies must be at least 1, got {}",
                self.num_flies
            )));
        }

        Ok(())
    }

    /// Checks whether ring neighbours can coincide with each other or with the individual itself.
    pub fn has_degenerate_topology(&self) -> bool {
        self.num_flies < 3
    }
}

impl Default for DfoConfig {
    fn default() -> Self {
        Self {
            num_flies: 50,
            bound: 5.,
            dim: 2,
            delta: 0.001,
            max_iter: 200,
            update_mode: UpdateMode::default(),
            telemetry: TelemetryMode::default(),
        }
    }
}

/// Provides configurable way to build `DfoConfig` using fluent interface pattern.
#[derive(Default)]
pub struct DfoConfigBuilder {
    config: DfoConfig,
}

impl DfoConfigBuilder {
    /// Sets population size.
    pub fn with_num_flies(mut self, num_flies: usize) -> Self {
        self.config.num_flies = num_flies;
        self
    }

    /// Sets half-width of the search space.
    pub fn with_bound(mut self, bound: f64) -> Self {
        self.config.bound = bound;
        self
    }

    /// Sets dimension of the search space.
    pub fn with_dim(mut self, dim: usize) -> Self {
        self.config.dim = dim;
        self
    }

    /// Sets disturbance threshold.
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.config.delta = delta;
        self
    }

    /// Sets amount of optimization rounds.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.config.max_iter = max_iter;
        self
    }

    /// Sets update mode.
    pub fn with_update_mode(mut self, update_mode: UpdateMode) -> Self {
        self.config.update_mode = update_mode;
        self
    }

    /// Sets telemetry mode.
    pub fn with_telemetry(mut self, telemetry: TelemetryMode) -> Self {
        self.config.telemetry = telemetry;
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> DfoResult<DfoConfig> {
        self.config.validate()?;

        Ok(self.config)
    }
}
