//! This module reimports a common used types.

pub use crate::objectives::FitnessFn;
pub use crate::objectives::create_sphere_function;
pub use crate::objectives::get_fitness_fn_by_name;

pub use crate::optimizer::DfoConfig;
pub use crate::optimizer::DfoConfigBuilder;
pub use crate::optimizer::DispersiveFlies;
pub use crate::optimizer::TelemetryMetrics;
pub use crate::optimizer::TelemetryMode;
pub use crate::optimizer::UpdateMode;

pub use crate::population::Population;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
pub use crate::utils::{compare_floats, compare_floats_refs};
pub use crate::utils::{DfoError, DfoResult};
