//! This crate implements Dispersive Flies Optimization (DFO): a swarm metaheuristic which searches
//! a bounded continuous space for the point minimizing a scalar objective function.
//!
//! Each round, the swarm is evaluated, the best fly is selected and every other fly is moved
//! relative to its fittest ring neighbour and the best fly. A coordinate is occasionally
//! disturbed, i.e. replaced by a uniform sample, and coordinates which leave the search space
//! are resampled.
//!
//! # Examples
//!
//! ```
//! use dispersive::prelude::*;
//! use std::sync::Arc;
//!
//! let config = DfoConfigBuilder::default().with_num_flies(20).with_max_iter(50).build()?;
//! let environment = Arc::new(Environment::new_repeatable(42));
//!
//! let mut flies = DispersiveFlies::new(config, create_sphere_function(), environment)?;
//! let best = flies.train();
//!
//! assert_eq!(best.len(), 2);
//! # Ok::<(), DfoError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod objectives;
pub mod optimizer;
pub mod population;
pub mod prelude;
pub mod utils;
