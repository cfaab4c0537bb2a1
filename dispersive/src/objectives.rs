//! This module contains objective functions which can be minimized by the optimizer.

#[cfg(test)]
#[path = "../tests/unit/objectives_test.rs"]
mod objectives_test;

use std::sync::Arc;

/// An objective function which calculates a fitness of a vector, lower is better.
pub type FitnessFn = Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// Creates a sphere function shifted by one: the global minimum is `1` at the origin.
pub fn create_sphere_function() -> FitnessFn {
    Arc::new(|input: &[f64]| input.iter().fold(1., |acc, &item| acc + item * item))
}

/// Creates multidimensional Rosenbrock function, also referred to as the Valley or Banana function.
/// The function is usually evaluated on the hypercube xi ∈ [-5, 10], for all i = 1, …, d, although
/// it may be restricted to the hypercube xi ∈ [-2.048, 2.048], for all i = 1, …, d.
/// A vector with less than two dimensions always has zero fitness.
pub fn create_rosenbrock_function() -> FitnessFn {
    Arc::new(|input: &[f64]| {
        input.windows(2).fold(0., |acc, pair| {
            let (x1, x2) = match pair {
                [x1, x2] => (*x1, *x2),
                _ => unreachable!(),
            };

            acc + 100. * (x2 - x1.powi(2)).powi(2) + (x1 - 1.).powi(2)
        })
    })
}

/// Creates Rastrigin function: highly multimodal with the global minimum `0` at the origin.
pub fn create_rastrigin_function() -> FitnessFn {
    Arc::new(|input: &[f64]| {
        let a = 10.;
        input
            .iter()
            .fold(a * input.len() as f64, |acc, &item| acc + item * item - a * (2. * std::f64::consts::PI * item).cos())
    })
}

/// Returns objective function by its name.
pub fn get_fitness_fn_by_name(name: &str) -> Option<FitnessFn> {
    match name {
        "sphere" => Some(create_sphere_function()),
        "rosenbrock" => Some(create_rosenbrock_function()),
        "rastrigin" => Some(create_rastrigin_function()),
        _ => None,
    }
}
