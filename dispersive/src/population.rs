//! This module contains the swarm state: flies positions and their fitness values.

#[cfg(test)]
#[path = "../tests/unit/population_test.rs"]
mod population_test;

use crate::objectives::FitnessFn;
use crate::utils::{Random, compare_floats};
use std::ops::Deref;

/// Keeps positions of flies together with a parallel array of their fitness values.
///
/// Positions and fitness values correspond to each other only right after `evaluate` is called:
/// the optimizer overwrites positions in place afterwards.
pub struct Population {
    positions: Vec<Vec<f64>>,
    fitness: Vec<f64>,
    bound: f64,
}

impl Population {
    /// Creates a population of `num_flies` individuals with `dim` coordinates each, every coordinate
    /// is drawn independently from the uniform distribution over `[-bound, bound]`.
    /// Draws are taken individual by individual, coordinate by coordinate.
    pub fn initialize(num_flies: usize, dim: usize, bound: f64, random: &dyn Random) -> Self {
        let positions = (0..num_flies)
            .map(|_| (0..dim).map(|_| random.uniform_real(-bound, bound)).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        Self { positions, fitness: vec![f64::INFINITY; num_flies], bound }
    }

    /// Recalculates fitness of every individual.
    pub fn evaluate(&mut self, objective: &FitnessFn) {
        self.positions.iter().zip(self.fitness.iter_mut()).for_each(|(individual, fitness)| {
            *fitness = objective.deref()(individual.as_slice());
        });
    }

    /// Returns index of the individual with the lowest fitness: the first one wins ties and NaN
    /// fitness is never preferred over a number.
    pub fn best_index(&self) -> usize {
        self.fitness.iter().enumerate().min_by(|(_, a), (_, b)| compare_floats(**a, **b)).map_or(0, |(idx, _)| idx)
    }

    /// Returns indices of left and right neighbours in the ring topology.
    pub fn neighbours(&self, idx: usize) -> (usize, usize) {
        let size = self.size();

        ((idx + size - 1) % size, (idx + 1) % size)
    }

    /// Returns amount of individuals.
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Returns half-width of the search space.
    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Returns positions of all individuals.
    pub fn positions(&self) -> &[Vec<f64>] {
        self.positions.as_slice()
    }

    /// Returns fitness values as they were calculated by the last evaluation.
    pub fn fitness(&self) -> &[f64] {
        self.fitness.as_slice()
    }

    /// Returns coordinates of the individual with given index.
    pub fn individual(&self, idx: usize) -> &[f64] {
        self.positions[idx].as_slice()
    }

    /// Checks whether every coordinate of every individual lies within `[-bound, bound]`.
    pub fn is_in_bounds(&self) -> bool {
        self.positions.iter().flatten().all(|&value| (-self.bound..=self.bound).contains(&value))
    }

    /// Projects every individual on the plane formed by two dimensions. A missing dimension is
    /// projected to zero.
    pub fn projection(&self, x_dim: usize, y_dim: usize) -> Vec<(f64, f64)> {
        self.positions
            .iter()
            .map(|individual| {
                (individual.get(x_dim).copied().unwrap_or_default(), individual.get(y_dim).copied().unwrap_or_default())
            })
            .collect()
    }

    pub(crate) fn individual_mut(&mut self, idx: usize) -> &mut [f64] {
        self.positions[idx].as_mut_slice()
    }
}
