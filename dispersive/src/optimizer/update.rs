#[cfg(test)]
#[path = "../../tests/unit/optimizer/update_test.rs"]
mod update_test;

use crate::objectives::FitnessFn;
use crate::population::Population;
use crate::utils::{Random, compare_floats};
use std::cmp::Ordering;
use std::ops::Deref;

/// Specifies how an individual observes its ring neighbours during an update pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// Individuals are updated in place by ascending index, so a neighbour which was already
    /// updated in the current round is observed with its new coordinates. Neighbour fitness
    /// is recalculated on each lookup.
    #[default]
    Sequential,
    /// Neighbours are observed as they were at the start of the round, neighbour fitness is
    /// taken from the last evaluation. Produces a different trajectory than `Sequential` for
    /// the same random sequence.
    Synchronous,
}

/// Counts random events which happened during an update pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateStats {
    /// Amount of coordinates replaced by disturbance.
    pub disturbances: usize,
    /// Amount of coordinates resampled because they left the search space.
    pub repairs: usize,
}

/// Keeps parameters of a single update pass.
pub(crate) struct UpdateContext<'a> {
    pub objective: &'a FitnessFn,
    pub random: &'a dyn Random,
    pub mode: UpdateMode,
    pub delta: f64,
}

/// Moves every individual except the best one. Random draws are consumed by ascending individual
/// index and then by ascending coordinate index.
pub(crate) fn update_population(population: &mut Population, best_index: usize, ctx: &UpdateContext) -> UpdateStats {
    let best = population.individual(best_index).to_vec();
    let snapshot = match ctx.mode {
        UpdateMode::Sequential => None,
        UpdateMode::Synchronous => Some(population.positions().to_vec()),
    };

    let mut stats = UpdateStats::default();

    (0..population.size()).filter(|&idx| idx != best_index).for_each(|idx| {
        let anchor = select_neighbour(population, snapshot.as_deref(), idx, ctx);
        let bound = population.bound();

        population.individual_mut(idx).iter_mut().zip(anchor.iter().zip(best.iter())).for_each(
            |(value, (&anchor, &target))| {
                *value = move_coordinate(*value, anchor, target, bound, ctx, &mut stats);
            },
        );
    });

    stats
}

/// Returns coordinates of the fittest ring neighbour, ties favor the right one.
fn select_neighbour(
    population: &Population,
    snapshot: Option<&[Vec<f64>]>,
    idx: usize,
    ctx: &UpdateContext,
) -> Vec<f64> {
    let (left, right) = population.neighbours(idx);

    let (left_fitness, right_fitness) = match snapshot {
        Some(_) => (population.fitness()[left], population.fitness()[right]),
        None => {
            let objective = ctx.objective.deref();
            (objective(population.individual(left)), objective(population.individual(right)))
        }
    };

    // NaN is the worst fitness here, unlike a raw `<` which would always pick the right neighbour
    let is_left = compare_floats(left_fitness, right_fitness) == Ordering::Less;

    let neighbour = if is_left { left } else { right };

    snapshot.map_or_else(|| population.individual(neighbour).to_vec(), |positions| positions[neighbour].clone())
}

fn move_coordinate(
    value: f64,
    anchor: f64,
    target: f64,
    bound: f64,
    ctx: &UpdateContext,
    stats: &mut UpdateStats,
) -> f64 {
    if ctx.random.is_hit(ctx.delta) {
        stats.disturbances += 1;
        return ctx.random.uniform_real(-bound, bound);
    }

    let moved = anchor + ctx.random.uniform_real(0., 1.) * (target - value);

    if !(-bound..=bound).contains(&moved) {
        stats.repairs += 1;
        ctx.random.uniform_real(-bound, bound)
    } else {
        moved
    }
}
