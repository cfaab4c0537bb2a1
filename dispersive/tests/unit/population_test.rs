use super::*;
use crate::helpers::optimizer::create_population;
use crate::helpers::utils::random::FakeRandom;
use crate::objectives::create_sphere_function;
use crate::utils::DefaultRandom;

#[test]
fn can_initialize_population_within_bounds() {
    let random = DefaultRandom::new_repeatable(0);

    let population = Population::initialize(100, 3, 2.5, &random);

    assert_eq!(population.size(), 100);
    assert!(population.positions().iter().all(|individual| individual.len() == 3));
    assert!(population.is_in_bounds());
    assert_eq!(population.bound(), 2.5);
}

#[test]
fn can_sample_uniformly_within_tiny_bound() {
    let random = DefaultRandom::new_repeatable(0);

    let population = Population::initialize(5, 2, 1E-17, &random);

    let coordinates = population.positions().iter().flatten().collect::<Vec<_>>();
    assert!(population.is_in_bounds());
    assert!(coordinates.iter().any(|&&value| value != -1E-17));
    assert!(coordinates.windows(2).any(|pair| pair[0] != pair[1]));
}

#[test]
fn can_consume_draws_individual_by_individual() {
    let random = FakeRandom::new(vec![1., 2., 3., 4., 5., 6.]);

    let population = Population::initialize(3, 2, 10., &random);

    assert_eq!(population.positions(), &[vec![1., 2.], vec![3., 4.], vec![5., 6.]]);
    assert_eq!(random.remaining(), 0);
}

#[test]
fn can_produce_independent_samples_on_each_initialization() {
    let random = DefaultRandom::new_repeatable(0);

    let first = Population::initialize(10, 2, 5., &random);
    let second = Population::initialize(10, 2, 5., &random);

    assert_ne!(first.positions(), second.positions());
}

#[test]
fn can_evaluate_population() {
    let mut population = create_population(vec![vec![1., 1.], vec![0., 0.], vec![2., 0.]], 5.);

    population.evaluate(&create_sphere_function());

    assert_eq!(population.fitness(), &[3., 1., 5.]);
}

parameterized_test! {can_select_best_index, (fitness, expected), {
    can_select_best_index_impl(fitness, expected);
}}

can_select_best_index! {
    case01_single: (vec![1.], 0),
    case02_middle: (vec![3., 1., 2.], 1),
    case03_tie_first_wins: (vec![2., 1., 1., 3.], 1),
    case04_nan_is_worst: (vec![f64::NAN, 2., 1.], 2),
}

fn can_select_best_index_impl(fitness: Vec<f64>, expected: usize) {
    let population = Population { positions: vec![vec![0.]; fitness.len()], fitness, bound: 1. };

    assert_eq!(population.best_index(), expected);
}

parameterized_test! {can_get_ring_neighbours, (size, idx, expected), {
    can_get_ring_neighbours_impl(size, idx, expected);
}}

can_get_ring_neighbours! {
    case01_first: (5, 0, (4, 1)),
    case02_middle: (5, 2, (1, 3)),
    case03_last: (5, 4, (3, 0)),
    case04_pair: (2, 1, (0, 0)),
    case05_single: (1, 0, (0, 0)),
}

fn can_get_ring_neighbours_impl(size: usize, idx: usize, expected: (usize, usize)) {
    let population = create_population(vec![vec![0.]; size], 1.);

    assert_eq!(population.neighbours(idx), expected);
}

#[test]
fn can_project_population_on_plane() {
    let population = create_population(vec![vec![1., 2., 3.], vec![4., 5., 6.]], 10.);

    assert_eq!(population.projection(0, 1), vec![(1., 2.), (4., 5.)]);
    assert_eq!(population.projection(2, 0), vec![(3., 1.), (6., 4.)]);
    assert_eq!(population.projection(0, 3), vec![(1., 0.), (4., 0.)]);
}

#[test]
fn can_detect_out_of_bounds_coordinates() {
    assert!(create_population(vec![vec![1., -1.], vec![0.5, 0.]], 1.).is_in_bounds());
    assert!(!create_population(vec![vec![1., -1.5], vec![0.5, 0.]], 1.).is_in_bounds());
}
