use super::*;
use crate::helpers::utils::random::EchoRandom;

#[test]
fn can_produce_values_in_range() {
    let random = DefaultRandom::default();

    (0..1000).for_each(|_| {
        let value = random.uniform_real(-5., 5.);
        assert!((-5. ..5.).contains(&value));
    });
}

#[test]
fn can_return_min_for_empty_range() {
    let random = DefaultRandom::default();

    assert_eq!(random.uniform_real(2., 2.), 2.);
}

#[test]
fn can_sample_range_narrower_than_epsilon() {
    let random = DefaultRandom::new_repeatable(0);

    let values = (0..100).map(|_| random.uniform_real(-1E-17, 1E-17)).collect::<Vec<_>>();

    assert!(values.iter().all(|value| (-1E-17..1E-17).contains(value)));
    assert!(values.iter().any(|&value| value != -1E-17));
}

#[test]
fn can_repeat_sequence_with_same_seed() {
    let first = DefaultRandom::new_repeatable(42);
    let second = DefaultRandom::new_repeatable(42);
    let third = DefaultRandom::new_repeatable(43);

    let first = (0..100).map(|_| first.uniform_real(0., 1.)).collect::<Vec<_>>();
    let second = (0..100).map(|_| second.uniform_real(0., 1.)).collect::<Vec<_>>();
    let third = (0..100).map(|_| third.uniform_real(0., 1.)).collect::<Vec<_>>();

    assert_eq!(first, second);
    assert_ne!(first, third);
}

parameterized_test! {can_detect_hit, (probability, expected), {
    can_detect_hit_impl(probability, expected);
}}

can_detect_hit! {
    case01_never: (0., false),
    case02_negative: (-0.5, false),
    case03_always: (1., true),
    case04_above_one: (1.5, true),
}

fn can_detect_hit_impl(probability: f64, expected: bool) {
    let random = DefaultRandom::new_repeatable(0);

    assert!((0..1000).all(|_| random.is_hit(probability) == expected));
}

#[test]
fn can_compare_hit_against_single_draw() {
    assert!(EchoRandom::new(true).is_hit(0.001));
    assert!(!EchoRandom::new(false).is_hit(0.999));
    assert!(!EchoRandom::new(true).is_hit(0.));
}
