use super::*;
use crate::helpers::optimizer::create_population;
use crate::objectives::create_sphere_function;
use std::sync::{Arc, Mutex};

fn create_collecting_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    (logger, messages)
}

fn create_evaluated_population() -> Population {
    let mut population = create_population(vec![vec![2., 2.], vec![0.5, -0.5], vec![1., 0.]], 5.);
    population.evaluate(&create_sphere_function());

    population
}

fn report_rounds(telemetry: &mut Telemetry, rounds: usize) {
    let population = create_evaluated_population();

    (0..rounds).for_each(|round| {
        telemetry.on_round(round, &population, 1, UpdateStats { disturbances: round, repairs: 0 }, Timer::start())
    });
    telemetry.on_result(&population, 1);
}

#[test]
fn can_track_rounds_with_frequency() {
    let mut telemetry = Telemetry::new(TelemetryMode::OnlyMetrics { track_rounds: 3 });

    report_rounds(&mut telemetry, 7);

    let metrics = telemetry.take_metrics().expect("no metrics");
    assert_eq!(metrics.rounds, 7);
    assert_eq!(metrics.evolution.iter().map(|round| round.number).collect::<Vec<_>>(), vec![0, 3, 6]);

    let round = metrics.evolution.last().unwrap();
    assert_eq!(round.best_index, 1);
    assert_eq!(round.best_fitness, 1.5);
    assert_eq!(round.best_individual, vec![0.5, -0.5]);
    assert_eq!(round.stats.disturbances, 6);
}

#[test]
fn can_log_best_individual_with_frequency() {
    let (logger, messages) = create_collecting_logger();
    let mut telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger, log_best: 2 });

    report_rounds(&mut telemetry, 5);

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 5);
    assert!(messages[0].contains("round 0 took"));
    assert!(messages[0].contains("best fly 1: [0.500000, -0.500000], fitness: 1.5"));
    assert!(messages[1].contains("round 2 took"));
    assert!(messages[2].contains("round 4 took"));
    assert!(messages[3].contains("total rounds: 5"));
    assert_eq!(messages[4], "\tbest fly: [0.500000, -0.500000], fitness: 1.5");
    assert!(telemetry.take_metrics().is_none());
}

#[test]
fn can_log_and_track_with_zero_frequency() {
    let (logger, messages) = create_collecting_logger();
    let mut telemetry = Telemetry::new(TelemetryMode::All { logger, log_best: 0, track_rounds: 0 });

    report_rounds(&mut telemetry, 3);

    assert_eq!(messages.lock().unwrap().len(), 5);
    assert_eq!(telemetry.take_metrics().expect("no metrics").evolution.len(), 3);
}

#[test]
fn can_stay_silent_without_telemetry() {
    let mut telemetry = Telemetry::new(TelemetryMode::None);

    report_rounds(&mut telemetry, 3);

    assert!(telemetry.take_metrics().is_none());
}
