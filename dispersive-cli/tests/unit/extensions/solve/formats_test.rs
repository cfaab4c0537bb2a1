use super::*;
use dispersive::prelude::*;
use std::sync::Arc;

fn write_to_string(result: &OptimizationResult) -> String {
    let mut buffer = Vec::new();
    write_result_json(result, BufWriter::new(&mut buffer)).expect("cannot write result");

    String::from_utf8(buffer).expect("not a utf8 string")
}

#[test]
fn can_write_result_without_metrics() {
    let result = OptimizationResult::new(vec![0.5, -0.25], 1.3125, 200, None);

    let json: serde_json::Value = serde_json::from_str(write_to_string(&result).as_str()).unwrap();

    assert_eq!(json, serde_json::json!({ "individual": [0.5, -0.25], "fitness": 1.3125, "rounds": 200 }));
}

#[test]
fn can_write_result_with_metrics() {
    let config = DfoConfigBuilder::default()
        .with_num_flies(10)
        .with_max_iter(6)
        .with_delta(1.)
        .with_telemetry(TelemetryMode::OnlyMetrics { track_rounds: 3 })
        .build()
        .unwrap();
    let environment = Arc::new(Environment::new(Arc::new(DefaultRandom::new_repeatable(0)), Arc::new(|_: &str| {})));
    let mut flies = DispersiveFlies::new(config, create_sphere_function(), environment).unwrap();
    let (individual, fitness, metrics) = flies.train_with_telemetry();

    let result = OptimizationResult::new(individual, fitness, 6, metrics);
    let json: serde_json::Value = serde_json::from_str(write_to_string(&result).as_str()).unwrap();

    let evolution = json["metrics"]["evolution"].as_array().unwrap();
    assert_eq!(evolution.len(), 2);
    assert_eq!(evolution[0]["number"], 0);
    assert_eq!(evolution[1]["number"], 3);
    assert_eq!(evolution[1]["disturbances"], 18);
    assert_eq!(evolution[1]["repairs"], 0);
    assert!(evolution[1]["bestFitness"].as_f64().is_some());
}
