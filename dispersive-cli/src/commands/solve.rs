#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use clap::{Arg, ArgAction, ArgMatches, Command};
use dispersive::prelude::*;
use dispersive_cli::extensions::solve::config::*;
use dispersive_cli::extensions::solve::formats::{OptimizationResult, write_result_json};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::sync::Arc;

const CONFIG_ARG_NAME: &str = "config";
const FUNCTION_ARG_NAME: &str = "function";
const NUM_FLIES_ARG_NAME: &str = "num-flies";
const BOUND_ARG_NAME: &str = "bound";
const DIM_ARG_NAME: &str = "dim";
const DELTA_ARG_NAME: &str = "delta";
const MAX_ITERATIONS_ARG_NAME: &str = "max-iterations";
const SYNCHRONOUS_ARG_NAME: &str = "synchronous";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const LOG_ARG_NAME: &str = "log";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Minimizes objective function using Dispersive Flies Optimization")
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(FUNCTION_ARG_NAME)
                .help("Specifies objective function to minimize")
                .long(FUNCTION_ARG_NAME)
                .required(false)
                .value_parser(["sphere", "rosenbrock", "rastrigin"]),
        )
        .arg(
            Arg::new(NUM_FLIES_ARG_NAME)
                .help("Specifies population size")
                .short('n')
                .long(NUM_FLIES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(BOUND_ARG_NAME)
                .help("Specifies half-width of the search space")
                .short('b')
                .long(BOUND_ARG_NAME)
                .required(false)
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new(DIM_ARG_NAME)
                .help("Specifies dimension of the search space")
                .short('d')
                .long(DIM_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(DELTA_ARG_NAME)
                .help("Specifies disturbance threshold")
                .long(DELTA_ARG_NAME)
                .required(false)
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new(MAX_ITERATIONS_ARG_NAME)
                .help("Specifies amount of optimization rounds")
                .short('i')
                .long(MAX_ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SYNCHRONOUS_ARG_NAME)
                .help("Specifies whether neighbours are observed as they were at the start of the round")
                .long(SYNCHRONOUS_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .short('s')
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging into stderr is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output, stdout is used by default")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

/// Runs solve command.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();
    let config = override_config(config, matches)?;

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    // stdout is reserved for the result when no output file is given
    let logger: InfoLogger = Arc::new(|msg: &str| eprintln!("{msg}"));
    let objective = get_objective_from_config(&config)?;
    let environment = Arc::new(create_environment_from_config(&config, logger.clone()));

    let mut flies = create_builder_from_config(&config, logger)
        .build()
        .and_then(|dfo_config| DispersiveFlies::new(dfo_config, objective, environment))
        .map_err(|err| format!("cannot create optimizer: '{err}'"))?;

    let rounds = flies.config().max_iter;
    let (individual, fitness, metrics) = flies.train_with_telemetry();

    write_result_json(&OptimizationResult::new(individual, fitness, rounds, metrics), out_writer_func(out_result))
}

/// Applies command line arguments on top of the configuration file values.
fn override_config(config: Config, matches: &ArgMatches) -> Result<Config, String> {
    let mut config = config;

    let num_flies = parse_int_value::<usize>(matches, NUM_FLIES_ARG_NAME, "num flies")?;
    let bound = parse_float_value::<f64>(matches, BOUND_ARG_NAME, "bound")?;
    let dim = parse_int_value::<usize>(matches, DIM_ARG_NAME, "dim")?;
    let delta = parse_float_value::<f64>(matches, DELTA_ARG_NAME, "delta")?;
    let max_iterations = parse_int_value::<usize>(matches, MAX_ITERATIONS_ARG_NAME, "max iterations")?;
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")?;

    let swarm = config.swarm.get_or_insert_with(SwarmConfig::default);
    swarm.num_flies = num_flies.or(swarm.num_flies);
    swarm.bound = bound.or(swarm.bound);
    swarm.dim = dim.or(swarm.dim);
    swarm.delta = delta.or(swarm.delta);

    if let Some(max_iterations) = max_iterations {
        config.termination = Some(TerminationConfig { max_iterations: Some(max_iterations) });
    }

    if let Some(seed) = seed {
        config.random = Some(RandomConfig { seed: Some(seed) });
    }

    if let Some(name) = matches.get_one::<String>(FUNCTION_ARG_NAME) {
        config.objective = Some(ObjectiveConfig { name: name.clone() });
    }

    if matches.get_flag(SYNCHRONOUS_ARG_NAME) {
        config.update = Some(UpdateType::Synchronous);
    }

    if matches.get_flag(LOG_ARG_NAME) {
        let telemetry = config.telemetry.get_or_insert_with(TelemetryConfig::default);
        let log_best = telemetry.logging.as_ref().and_then(|logging| logging.log_best);
        telemetry.logging = Some(LoggingConfig { enabled: true, log_best });
    }

    Ok(config)
}
