//! A command line interface to *Dispersive Flies Optimization*.
//!
//! ## Usage
//!
//! - minimize two dimensional sphere function with default settings
//!
//!     `dispersive solve`
//!
//! - minimize rastrigin function in five dimensions using fixed seed and writing result to file
//!
//!     `dispersive solve --function rastrigin -d 5 --seed 42 -o result.json`
//!
//! - use algorithm configuration file
//!
//!     `dispersive solve --config config.json`

mod commands;

use self::commands::create_write_buffer;
use self::commands::solve::{get_solve_app, run_solve};
use clap::Command;
use std::process;

fn main() {
    let matches = Command::new("Dispersive Flies Optimization")
        .version("0.1")
        .author("Ilya Builuk <ilya.builuk@gmail.com>")
        .about("A command line interface to Dispersive Flies Optimization")
        .subcommand(get_solve_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
