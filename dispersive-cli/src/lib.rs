//! A crate for running Dispersive Flies Optimization from command line.
//!
//! It provides a JSON configuration format for the optimizer and serializes the optimization
//! result together with optional metrics.

#![warn(missing_docs)]

pub mod extensions;
