//! This module contains the optimization loop and its building blocks.

mod config;
pub use self::config::*;

mod flies;
pub use self::flies::*;

mod telemetry;
pub use self::telemetry::*;

mod update;
pub(crate) use self::update::{UpdateContext, update_population};
pub use self::update::{UpdateMode, UpdateStats};
