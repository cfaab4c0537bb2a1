//! Contains command line extensions: configuration reading and result serialization.

pub mod solve;
