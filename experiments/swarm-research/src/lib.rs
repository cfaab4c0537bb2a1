//! A playground for visualizing how a swarm of flies converges.

#![warn(missing_docs)]

pub mod experiment;
pub mod plots;
