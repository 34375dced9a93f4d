//! Lichaamsverhoudingen afgeleid van een enkele polsmaat.

pub mod config;
pub mod measured;
pub mod proportion;

pub use config::{ConfigError, ProportionConfig};
pub use measured::CurrentMeasurements;
pub use proportion::{ProportionModel, Segment};
