// Copyright (c) 2025 - Cowboy AI, Inc.
//! Stepwise bed configurator
//!
//! A [`BedBuilder`] owns one [`Bed`] and assembles it through setter-style
//! steps (legs, frame, box spring, mattress, pillows, sheets, duvet). The leg
//! count is validated only when the bed is requested.

pub mod builder;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use builder::BedBuilder;
pub use config::{LegCountPolicy, PolicyError};
pub use domain::{Bed, ValidationError, ValidationResult};
