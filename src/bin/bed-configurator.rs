// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bed Configurator Demo
//!
//! Assembles a sample bed and reports whether it passes validation.
//!
//! Run with: cargo run --bin bed-configurator
//!
//! Environment:
//! - `BED_LEGS` (default 6)
//! - `BED_PILLOWS` (default 2)
//! - `BED_MIN_LEGS_EXCLUSIVE` (default 4)
//! - `BED_MAX_LEGS` (default 10)

use std::env::VarError;

use anyhow::{Context, Result};
use bed_builder::{BedBuilder, LegCountPolicy};
use tracing::info;

/// Configuration for the demo run
#[derive(Debug, Clone)]
struct DemoConfig {
    legs: usize,
    pillows: usize,
    policy: LegCountPolicy,
}

impl DemoConfig {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        let legs = env_or("BED_LEGS", 6)?;
        let pillows = env_or("BED_PILLOWS", 2)?;
        let policy = LegCountPolicy::new(
            env_or(
                "BED_MIN_LEGS_EXCLUSIVE",
                LegCountPolicy::DEFAULT_MINIMUM_EXCLUSIVE,
            )?,
            env_or("BED_MAX_LEGS", LegCountPolicy::DEFAULT_MAXIMUM)?,
        )
        .context("invalid BED_MIN_LEGS_EXCLUSIVE / BED_MAX_LEGS")?;

        Ok(Self {
            legs,
            pillows,
            policy,
        })
    }
}

fn env_or(key: &str, default: usize) -> Result<usize> {
    parse_count(key, std::env::var(key), default)
}

/// Only an absent variable falls back to the default
fn parse_count(key: &str, value: Result<String, VarError>, default: usize) -> Result<usize> {
    match value {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{key} must be a non-negative integer, got {value:?}")),
        Err(VarError::NotPresent) => Ok(default),
        Err(err @ VarError::NotUnicode(_)) => {
            Err(err).with_context(|| format!("{key} is set but is not valid unicode"))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = DemoConfig::from_env()?;
    info!(?config, "Starting bed configurator");

    let mut builder = BedBuilder::with_policy(config.policy);
    builder
        .specify_number_of_legs(config.legs)
        .set_leg_specs(8.0, 8.0, 30.0, "oak", 1.2)
        .create_bed_frame(200.0, 160.0, 30.0, "oak", 40.0)
        .create_box_spring(200.0, 160.0, 20.0, "steel", 25.0)
        .create_mattress(200.0, 160.0, 25.0, "latex", "queen", 30.0)
        .specify_number_of_pillows(config.pillows)
        .set_pillow_specs("queen", "cotton", "down")
        .create_sheets("queen", "cotton", 400, "white")
        .create_duvet("queen", "cotton", "grey");

    let bed = builder.bed().context("bed failed validation")?;

    info!(
        legs = bed.number_of_legs(),
        pillows = bed.number_of_pillows(),
        mattress = bed.mattress().map(|m| m.size()).unwrap_or("none"),
        "Bed assembled"
    );

    Ok(())
}
