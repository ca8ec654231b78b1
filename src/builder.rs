// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bed Builder
//!
//! Stepwise configurator that owns one [`Bed`] and mutates it in place.
//!
//! Configuration steps may be called in any order and any number of times.
//! Only [`BedBuilder::bed`] (and [`BedBuilder::into_bed`]) validate; they do
//! not freeze the bed, so further configuration is still possible afterwards.
//!
//! # Example
//!
//! ```rust
//! use bed_builder::BedBuilder;
//!
//! let mut builder = BedBuilder::new();
//! builder
//!     .specify_number_of_legs(6)
//!     .set_leg_specs(10.0, 10.0, 30.0, "oak", 1.5)
//!     .create_bed_frame(80.0, 60.0, 30.0, "oak", 40.0);
//!
//! let bed = builder.bed().unwrap();
//! assert_eq!(bed.number_of_legs(), 6);
//!
//! let mut wobbly = BedBuilder::new();
//! wobbly.specify_number_of_legs(3);
//! assert!(wobbly.bed().is_err());
//! ```

use tracing::{debug, warn};

use crate::config::LegCountPolicy;
use crate::domain::{Bed, BoxSpring, Duvet, Frame, Mattress, Sheet, ValidationError};

/// Builder for [`Bed`] with a mutable, chainable API
#[derive(Debug, Clone, Default)]
pub struct BedBuilder {
    bed: Bed,
    policy: LegCountPolicy,
}

impl BedBuilder {
    /// Create a builder holding a fresh, empty bed and the default leg policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder that validates against a custom leg policy
    pub fn with_policy(policy: LegCountPolicy) -> Self {
        Self {
            bed: Bed::new(),
            policy,
        }
    }

    pub fn policy(&self) -> &LegCountPolicy {
        &self.policy
    }

    /// Work in progress, without validation
    pub fn current(&self) -> &Bed {
        &self.bed
    }

    /// Append `count` legs. No bounds check until finalization.
    pub fn specify_number_of_legs(&mut self, count: usize) -> &mut Self {
        self.bed.build_legs(count);
        debug!(added = count, total = self.bed.number_of_legs(), "legs added");
        self
    }

    /// Apply the same specs to every leg currently on the bed
    ///
    /// Legs added afterwards stay unspecified until this is called again.
    pub fn set_leg_specs(
        &mut self,
        length: f64,
        width: f64,
        height: f64,
        material: impl Into<String>,
        weight: f64,
    ) -> &mut Self {
        let material = material.into();
        for leg in &mut self.bed.legs {
            leg.length = Some(length);
            leg.width = Some(width);
            leg.height = Some(height);
            leg.material = Some(material.clone());
            leg.weight = Some(weight);
        }
        debug!(legs = self.bed.number_of_legs(), %material, "leg specs applied");
        self
    }

    /// Replace the frame
    pub fn create_bed_frame(
        &mut self,
        length: f64,
        width: f64,
        height: f64,
        material: impl Into<String>,
        weight: f64,
    ) -> &mut Self {
        self.bed.frame = Some(Frame::new(length, width, height, material, weight));
        debug!("frame created");
        self
    }

    /// Replace the box spring
    pub fn create_box_spring(
        &mut self,
        length: f64,
        width: f64,
        height: f64,
        material: impl Into<String>,
        weight: f64,
    ) -> &mut Self {
        self.bed.box_spring = Some(BoxSpring::new(length, width, height, material, weight));
        debug!("box spring created");
        self
    }

    /// Replace the mattress
    pub fn create_mattress(
        &mut self,
        length: f64,
        width: f64,
        height: f64,
        material: impl Into<String>,
        size: impl Into<String>,
        weight: f64,
    ) -> &mut Self {
        self.bed.mattress = Some(Mattress::new(
            length, width, height, material, size, weight,
        ));
        debug!("mattress created");
        self
    }

    pub fn specify_number_of_pillows(&mut self, count: usize) -> &mut Self {
        self.bed.build_pillows(count);
        debug!(
            added = count,
            total = self.bed.number_of_pillows(),
            "pillows added"
        );
        self
    }

    /// Apply the same specs to every pillow currently on the bed
    pub fn set_pillow_specs(
        &mut self,
        size: impl Into<String>,
        material: impl Into<String>,
        filling: impl Into<String>,
    ) -> &mut Self {
        let size = size.into();
        let material = material.into();
        let filling = filling.into();
        for pillow in &mut self.bed.pillows {
            pillow.size = Some(size.clone());
            pillow.material = Some(material.clone());
            pillow.filling = Some(filling.clone());
        }
        debug!(pillows = self.bed.number_of_pillows(), "pillow specs applied");
        self
    }

    /// Replace the sheets
    pub fn create_sheets(
        &mut self,
        size: impl Into<String>,
        material: impl Into<String>,
        thread_count: u32,
        color: impl Into<String>,
    ) -> &mut Self {
        self.bed.sheets = Some(Sheet::new(size, material, thread_count, color));
        debug!("sheets created");
        self
    }

    /// Replace the duvet
    pub fn create_duvet(
        &mut self,
        size: impl Into<String>,
        material: impl Into<String>,
        color: impl Into<String>,
    ) -> &mut Self {
        self.bed.duvet = Some(Duvet::new(size, material, color));
        debug!("duvet created");
        self
    }

    /// Validate and return the bed
    ///
    /// Re-checks the current state on every call.
    ///
    /// # Errors
    /// - [`ValidationError::TooFewLegs`] when legs ≤ the policy minimum
    /// - [`ValidationError::TooManyLegs`] when legs > the policy maximum
    pub fn bed(&self) -> Result<&Bed, ValidationError> {
        self.check()?;
        Ok(&self.bed)
    }

    /// Validate and hand over ownership of the bed
    pub fn into_bed(self) -> Result<Bed, ValidationError> {
        self.check()?;
        Ok(self.bed)
    }

    fn check(&self) -> Result<(), ValidationError> {
        self.bed.validate(&self.policy).inspect_err(|err| {
            warn!(legs = self.bed.number_of_legs(), error = %err, "bed rejected");
        })
    }
}
