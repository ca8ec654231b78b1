// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bed Aggregate
//!
//! The composite being assembled. A bed exclusively owns all of its parts:
//! an ordered list of legs, an ordered list of pillows, and at most one each
//! of frame, box spring, mattress, sheets and duvet.
//!
//! # Invariants
//! - Leg count must satisfy the [`LegCountPolicy`] (checked by [`Bed::validate`],
//!   never at mutation time)

use crate::config::LegCountPolicy;

use super::invariants::{validate_leg_count, ValidationResult};
use super::parts::{BedLeg, BoxSpring, Duvet, Frame, Mattress, Pillow, Sheet};

/// Bed aggregate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bed {
    pub(crate) legs: Vec<BedLeg>,
    pub(crate) pillows: Vec<Pillow>,
    pub(crate) frame: Option<Frame>,
    pub(crate) box_spring: Option<BoxSpring>,
    pub(crate) mattress: Option<Mattress>,
    pub(crate) sheets: Option<Sheet>,
    pub(crate) duvet: Option<Duvet>,
}

impl Bed {
    /// Create an empty bed: no legs, no pillows, no optional parts
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `count` unspecified legs
    ///
    /// Repeated calls are additive.
    pub fn build_legs(&mut self, count: usize) {
        self.legs.extend(std::iter::repeat_with(BedLeg::new).take(count));
    }

    /// Append `count` unspecified pillows
    ///
    /// Repeated calls are additive. Pillows never count as legs.
    pub fn build_pillows(&mut self, count: usize) {
        self.pillows.extend(std::iter::repeat_with(Pillow::new).take(count));
    }

    pub fn number_of_legs(&self) -> usize {
        self.legs.len()
    }

    pub fn number_of_pillows(&self) -> usize {
        self.pillows.len()
    }

    pub fn legs(&self) -> &[BedLeg] {
        &self.legs
    }

    pub fn pillows(&self) -> &[Pillow] {
        &self.pillows
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn box_spring(&self) -> Option<&BoxSpring> {
        self.box_spring.as_ref()
    }

    pub fn mattress(&self) -> Option<&Mattress> {
        self.mattress.as_ref()
    }

    pub fn sheets(&self) -> Option<&Sheet> {
        self.sheets.as_ref()
    }

    pub fn duvet(&self) -> Option<&Duvet> {
        self.duvet.as_ref()
    }

    /// Validate invariants for the current state
    pub fn validate(&self, policy: &LegCountPolicy) -> ValidationResult {
        validate_leg_count(self.number_of_legs(), policy)
    }
}
