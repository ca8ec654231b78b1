// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Bed Assembly
//!
//! Leg count validation, uniform spec application and repeatable
//! finalization, checked over generated counts.

use bed_builder::domain::BedLeg;
use bed_builder::{BedBuilder, ValidationError};
use proptest::prelude::*;

/// Leg counts accepted by the default policy
fn valid_leg_count() -> impl Strategy<Value = usize> {
    5usize..=10
}

proptest! {
    /// Property: every count in (4, 10] finalizes with exactly that many legs
    #[test]
    fn prop_valid_leg_counts_succeed(count in valid_leg_count()) {
        let mut builder = BedBuilder::new();
        builder.specify_number_of_legs(count);

        let bed = builder.bed();
        prop_assert!(bed.is_ok());
        prop_assert_eq!(bed.unwrap().number_of_legs(), count);
    }

    /// Property: four or fewer legs is always "too few"
    #[test]
    fn prop_too_few_legs(count in 0usize..=4) {
        let mut builder = BedBuilder::new();
        builder.specify_number_of_legs(count);

        prop_assert_eq!(
            builder.bed().unwrap_err(),
            ValidationError::TooFewLegs { count, minimum_exclusive: 4 }
        );
    }

    /// Property: more than ten legs is always "too many"
    #[test]
    fn prop_too_many_legs(count in 11usize..200) {
        let mut builder = BedBuilder::new();
        builder.specify_number_of_legs(count);

        prop_assert_eq!(
            builder.bed().unwrap_err(),
            ValidationError::TooManyLegs { count, maximum: 10 }
        );
    }

    /// Property: legs split across calls add up
    #[test]
    fn prop_leg_calls_are_additive(parts in prop::collection::vec(0usize..4, 0..6)) {
        let mut builder = BedBuilder::new();
        for part in &parts {
            builder.specify_number_of_legs(*part);
        }

        let total: usize = parts.iter().sum();
        prop_assert_eq!(builder.current().number_of_legs(), total);
        prop_assert_eq!(builder.bed().is_ok(), (5..=10).contains(&total));
    }

    /// Property: leg specs set all five fields of the first k legs and
    /// leave legs added later untouched
    #[test]
    fn prop_leg_specs_only_touch_existing_legs(
        before in 0usize..8,
        after in 0usize..8,
        length in 1.0f64..100.0,
        width in 100.0f64..200.0,
        height in 200.0f64..300.0,
        weight in 300.0f64..400.0,
    ) {
        let mut builder = BedBuilder::new();
        builder
            .specify_number_of_legs(before)
            .set_leg_specs(length, width, height, "ash", weight)
            .specify_number_of_legs(after);

        let legs = builder.current().legs();
        prop_assert_eq!(legs.len(), before + after);
        for leg in &legs[..before] {
            prop_assert_eq!(leg.length, Some(length));
            prop_assert_eq!(leg.width, Some(width));
            prop_assert_eq!(leg.height, Some(height));
            prop_assert_eq!(leg.material.as_deref(), Some("ash"));
            prop_assert_eq!(leg.weight, Some(weight));
        }
        for leg in &legs[before..] {
            prop_assert_eq!(leg, &BedLeg::default());
        }
    }

    /// Property: pillow specs reach every pillow and never change leg count
    #[test]
    fn prop_pillow_specs_apply_to_all(pillows in 0usize..12, legs in valid_leg_count()) {
        let mut builder = BedBuilder::new();
        builder
            .specify_number_of_legs(legs)
            .specify_number_of_pillows(pillows)
            .set_pillow_specs("standard", "cotton", "buckwheat");

        let bed = builder.bed().unwrap();
        prop_assert_eq!(bed.number_of_legs(), legs);
        prop_assert_eq!(bed.number_of_pillows(), pillows);
        for pillow in bed.pillows() {
            prop_assert_eq!(pillow.size.as_deref(), Some("standard"));
            prop_assert_eq!(pillow.material.as_deref(), Some("cotton"));
            prop_assert_eq!(pillow.filling.as_deref(), Some("buckwheat"));
        }
    }

    /// Property: finalizing twice without mutation gives equal results
    #[test]
    fn prop_finalize_is_repeatable(count in 0usize..15) {
        let mut builder = BedBuilder::new();
        builder.specify_number_of_legs(count);

        let first = builder.bed().cloned();
        let second = builder.bed().cloned();
        prop_assert_eq!(first, second);
    }
}
