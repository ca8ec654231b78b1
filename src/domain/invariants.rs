// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Bed Invariants
//!
//! Business rules checked when a bed is finalized. All functions are pure
//! (no side effects) and return detailed validation results.
//!
//! # Invariants
//!
//! - **Leg count**: strictly more than the policy minimum, at most the policy maximum
//!
//! Nothing else is enforced: pillows, frame, box spring, mattress, sheets
//! and duvet may all be absent.

use crate::config::LegCountPolicy;

/// Validation result with detailed error information
pub type ValidationResult = Result<(), ValidationError>;

/// Validation error with context
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Not enough legs to stand on
    #[error("too few legs: a bed must have more than {minimum_exclusive} legs, found {count}")]
    TooFewLegs {
        count: usize,
        minimum_exclusive: usize,
    },

    /// More legs than any bed should have
    #[error("too many legs: {count} is an absurd number of legs for a bed (at most {maximum})")]
    TooManyLegs { count: usize, maximum: usize },
}

impl ValidationError {
    /// Leg count that triggered the failure
    pub fn leg_count(&self) -> usize {
        match self {
            Self::TooFewLegs { count, .. } | Self::TooManyLegs { count, .. } => *count,
        }
    }
}

/// Validate the number of legs against a policy
///
/// # Rules
/// - `count <= minimum_exclusive` → [`ValidationError::TooFewLegs`]
/// - `count > maximum` → [`ValidationError::TooManyLegs`]
pub fn validate_leg_count(count: usize, policy: &LegCountPolicy) -> ValidationResult {
    if count <= policy.minimum_exclusive() {
        return Err(ValidationError::TooFewLegs {
            count,
            minimum_exclusive: policy.minimum_exclusive(),
        });
    }

    if count > policy.maximum() {
        return Err(ValidationError::TooManyLegs {
            count,
            maximum: policy.maximum(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_leg_count_valid() {
        let policy = LegCountPolicy::default();

        assert!(validate_leg_count(5, &policy).is_ok());
        assert!(validate_leg_count(10, &policy).is_ok());
    }

    #[test]
    fn test_validate_leg_count_boundary_is_exclusive_below() {
        let policy = LegCountPolicy::default();

        let result = validate_leg_count(4, &policy);
        assert_eq!(
            result,
            Err(ValidationError::TooFewLegs {
                count: 4,
                minimum_exclusive: 4
            })
        );
    }

    #[test]
    fn test_validate_leg_count_too_many() {
        let policy = LegCountPolicy::default();

        let result = validate_leg_count(11, &policy);
        assert!(matches!(
            result,
            Err(ValidationError::TooManyLegs { count: 11, maximum: 10 })
        ));
    }

    #[test]
    fn test_error_messages_distinguish_direction() {
        let few = ValidationError::TooFewLegs {
            count: 0,
            minimum_exclusive: 4,
        };
        let many = ValidationError::TooManyLegs {
            count: 12,
            maximum: 10,
        };

        assert!(few.to_string().starts_with("too few legs"));
        assert!(many.to_string().starts_with("too many legs"));
        assert_eq!(many.leg_count(), 12);
    }

    #[test]
    fn test_custom_policy() {
        let policy = LegCountPolicy::new(0, 4).unwrap();

        assert!(validate_leg_count(4, &policy).is_ok());
        assert!(validate_leg_count(0, &policy).is_err());
        assert!(validate_leg_count(5, &policy).is_err());
    }
}
