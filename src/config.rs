// Copyright (c) 2025 - Cowboy AI, Inc.
//! Leg count policy configuration

use thiserror::Error;

/// Leg count policy validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Empty leg range: minimum (exclusive) {minimum_exclusive} must be below maximum {maximum}")]
    EmptyRange {
        minimum_exclusive: usize,
        maximum: usize,
    },
}

/// Bounds applied to the number of legs when a bed is finalized
///
/// A bed passes when `minimum_exclusive < legs <= maximum`.
///
/// # Invariants
/// - `minimum_exclusive < maximum`, so at least one leg count is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegCountPolicy {
    minimum_exclusive: usize,
    maximum: usize,
}

impl LegCountPolicy {
    /// Default lower bound (exclusive)
    pub const DEFAULT_MINIMUM_EXCLUSIVE: usize = 4;

    /// Default upper bound (inclusive)
    pub const DEFAULT_MAXIMUM: usize = 10;

    /// Create a new leg count policy
    ///
    /// # Errors
    /// - [`PolicyError::EmptyRange`] when no leg count could ever pass
    pub fn new(minimum_exclusive: usize, maximum: usize) -> Result<Self, PolicyError> {
        if minimum_exclusive >= maximum {
            return Err(PolicyError::EmptyRange {
                minimum_exclusive,
                maximum,
            });
        }

        Ok(Self {
            minimum_exclusive,
            maximum,
        })
    }

    /// Leg counts at or below this value are rejected
    pub fn minimum_exclusive(&self) -> usize {
        self.minimum_exclusive
    }

    /// Leg counts above this value are rejected
    pub fn maximum(&self) -> usize {
        self.maximum
    }
}

impl Default for LegCountPolicy {
    fn default() -> Self {
        Self {
            minimum_exclusive: Self::DEFAULT_MINIMUM_EXCLUSIVE,
            maximum: Self::DEFAULT_MAXIMUM,
        }
    }
}
