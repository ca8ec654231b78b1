// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bed Domain Models
//!
//! The aggregate being assembled and the parts it owns.
//!
//! # Value Objects
//!
//! - [`BedLeg`] / [`Pillow`] - filled in after construction, uniformly
//! - [`Frame`], [`BoxSpring`], [`Mattress`], [`Sheet`], [`Duvet`] - fixed at construction
//!
//! # Aggregate
//!
//! - [`Bed`] - owns every part; leg count validated on finalization

pub mod bed;
pub mod invariants;
pub mod parts;

pub use bed::Bed;
pub use invariants::{validate_leg_count, ValidationError, ValidationResult};
pub use parts::{BedLeg, BoxSpring, Duvet, Frame, Mattress, Pillow, Sheet};
