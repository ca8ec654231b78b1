// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bed Part Value Objects
//!
//! Flat records describing the physical attributes of one bed component.
//!
//! Two flavours exist:
//!
//! - **Post-hoc parts** ([`BedLeg`], [`Pillow`]) start out with every field
//!   unset and are filled in uniformly by the builder.
//! - **Construction-time parts** ([`Frame`], [`BoxSpring`], [`Mattress`],
//!   [`Sheet`], [`Duvet`]) take all fields up front and are read-only afterwards.
//!
//! None of these types validate their inputs.

/// A single bed leg
///
/// All fields are `None` until the builder applies leg specs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BedLeg {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Material category (e.g. "oak", "steel")
    pub material: Option<String>,
    pub weight: Option<f64>,
}

impl BedLeg {
    /// Create an unspecified leg
    pub fn new() -> Self {
        Self::default()
    }
}

/// A single pillow
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pillow {
    /// e.g. "king", "queen", "standard"
    pub size: Option<String>,
    pub material: Option<String>,
    pub filling: Option<String>,
}

impl Pillow {
    /// Create an unspecified pillow
    pub fn new() -> Self {
        Self::default()
    }
}

/// Bed frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    length: f64,
    width: f64,
    height: f64,
    material: String,
    weight: f64,
}

impl Frame {
    pub fn new(
        length: f64,
        width: f64,
        height: f64,
        material: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            length,
            width,
            height,
            material: material.into(),
            weight,
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Box spring sitting between frame and mattress
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSpring {
    length: f64,
    width: f64,
    height: f64,
    material: String,
    weight: f64,
}

impl BoxSpring {
    pub fn new(
        length: f64,
        width: f64,
        height: f64,
        material: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            length,
            width,
            height,
            material: material.into(),
            weight,
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Mattress
///
/// Same physical attributes as a [`Frame`] plus a size label
/// (e.g. "king", "queen", "full").
#[derive(Debug, Clone, PartialEq)]
pub struct Mattress {
    length: f64,
    width: f64,
    height: f64,
    material: String,
    size: String,
    weight: f64,
}

impl Mattress {
    /// Create a mattress
    ///
    /// Argument order follows the builder: dimensions, material, size, weight.
    pub fn new(
        length: f64,
        width: f64,
        height: f64,
        material: impl Into<String>,
        size: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            length,
            width,
            height,
            material: material.into(),
            size: size.into(),
            weight,
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Set of sheets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    size: String,
    material: String,
    thread_count: u32,
    color: String,
}

impl Sheet {
    pub fn new(
        size: impl Into<String>,
        material: impl Into<String>,
        thread_count: u32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            size: size.into(),
            material: material.into(),
            thread_count,
            color: color.into(),
        }
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn thread_count(&self) -> u32 {
        self.thread_count
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

/// Duvet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duvet {
    size: String,
    material: String,
    color: String,
}

impl Duvet {
    pub fn new(
        size: impl Into<String>,
        material: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            size: size.into(),
            material: material.into(),
            color: color.into(),
        }
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}
