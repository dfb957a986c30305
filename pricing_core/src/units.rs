//! # Unit Types
//!
//! Display units and type-safe wrappers for job dimensions. These are
//! lightweight f64 wrappers rather than a full units library because the
//! pricing engine only ever deals in lengths and areas, and JSON
//! serialization should stay clean (just numbers).
//!
//! ## Canonical Unit
//!
//! All internal arithmetic runs in feet (and square feet for areas). The
//! unit a dimension was typed in is a presentation concern only: raw input
//! is converted to feet exactly once, at parse time, and converted back for
//! display. Switching the active display unit never re-converts a stored
//! dimension.
//!
//! ## Example
//!
//! ```rust
//! use pricing_core::units::Unit;
//!
//! let length = Unit::Inches.to_canonical(120.0);
//! assert!((length.value() - 10.0).abs() < 1e-9);
//!
//! let redisplayed = Unit::Inches.from_canonical(length);
//! assert!((redisplayed - 120.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Display units accepted for job dimensions.
///
/// This is a closed enumeration: an unknown unit is unrepresentable, so the
/// conversion functions are total and never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    /// Feet (the canonical unit)
    #[default]
    #[serde(rename = "ft")]
    Feet,
    /// Inches
    #[serde(rename = "in")]
    Inches,
    /// Centimeters
    #[serde(rename = "cm")]
    Centimeters,
    /// Millimeters
    #[serde(rename = "mm")]
    Millimeters,
}

impl Unit {
    /// All display units in UI selection order
    pub const ALL: [Unit; 4] = [
        Unit::Feet,
        Unit::Inches,
        Unit::Centimeters,
        Unit::Millimeters,
    ];

    /// Short code as shown next to dimension fields ("ft", "in", "cm", "mm")
    pub fn code(&self) -> &'static str {
        match self {
            Unit::Feet => "ft",
            Unit::Inches => "in",
            Unit::Centimeters => "cm",
            Unit::Millimeters => "mm",
        }
    }

    /// Human-readable name for dropdowns
    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Feet => "Feet (ft)",
            Unit::Inches => "Inches (in)",
            Unit::Centimeters => "Centimeters (cm)",
            Unit::Millimeters => "Millimeters (mm)",
        }
    }

    /// Feet per one of this unit
    pub fn feet_per_unit(&self) -> f64 {
        match self {
            Unit::Feet => 1.0,
            Unit::Inches => 1.0 / 12.0,
            Unit::Centimeters => 0.0328084,
            Unit::Millimeters => 0.00328084,
        }
    }

    /// Convert a value in this unit to canonical feet
    pub fn to_canonical(&self, value: f64) -> Feet {
        Feet(value * self.feet_per_unit())
    }

    /// Convert canonical feet back to a value in this unit
    pub fn from_canonical(&self, feet: Feet) -> f64 {
        feet.0 / self.feet_per_unit()
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Length in canonical feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Area in canonical square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Multiplying two lengths yields an area
impl Mul for Feet {
    type Output = SqFt;
    fn mul(self, rhs: Feet) -> SqFt {
        SqFt(self.0 * rhs.0)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(SqFt);
