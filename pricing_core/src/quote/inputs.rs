//! # Quote Inputs
//!
//! The input snapshot for one editing session. Every user edit mutates (or
//! clones and mutates) a [`QuoteInputs`] value, after which the presentation
//! layer re-runs [`crate::quote::calculate`]. Nothing here is persisted; a
//! snapshot lives only as long as its editing session.
//!
//! All raw-text setters coerce through [`crate::numeric`], so a half-typed or
//! out-of-range value can never poison the snapshot.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Material};
use crate::numeric::{
    coerce_comparison_rate, coerce_non_negative, sanitize_comparison_rate, sanitize_non_negative,
};
use crate::quote::ledger::AddonLedger;
use crate::units::{Feet, Unit};

/// A job dimension stored in canonical feet alongside its display unit.
///
/// Conversion happens exactly once, when raw input is parsed. The display
/// unit is a pure presentation concern: switching it redisplays the stored
/// canonical value and never re-converts it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimension {
    feet: Feet,
    unit: Unit,
}

impl Dimension {
    /// A zero-length dimension displayed in `unit`
    pub fn zero(unit: Unit) -> Self {
        Dimension {
            feet: Feet(0.0),
            unit,
        }
    }

    /// From an already-parsed value in `unit`; negative or non-finite input
    /// coerces to zero.
    pub fn new(value: f64, unit: Unit) -> Self {
        Dimension {
            feet: unit.to_canonical(sanitize_non_negative(value)),
            unit,
        }
    }

    /// Parse raw text in `unit` and convert to canonical feet.
    pub fn parse(raw: &str, unit: Unit) -> Self {
        Dimension::new(coerce_non_negative(raw), unit)
    }

    /// Canonical length in feet
    pub fn feet(&self) -> Feet {
        self.feet
    }

    /// The active display unit
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Value redisplayed in the active display unit
    pub fn display_value(&self) -> f64 {
        self.unit.from_canonical(self.feet)
    }

    /// Switch the display unit, leaving the stored canonical feet untouched
    pub fn with_unit(self, unit: Unit) -> Self {
        Dimension {
            feet: self.feet,
            unit,
        }
    }
}

/// One editing session's input snapshot.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": { "feet": 10.0, "unit": "ft" },
///   "width": { "feet": 5.0, "unit": "ft" },
///   "material": { "id": "vinyl-gloss", "name": "Vinyl Gloss", "baseRate": 60.0 },
///   "rate1": 60.0,
///   "rate2": null,
///   "addons": { "perSquareFoot": [], "perPiece": [] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteInputs {
    /// Job length, canonical feet
    pub length: Dimension,

    /// Job width, canonical feet
    pub width: Dimension,

    /// Currently selected material, if any. Selection seeds rate 1 with the
    /// material's base rate but the two are not linked afterwards.
    pub material: Option<Material>,

    /// Primary base rate (PHP per square foot)
    pub rate1: f64,

    /// Optional comparison rate. `None` means no second price is shown;
    /// entering zero or clearing the field resolves to `None`.
    pub rate2: Option<f64>,

    /// Selected add-on charges in selection order
    pub addons: AddonLedger,
}

impl QuoteInputs {
    /// Fresh empty snapshot displaying in `unit`
    pub fn new(unit: Unit) -> Self {
        QuoteInputs {
            length: Dimension::zero(unit),
            width: Dimension::zero(unit),
            material: None,
            rate1: 0.0,
            rate2: None,
            addons: AddonLedger::new(),
        }
    }

    /// The active display unit
    pub fn display_unit(&self) -> Unit {
        self.length.unit()
    }

    /// Switch the display unit for both dimensions. Stored canonical values
    /// are only redisplayed, never re-converted.
    pub fn set_unit(&mut self, unit: Unit) {
        self.length = self.length.with_unit(unit);
        self.width = self.width.with_unit(unit);
    }

    /// Parse raw length text in the active display unit
    pub fn set_length_raw(&mut self, raw: &str) {
        self.length = Dimension::parse(raw, self.length.unit());
    }

    /// Parse raw width text in the active display unit
    pub fn set_width_raw(&mut self, raw: &str) {
        self.width = Dimension::parse(raw, self.width.unit());
    }

    /// Set length from an already-parsed value in the active display unit
    pub fn set_length(&mut self, value: f64) {
        self.length = Dimension::new(value, self.length.unit());
    }

    /// Set width from an already-parsed value in the active display unit
    pub fn set_width(&mut self, value: f64) {
        self.width = Dimension::new(value, self.width.unit());
    }

    /// Select a material and seed rate 1 with its base rate.
    ///
    /// The seeded rate is a convenience default only; `rate1` stays freely
    /// editable and the link to the material is not re-enforced. An id the
    /// catalog does not know leaves the whole snapshot unchanged.
    pub fn select_material(&mut self, catalog: &Catalog, material_id: &str) {
        if let Some(material) = catalog.material(material_id) {
            self.rate1 = sanitize_non_negative(material.base_rate);
            self.material = Some(material.clone());
        }
    }

    /// Drop the material selection; rate 1 keeps its current value
    pub fn clear_material(&mut self) {
        self.material = None;
    }

    /// Parse raw rate 1 text
    pub fn set_rate1_raw(&mut self, raw: &str) {
        self.rate1 = coerce_non_negative(raw);
    }

    /// Set rate 1 from an already-parsed value
    pub fn set_rate1(&mut self, value: f64) {
        self.rate1 = sanitize_non_negative(value);
    }

    /// Parse raw comparison-rate text; anything not strictly positive clears
    /// the second price.
    pub fn set_rate2_raw(&mut self, raw: &str) {
        self.rate2 = coerce_comparison_rate(raw);
    }

    /// Set the comparison rate from an already-parsed value
    pub fn set_rate2(&mut self, value: f64) {
        self.rate2 = sanitize_comparison_rate(value);
    }
}

impl Default for QuoteInputs {
    fn default() -> Self {
        QuoteInputs::new(Unit::Feet)
    }
}
