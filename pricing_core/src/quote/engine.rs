//! # Quote Engine
//!
//! The pure calculation that turns a [`QuoteInputs`] snapshot into a
//! [`QuoteResult`]. No side effects, no I/O, no failure mode: every reachable
//! snapshot (all-zero dimensions, no material, no add-ons) yields a fully
//! defined result, so the presentation layer can recompute on every
//! keystroke without guarding anything.
//!
//! ## Example
//!
//! ```rust
//! use pricing_core::catalog::{Catalog, ChargeBasis};
//! use pricing_core::quote::{calculate, QuoteInputs};
//! use pricing_core::units::Unit;
//!
//! let catalog = Catalog::builtin();
//! let mut inputs = QuoteInputs::new(Unit::Feet);
//! inputs.set_length_raw("10");
//! inputs.set_width_raw("5");
//! inputs.select_material(&catalog, "vinyl-gloss");
//! inputs.addons.toggle(&catalog, ChargeBasis::PerPiece, "eyelet", true, None);
//! inputs.addons.update_quantity("eyelet", "4");
//!
//! let quote = calculate(&inputs);
//! assert_eq!(quote.total_area_sqft, 50.0);
//! assert_eq!(quote.total1, 3004.0);
//! assert_eq!(quote.breakdown1.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::ChargeBasis;
use crate::format::format_amount;
use crate::numeric::sanitize_non_negative;
use crate::quote::inputs::QuoteInputs;
use crate::units::{SqFt, Unit};

/// A fully reconstructible price quote.
///
/// The breakdowns are the audit trail: their lines, in order, re-derive the
/// corresponding total exactly.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_area_sqft": 50.0,
///   "total1": 3750.0,
///   "total2": 0.0,
///   "breakdown1": [
///     "Base: 50.00 ft × PHP 60.00 = PHP 3,000.00",
///     "Plotter Cut: 50.00 ft × PHP 15.00 = PHP 750.00"
///   ],
///   "breakdown2": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Billable area in canonical square feet
    pub total_area_sqft: f64,

    /// Price at base rate 1, add-ons included
    pub total1: f64,

    /// Price at base rate 2, add-ons included; zero when no comparison rate
    /// is set
    pub total2: f64,

    /// Audit lines reconstructing `total1`
    pub breakdown1: Vec<String>,

    /// Audit lines reconstructing `total2`; empty when no comparison rate is
    /// set
    pub breakdown2: Vec<String>,
}

impl QuoteResult {
    /// Whether a second comparison price was computed
    pub fn has_comparison(&self) -> bool {
        !self.breakdown2.is_empty()
    }
}

/// Calculate totals and audit breakdowns for one input snapshot.
///
/// Rates run through the same coercion as the input setters, so a snapshot
/// built by hand with out-of-range values still yields a defined result.
pub fn calculate(inputs: &QuoteInputs) -> QuoteResult {
    let area = inputs.length.feet() * inputs.width.feet();
    let addons_total = inputs.addons.total(area);
    let unit = inputs.display_unit();

    let rate1 = sanitize_non_negative(inputs.rate1);
    let total1 = rate1 * area.value() + addons_total;
    let breakdown1 = breakdown(inputs, rate1, area, unit);

    let (total2, breakdown2) = match inputs.rate2.map(sanitize_non_negative) {
        Some(rate2) if rate2 > 0.0 => (
            rate2 * area.value() + addons_total,
            breakdown(inputs, rate2, area, unit),
        ),
        _ => (0.0, Vec::new()),
    };

    QuoteResult {
        total_area_sqft: area.value(),
        total1,
        total2,
        breakdown1,
        breakdown2,
    }
}

/// Build the audit lines for one base rate: the base line first, then area
/// add-ons, then per-piece add-ons, each in selection order.
///
/// Area figures are redisplayed in the active display unit through the same
/// linear factor used for dimensions.
fn breakdown(inputs: &QuoteInputs, base_rate: f64, area: SqFt, unit: Unit) -> Vec<String> {
    let area_addons = inputs.addons.entries(ChargeBasis::PerSquareFoot);
    let piece_addons = inputs.addons.entries(ChargeBasis::PerPiece);

    let area_display = format!(
        "{} {}",
        format_amount(area.value() / unit.feet_per_unit()),
        unit.code()
    );

    let mut lines = Vec::with_capacity(1 + area_addons.len() + piece_addons.len());
    lines.push(format!(
        "Base: {} × PHP {} = PHP {}",
        area_display,
        format_amount(base_rate),
        format_amount(base_rate * area.value())
    ));

    for entry in area_addons {
        lines.push(format!(
            "{}: {} × PHP {} = PHP {}",
            entry.name,
            area_display,
            format_amount(entry.rate),
            format_amount(entry.rate * area.value())
        ));
    }

    for entry in piece_addons {
        let quantity = entry.quantity.unwrap_or(1).max(1);
        lines.push(format!(
            "{}: {} pc × PHP {} = PHP {}",
            entry.name,
            quantity,
            format_amount(entry.rate),
            format_amount(entry.rate * f64::from(quantity))
        ));
    }

    lines
}
