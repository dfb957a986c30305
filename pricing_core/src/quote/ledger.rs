//! # Add-on Ledger
//!
//! The set of add-on charges currently selected for a quote. Selection order
//! is a user-visible contract: breakdown lines appear in the order add-ons
//! were picked, so entries live in insertion-ordered lists per charge basis
//! and every update overwrites in place rather than re-inserting at the end.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ChargeBasis};
use crate::numeric::{coerce_non_negative, coerce_quantity, sanitize_non_negative};
use crate::units::SqFt;

/// A selected add-on charge with its effective rate and, for per-piece
/// add-ons, the piece count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedAddon {
    /// Catalog id this entry was seeded from
    pub id: String,

    /// Display name, copied from the catalog definition at selection time
    pub name: String,

    /// Effective rate; starts at the catalog default and is user-overridable
    pub rate: f64,

    /// Piece count, present only for per-piece entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl SelectedAddon {
    /// Charge this entry contributes at the given billable area
    pub fn amount(&self, area: SqFt) -> f64 {
        match self.quantity {
            Some(quantity) => self.rate * f64::from(quantity.max(1)),
            None => self.rate * area.value(),
        }
    }
}

/// Selected add-ons for one quote, in selection order per charge basis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddonLedger {
    #[serde(rename = "perSquareFoot")]
    per_square_foot: Vec<SelectedAddon>,

    #[serde(rename = "perPiece")]
    per_piece: Vec<SelectedAddon>,
}

impl AddonLedger {
    /// Empty ledger
    pub fn new() -> Self {
        AddonLedger::default()
    }

    /// Selected entries for a basis, in selection order
    pub fn entries(&self, basis: ChargeBasis) -> &[SelectedAddon] {
        match basis {
            ChargeBasis::PerSquareFoot => &self.per_square_foot,
            ChargeBasis::PerPiece => &self.per_piece,
        }
    }

    fn entries_mut(&mut self, basis: ChargeBasis) -> &mut Vec<SelectedAddon> {
        match basis {
            ChargeBasis::PerSquareFoot => &mut self.per_square_foot,
            ChargeBasis::PerPiece => &mut self.per_piece,
        }
    }

    /// Whether an add-on is currently selected
    pub fn is_selected(&self, basis: ChargeBasis, addon_id: &str) -> bool {
        self.entries(basis).iter().any(|e| e.id == addon_id)
    }

    /// Total number of selected entries across both bases
    pub fn len(&self) -> usize {
        self.per_square_foot.len() + self.per_piece.len()
    }

    /// Whether no add-ons are selected
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Select or deselect an add-on.
    ///
    /// Selecting seeds the entry from the catalog definition (or
    /// `custom_rate` when supplied) with a piece count of one for per-piece
    /// add-ons. Re-selecting an already-selected add-on resets it in place,
    /// keeping its position and never accumulating duplicates. Deselecting
    /// removes the entry. An id the catalog does not know is a no-op.
    pub fn toggle(
        &mut self,
        catalog: &Catalog,
        basis: ChargeBasis,
        addon_id: &str,
        selected: bool,
        custom_rate: Option<f64>,
    ) {
        if !selected {
            self.entries_mut(basis).retain(|e| e.id != addon_id);
            return;
        }

        let Some(definition) = catalog.addon(basis, addon_id) else {
            return;
        };
        let entry = SelectedAddon {
            id: definition.id.clone(),
            name: definition.name.clone(),
            rate: sanitize_non_negative(custom_rate.unwrap_or(definition.rate)),
            quantity: (basis == ChargeBasis::PerPiece).then_some(1),
        };

        let entries = self.entries_mut(basis);
        match entries.iter_mut().find(|e| e.id == addon_id) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
    }

    /// Overwrite a selected entry's rate from raw text; no-op when the entry
    /// is not selected. The entry keeps its position.
    pub fn update_rate(&mut self, basis: ChargeBasis, addon_id: &str, raw: &str) {
        if let Some(entry) = self.entries_mut(basis).iter_mut().find(|e| e.id == addon_id) {
            entry.rate = coerce_non_negative(raw);
        }
    }

    /// Overwrite a per-piece entry's quantity from raw text; no-op for area
    /// entries or when the entry is not selected.
    pub fn update_quantity(&mut self, addon_id: &str, raw: &str) {
        if let Some(entry) = self.per_piece.iter_mut().find(|e| e.id == addon_id) {
            entry.quantity = Some(coerce_quantity(raw));
        }
    }

    /// Combined add-on charge at the given billable area
    pub fn total(&self, area: SqFt) -> f64 {
        self.per_square_foot
            .iter()
            .chain(self.per_piece.iter())
            .map(|e| e.amount(area))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids(ledger: &AddonLedger, basis: ChargeBasis) -> Vec<&str> {
        ledger.entries(basis).iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_toggle_on_seeds_from_catalog() {
        let catalog = Catalog::builtin();
        let mut ledger = AddonLedger::new();

        ledger.toggle(&catalog, ChargeBasis::PerSquareFoot, "plotter-cut", true, None);
        ledger.toggle(&catalog, ChargeBasis::PerPiece, "eyelet", true, None);

        let cut = &ledger.entries(ChargeBasis::PerSquareFoot)[0];
        assert_eq!(cut.name, "Plotter Cut");
        assert_eq!(cut.rate, 15.0);
        assert_eq!(cut.quantity, None);

        let eyelet = &ledger.entries(ChargeBasis::PerPiece)[0];
        assert_eq!(eyelet.rate, 1.0);
        assert_eq!(eyelet.quantity, Some(1));
    }

    #[test]
    fn test_toggle_with_custom_rate() {
        let catalog = Catalog::builtin();
        let mut ledger = AddonLedger::new();

        ledger.toggle(
            &catalog,
            ChargeBasis::PerSquareFoot,
            "plotter-cut",
            true,
            Some(20.0),
        );
        assert_eq!(ledger.entries(ChargeBasis::PerSquareFoot)[0].rate, 20.0);
    }

    #[test]
    fn test_toggle_off_removes_entry() {
        let catalog = Catalog::builtin();
        let mut ledger = AddonLedger::new();

        ledger.toggle(&catalog, ChargeBasis::PerPiece, "eyelet", true, None);
        assert!(ledger.is_selected(ChargeBasis::PerPiece, "eyelet"));

        ledger.toggle(&catalog, ChargeBasis::PerPiece, "eyelet", false, None);
        assert!(!ledger.is_selected(ChargeBasis::PerPiece, "eyelet"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_reselect_resets_in_place() {
        let catalog = Catalog::builtin();
        let mut ledger = AddonLedger::new();

        ledger.toggle(&catalog, ChargeBasis::PerSquareFoot, "plotter-cut", true, None);
        ledger.toggle(&catalog, ChargeBasis::PerSquareFoot, "lamination-one-side", true, None);
        ledger.update_rate(ChargeBasis::PerSquareFoot, "plotter-cut", "99");

        // Re-selecting resets the rate to the catalog default without moving
        // the entry or duplicating it
        ledger.toggle(&catalog, ChargeBasis::PerSquareFoot, "plotter-cut", true, None);

        assert_eq!(
            ids(&ledger, ChargeBasis::PerSquareFoot),
            vec!["plotter-cut", "lamination-one-side"]
        );
        assert_eq!(ledger.entries(ChargeBasis::PerSquareFoot)[0].rate, 15.0);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let catalog = Catalog::builtin();
        let mut ledger = AddonLedger::new();

        ledger.toggle(&catalog, ChargeBasis::PerSquareFoot, "gold-leaf", true, None);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_update_rate_preserves_position() {
        let catalog = Catalog::builtin();
        let mut ledger = AddonLedger::new();

        ledger.toggle(&catalog, ChargeBasis::PerSquareFoot, "plotter-cut", true, None);
        ledger.toggle(&catalog, ChargeBasis::PerSquareFoot, "installation-tape", true, None);

        ledger.update_rate(ChargeBasis::PerSquareFoot, "plotter-cut", "18.5");

        assert_eq!(
            ids(&ledger, ChargeBasis::PerSquareFoot),
            vec!["plotter-cut", "installation-tape"]
        );
        assert_eq!(ledger.entries(ChargeBasis::PerSquareFoot)[0].rate, 18.5);
    }

    #[test]
    fn test_update_rate_missing_entry_is_noop() {
        let mut ledger = AddonLedger::new();
        ledger.update_rate(ChargeBasis::PerSquareFoot, "plotter-cut", "18.5");
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_update_rate_coerces_bad_input() {
        let catalog = Catalog::builtin();
        let mut ledger = AddonLedger::new();

        ledger.toggle(&catalog, ChargeBasis::PerPiece, "eyelet", true, None);
        ledger.update_rate(ChargeBasis::PerPiece, "eyelet", "-3");
        assert_eq!(ledger.entries(ChargeBasis::PerPiece)[0].rate, 0.0);
    }

    #[test]
    fn test_update_quantity() {
        let catalog = Catalog::builtin();
        let mut ledger = AddonLedger::new();

        ledger.toggle(&catalog, ChargeBasis::PerPiece, "eyelet", true, None);
        ledger.update_quantity("eyelet", "4");
        assert_eq!(ledger.entries(ChargeBasis::PerPiece)[0].quantity, Some(4));

        ledger.update_quantity("eyelet", "0");
        assert_eq!(ledger.entries(ChargeBasis::PerPiece)[0].quantity, Some(1));
    }

    #[test]
    fn test_update_quantity_area_entry_is_noop() {
        let catalog = Catalog::builtin();
        let mut ledger = AddonLedger::new();

        ledger.toggle(&catalog, ChargeBasis::PerSquareFoot, "plotter-cut", true, None);
        ledger.update_quantity("plotter-cut", "4");
        assert_eq!(
            ledger.entries(ChargeBasis::PerSquareFoot)[0].quantity,
            None
        );
    }

    #[test]
    fn test_total_combines_both_bases() {
        let catalog = Catalog::builtin();
        let mut ledger = AddonLedger::new();

        ledger.toggle(&catalog, ChargeBasis::PerSquareFoot, "plotter-cut", true, None);
        ledger.toggle(&catalog, ChargeBasis::PerPiece, "eyelet", true, None);
        ledger.update_quantity("eyelet", "4");

        // 15/sqft * 50 sqft + 1/pc * 4 pc
        assert!((ledger.total(SqFt(50.0)) - 754.0).abs() < 1e-9);
    }

    #[test]
    fn test_serialization_round_trip() {
        let catalog = Catalog::builtin();
        let mut ledger = AddonLedger::new();
        ledger.toggle(&catalog, ChargeBasis::PerSquareFoot, "plotter-cut", true, None);
        ledger.toggle(&catalog, ChargeBasis::PerPiece, "eyelet", true, None);
        ledger.update_quantity("eyelet", "6");

        let json = serde_json::to_string(&ledger).unwrap();
        let roundtrip: AddonLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(ledger, roundtrip);
    }
}
