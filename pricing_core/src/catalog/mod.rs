//! # Catalog Snapshot
//!
//! Materials and add-on definitions, consumed read-only from the external
//! catalog store. Fetching is out of scope here; the engine only ever works
//! against an already-resolved in-memory [`Catalog`] snapshot, either parsed
//! from the store's JSON or taken from the built-in price list.
//!
//! ## Example
//!
//! ```rust
//! use pricing_core::catalog::{Catalog, ChargeBasis};
//!
//! let catalog = Catalog::builtin();
//!
//! let vinyl = catalog.material("vinyl-gloss").unwrap();
//! assert_eq!(vinyl.base_rate, 60.0);
//!
//! let eyelet = catalog.addon(ChargeBasis::PerPiece, "eyelet").unwrap();
//! assert_eq!(eyelet.rate, 1.0);
//! ```

pub mod builtin;

use serde::{Deserialize, Serialize};

use crate::errors::{PricingError, PricingResult};

/// Billing basis for an add-on charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeBasis {
    /// Charged as rate × billable area
    #[serde(rename = "perSquareFoot")]
    PerSquareFoot,
    /// Charged as rate × piece count
    #[serde(rename = "perPiece")]
    PerPiece,
}

impl ChargeBasis {
    /// Both charge bases in display order
    pub const ALL: [ChargeBasis; 2] = [ChargeBasis::PerSquareFoot, ChargeBasis::PerPiece];

    /// Wire name used by the catalog store
    pub fn code(&self) -> &'static str {
        match self {
            ChargeBasis::PerSquareFoot => "perSquareFoot",
            ChargeBasis::PerPiece => "perPiece",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            ChargeBasis::PerSquareFoot => "Per Square Foot",
            ChargeBasis::PerPiece => "Per Piece",
        }
    }
}

impl std::fmt::Display for ChargeBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A printable material with its default price per square foot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Catalog id (e.g. "vinyl-gloss")
    pub id: String,

    /// Display name (e.g. "Vinyl Gloss")
    pub name: String,

    /// Default price per square foot, seeded into rate 1 on selection
    #[serde(rename = "baseRate")]
    pub base_rate: f64,
}

impl Material {
    /// Create a material entry
    pub fn new(id: impl Into<String>, name: impl Into<String>, base_rate: f64) -> Self {
        Material {
            id: id.into(),
            name: name.into(),
            base_rate,
        }
    }
}

/// An optional surcharge the shop offers on top of the base print price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonDefinition {
    /// Catalog id (e.g. "plotter-cut")
    pub id: String,

    /// Display name (e.g. "Plotter Cut")
    pub name: String,

    /// Default rate; per square foot or per piece depending on which list
    /// this definition belongs to
    pub rate: f64,
}

impl AddonDefinition {
    /// Create an add-on definition
    pub fn new(id: impl Into<String>, name: impl Into<String>, rate: f64) -> Self {
        AddonDefinition {
            id: id.into(),
            name: name.into(),
            rate,
        }
    }
}

/// Add-on definitions grouped by charge basis.
///
/// This mirrors the wire shape of the store's add-on query, which returns the
/// two lists side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddonCatalog {
    /// Area-scaled add-ons
    #[serde(rename = "perSquareFoot")]
    pub per_square_foot: Vec<AddonDefinition>,

    /// Quantity-scaled add-ons
    #[serde(rename = "perPiece")]
    pub per_piece: Vec<AddonDefinition>,
}

impl AddonCatalog {
    /// The definition list for a charge basis
    pub fn by_basis(&self, basis: ChargeBasis) -> &[AddonDefinition] {
        match basis {
            ChargeBasis::PerSquareFoot => &self.per_square_foot,
            ChargeBasis::PerPiece => &self.per_piece,
        }
    }

    /// Look up a definition by basis and id
    pub fn find(&self, basis: ChargeBasis, id: &str) -> Option<&AddonDefinition> {
        self.by_basis(basis).iter().find(|a| a.id == id)
    }
}

/// In-memory snapshot of the materials/add-ons catalog.
///
/// ## JSON Format
///
/// ```json
/// {
///   "materials": [
///     { "id": "vinyl-gloss", "name": "Vinyl Gloss", "baseRate": 60.0 }
///   ],
///   "addons": {
///     "perSquareFoot": [
///       { "id": "plotter-cut", "name": "Plotter Cut", "rate": 15.0 }
///     ],
///     "perPiece": [
///       { "id": "eyelet", "name": "Eyelet", "rate": 1.0 }
///     ]
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// All printable materials
    pub materials: Vec<Material>,

    /// All add-on definitions, grouped by charge basis
    pub addons: AddonCatalog,
}

impl Catalog {
    /// The shop's standard price list, available without a store fetch
    pub fn builtin() -> Catalog {
        builtin::catalog()
    }

    /// Parse and check a catalog snapshot received from the store.
    pub fn from_json(json: &str) -> PricingResult<Catalog> {
        let catalog: Catalog = serde_json::from_str(json)
            .map_err(|e| PricingError::serialization(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Serialize this snapshot to pretty JSON
    pub fn to_json(&self) -> PricingResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PricingError::serialization(e.to_string()))
    }

    /// Check snapshot integrity: unique ids per section, finite non-negative
    /// rates.
    pub fn validate(&self) -> PricingResult<()> {
        let mut seen = std::collections::HashSet::new();
        for material in &self.materials {
            if !seen.insert(material.id.as_str()) {
                return Err(PricingError::duplicate_id("materials", &material.id));
            }
            if !material.base_rate.is_finite() || material.base_rate < 0.0 {
                return Err(PricingError::invalid_rate(
                    &material.id,
                    material.base_rate.to_string(),
                ));
            }
        }
        for basis in ChargeBasis::ALL {
            let mut seen = std::collections::HashSet::new();
            for addon in self.addons.by_basis(basis) {
                if !seen.insert(addon.id.as_str()) {
                    return Err(PricingError::duplicate_id(basis.code(), &addon.id));
                }
                if !addon.rate.is_finite() || addon.rate < 0.0 {
                    return Err(PricingError::invalid_rate(&addon.id, addon.rate.to_string()));
                }
            }
        }
        Ok(())
    }

    /// Look up a material by id
    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Look up an add-on definition by basis and id
    pub fn addon(&self, basis: ChargeBasis, id: &str) -> Option<&AddonDefinition> {
        self.addons.find(basis, id)
    }

    /// Default per-area rate for a material id, if the id is known.
    ///
    /// Selecting a material seeds rate 1 from this value as a convenience
    /// default only; the rate stays freely editable afterwards.
    pub fn default_rate_for(&self, material_id: &str) -> Option<f64> {
        self.material(material_id).map(|m| m.base_rate)
    }

    /// Case-insensitive substring search over material names
    pub fn materials_matching(&self, query: &str) -> Vec<&Material> {
        let needle = query.to_lowercase();
        self.materials
            .iter()
            .filter(|m| m.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> Catalog {
        Catalog {
            materials: vec![
                Material::new("vinyl-gloss", "Vinyl Gloss", 60.0),
                Material::new("tarp-8oz", "Tarp (8oz.)", 10.0),
            ],
            addons: AddonCatalog {
                per_square_foot: vec![AddonDefinition::new("plotter-cut", "Plotter Cut", 15.0)],
                per_piece: vec![AddonDefinition::new("eyelet", "Eyelet", 1.0)],
            },
        }
    }

    #[test]
    fn test_material_lookup() {
        let catalog = small_catalog();
        assert_eq!(catalog.material("vinyl-gloss").unwrap().base_rate, 60.0);
        assert!(catalog.material("no-such-id").is_none());
    }

    #[test]
    fn test_addon_lookup_respects_basis() {
        let catalog = small_catalog();
        assert!(catalog.addon(ChargeBasis::PerSquareFoot, "plotter-cut").is_some());
        assert!(catalog.addon(ChargeBasis::PerPiece, "plotter-cut").is_none());
    }

    #[test]
    fn test_default_rate_for() {
        let catalog = small_catalog();
        assert_eq!(catalog.default_rate_for("tarp-8oz"), Some(10.0));
        assert_eq!(catalog.default_rate_for("missing"), None);
    }

    #[test]
    fn test_materials_matching() {
        let catalog = small_catalog();
        let hits = catalog.materials_matching("tarp");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "tarp-8oz");

        assert_eq!(catalog.materials_matching("VINYL").len(), 1);
        assert!(catalog.materials_matching("foam").is_empty());
        assert_eq!(catalog.materials_matching("").len(), 2);
    }

    #[test]
    fn test_validate_accepts_zero_rate() {
        let mut catalog = small_catalog();
        catalog
            .addons
            .per_piece
            .push(AddonDefinition::new("miscellaneous", "Miscellaneous", 0.0));
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_material() {
        let mut catalog = small_catalog();
        catalog.materials.push(Material::new("vinyl-gloss", "Vinyl Gloss Again", 65.0));
        let err = catalog.validate().unwrap_err();
        assert_eq!(err.error_code(), "DUPLICATE_ID");
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let mut catalog = small_catalog();
        catalog.materials[0].base_rate = -60.0;
        let err = catalog.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_RATE");
    }

    #[test]
    fn test_duplicate_id_allowed_across_bases() {
        let mut catalog = small_catalog();
        catalog
            .addons
            .per_piece
            .push(AddonDefinition::new("plotter-cut", "Plotter Cut (manual)", 5.0));
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = small_catalog();
        let json = catalog.to_json().unwrap();
        let parsed = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog, parsed);
    }

    #[test]
    fn test_json_wire_names() {
        let json = small_catalog().to_json().unwrap();
        assert!(json.contains("\"baseRate\""));
        assert!(json.contains("\"perSquareFoot\""));
        assert!(json.contains("\"perPiece\""));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_from_json_rejects_invalid_snapshot() {
        let json = r#"{
            "materials": [
                { "id": "m1", "name": "One", "baseRate": 10.0 },
                { "id": "m1", "name": "Two", "baseRate": 20.0 }
            ],
            "addons": { "perSquareFoot": [], "perPiece": [] }
        }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert_eq!(err.error_code(), "DUPLICATE_ID");
    }
}
