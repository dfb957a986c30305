//! Built-in Price List
//!
//! The shop's standard large-format materials and add-ons. This is the
//! fallback catalog used before (or without) a fetch from the store, and the
//! fixture most tests run against. Rates are PHP per square foot for
//! materials and area add-ons, PHP per piece for piece add-ons.

use once_cell::sync::Lazy;

use super::{AddonCatalog, AddonDefinition, Catalog, Material};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    materials: vec![
        Material::new("vinyl-gloss", "Vinyl Gloss", 60.0),
        Material::new("vinyl-matte", "Vinyl Matte", 70.0),
        Material::new("clear-sticker", "Clear Sticker", 70.0),
        Material::new("avery-sticker", "Avery Sticker", 100.0),
        Material::new("3m-reflectorize", "3M Reflectorize", 200.0),
        Material::new("photo-paper-matte", "Photo Paper Matte", 70.0),
        Material::new("photo-paper-glossy", "Photo Paper Glossy", 60.0),
        Material::new("sintra-3mm", "Sticker Sintra 3MM", 130.0),
        Material::new("sintra-3mm-fb", "Sticker Sintra 3MM - Front & Back", 190.0),
        Material::new("sintra-5mm", "Sticker Sintra 5MM", 150.0),
        Material::new("sintra-5mm-fb", "Sticker Sintra 5MM - Front & Back", 210.0),
        Material::new("pvc-sticker", "PVC on Sticker", 220.0),
        Material::new("tarp-8oz", "Tarp (8oz.)", 10.0),
        Material::new("tarp-10oz", "Tarp (10oz.)", 15.0),
        Material::new("tarp-black-15oz", "Tarp Black 15oz.", 25.0),
        Material::new("panaflex", "Panaflex", 80.0),
    ],
    addons: AddonCatalog {
        per_square_foot: vec![
            AddonDefinition::new("plotter-cut", "Plotter Cut", 15.0),
            AddonDefinition::new("lamination-one-side", "Lamination - One Side", 40.0),
            AddonDefinition::new("lamination-two-side", "Lamination - Two Side", 80.0),
            AddonDefinition::new("installation-tape", "Installation Tape", 15.0),
        ],
        per_piece: vec![
            AddonDefinition::new("eyelet", "Eyelet", 1.0),
            AddonDefinition::new("miscellaneous", "Miscellaneous", 0.0),
        ],
    },
});

/// A fresh copy of the built-in price list
pub(super) fn catalog() -> Catalog {
    BUILTIN.clone()
}
