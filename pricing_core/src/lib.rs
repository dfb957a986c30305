//! # pricing_core - Large-Format Print Pricing Engine
//!
//! `pricing_core` is the computational heart of the PrintDesk console: it
//! turns raw job dimensions, a chosen material, a set of selected add-on
//! charges, and up to two comparison rates into a fully reconstructible
//! price quote with a human-readable audit breakdown.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the engine is a pure function over an input snapshot;
//!   the presentation layer rebuilds the snapshot on every edit and
//!   recomputes synchronously
//! - **Total**: bad numeric input is coerced and unknown catalog references
//!   are skipped, so live recomputation is never interrupted
//! - **JSON-First**: every public type implements Serialize/Deserialize;
//!   catalog snapshots arrive as JSON from the external store
//!
//! ## Quick Start
//!
//! ```rust
//! use pricing_core::{calculate, Catalog, ChargeBasis, QuoteInputs, Unit};
//!
//! let catalog = Catalog::builtin();
//!
//! let mut inputs = QuoteInputs::new(Unit::Feet);
//! inputs.set_length_raw("10");
//! inputs.set_width_raw("5");
//! inputs.select_material(&catalog, "vinyl-gloss");
//! inputs.addons.toggle(&catalog, ChargeBasis::PerSquareFoot, "plotter-cut", true, None);
//!
//! let quote = calculate(&inputs);
//! assert_eq!(quote.total1, 3750.0);
//! for line in &quote.breakdown1 {
//!     println!("{line}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`quote`] - Input snapshot, add-on ledger, and the quote engine
//! - [`catalog`] - Materials/add-ons snapshot from the external store
//! - [`units`] - Display units and canonical-feet wrappers
//! - [`numeric`] - Consolidated numeric input coercion
//! - [`format`] - Two-decimal grouped money/area formatting
//! - [`errors`] - Structured error types for the catalog boundary

pub mod catalog;
pub mod errors;
pub mod format;
pub mod numeric;
pub mod quote;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use catalog::{AddonCatalog, AddonDefinition, Catalog, ChargeBasis, Material};
pub use errors::{PricingError, PricingResult};
pub use quote::{calculate, AddonLedger, Dimension, QuoteInputs, QuoteResult, SelectedAddon};
pub use units::{Feet, SqFt, Unit};
