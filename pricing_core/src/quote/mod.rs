//! # Quote Building Blocks
//!
//! Everything that makes up one price quote:
//!
//! - [`inputs`] - The per-session input snapshot (dimensions, material, rates)
//! - [`ledger`] - Selected add-on charges in selection order
//! - [`engine`] - The pure calculation that turns a snapshot into a result
//!
//! The presentation layer owns a [`QuoteInputs`], applies one mutation per
//! user edit, and calls [`calculate`] synchronously after each one. The
//! returned [`QuoteResult`] is the only thing it reads back.

pub mod engine;
pub mod inputs;
pub mod ledger;

pub use engine::{calculate, QuoteResult};
pub use inputs::{Dimension, QuoteInputs};
pub use ledger::{AddonLedger, SelectedAddon};
