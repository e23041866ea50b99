//! # Chain Vocabulary
//!
//! - [`chain`] - Networks, tracked assets and chain identifiers
//!
//! Enums serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`,
//! which is also the form the panel uses for `<select>` option values.

pub mod chain;

pub use chain::*;
