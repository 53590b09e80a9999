//! A tailorable implementation of the Unicode Line Breaking Algorithm
//! ([UAX #14][UAX14]).
//!
//! Given an input text, locates line break opportunities: positions
//! appropriate for wrapping when displaying text. Unlike a fixed port of
//! the algorithm, the rule cascade (LB12a-LB30b) and the LB1 class
//! resolution are both first-class, replaceable values, so callers can
//! apply the vendor tailoring UAX #14 §8.2 describes (or their own) without
//! forking the crate.
//!
//! # Example
//!
//! ```
//! use unicode_linebreak_rules::{linebreak_locations, BreakKind};
//!
//! let boundaries = linebreak_locations("hello,\ncruel world", None, None);
//! assert_eq!(
//!     boundaries,
//!     vec![(7, BreakKind::Required), (13, BreakKind::Allowed)]
//! );
//! ```
//!
//! Indexing is in code points, not bytes, matching the conformance suite.
//!
//! [UAX14]: https://www.unicode.org/reports/tr14/

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs, missing_debug_implementations)]

/// The [Unicode version](https://www.unicode.org/versions/) the baked
/// property table conforms to.
pub const UNICODE_VERSION: (u64, u64, u64) = (12, 1, 0);

pub mod class;
pub mod rules;
pub mod tables;

#[cfg(feature = "alloc")]
pub(crate) mod state;

#[cfg(feature = "alloc")]
pub mod driver;

#[cfg(feature = "std")]
pub mod error;

#[cfg(feature = "std")]
pub mod tailor;

#[cfg(feature = "std")]
pub mod table_source;

pub use class::{default_resolver, BreakClass, Resolver};
pub use rules::{Rule, Verdict};
pub use tables::break_property;

#[cfg(feature = "alloc")]
pub use rules::RuleSet;

#[cfg(feature = "alloc")]
pub use driver::{apply_required_linebreaks, identify_linebreak_positions, linebreak_locations, BreakKind};

#[cfg(feature = "std")]
pub use driver::linebreak_locations_bytes;

#[cfg(feature = "std")]
pub use error::Error;

#[cfg(feature = "std")]
pub use tailor::RuleSetBuilder;

#[cfg(feature = "std")]
pub use table_source::TableSource;
