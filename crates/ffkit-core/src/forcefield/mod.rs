//! # Force Field Module
//!
//! This module provides the typed core of the library: every force-field term
//! variant, its canonical identity rules, the attribute codec used for lossless
//! round-trip persistence, and the closed-form potential functions.
//!
//! ## Overview
//!
//! A force field is a closed set of physical interaction descriptors. Each
//! descriptor is a value object whose identity is a canonical string key derived
//! from its participant atom-type strings, so that two terms constructed from
//! logically equivalent but differently ordered inputs always compare equal and
//! key identically.
//!
//! ## Key Components
//!
//! - [`terms`] - The [`terms::FFTerm`] tagged union and one module per
//!   structural family, each performing canonicalization at construction
//! - [`potentials`] - Pure, stateless energy functions for every functional form
//! - [`codec`] - Schema-driven mapping between terms and flat string attribute
//!   maps, plus the [`codec::TermRegistry`] class table
//! - [`collection`] - The [`collection::ForceField`] owning collection keyed by
//!   canonical name, with caller-side cross-term validation
//! - [`constants`] - Physical constants used by derived quantities
//!
//! ## Usage
//!
//! ```ignore
//! use ffkit::forcefield::terms::ChargeIncrementTerm;
//!
//! let term = ChargeIncrementTerm::new("h_1", "c_4", 0.06)?;
//! assert_eq!(term.name(), "c_4,h_1");
//! assert_eq!(term.value, -0.06);
//! ```

pub mod codec;
pub mod collection;
pub mod constants;
pub mod potentials;
pub mod terms;
