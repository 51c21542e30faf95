//! # FFKit Core Library
//!
//! A typed representation of classical force-field terms (atom types, bonded and
//! non-bonded potentials, polarization) with canonical, order-independent term
//! identities, a schema-driven text serialization format, and closed-form energy
//! evaluation for debugging and inspection.
//!
//! ## Architectural Philosophy
//!
//! The library is deliberately small and layered:
//!
//! - **[`forcefield`]: The Foundation.** Stateless value objects for every term
//!   variant (`terms`), pure potential functions (`potentials`), the attribute
//!   codec and class registry (`codec`), and the owning term collection with its
//!   cross-term validation (`collection`).
//!
//! - **[`io`]: Persistence.** Reads and writes the flat, string-attribute term
//!   table from/to TOML documents, going through the registry so that a file is
//!   either decoded into fully valid terms or rejected with a diagnosable error.
//!
//! Simulation engines, atom typers, and workflow drivers are consumers of this
//! crate, not part of it.

pub mod forcefield;
pub mod io;
