//! # Term Table I/O
//!
//! Reads and writes the persisted term table: a TOML document of `[[terms]]`
//! entries, each a class name plus the flat string attribute map consumed and
//! produced by the [codec](crate::forcefield::codec). Loading goes through the
//! [`TermRegistry`](crate::forcefield::codec::TermRegistry), so a file either
//! decodes into fully valid terms or is rejected with the offending entry in
//! the error.

mod term_file;

pub use term_file::{FileError, load, save};
