//! Commands Module
//!
//! All CLI subcommand implementations.

pub mod categories;
pub mod prepare;
