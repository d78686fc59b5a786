//! Shared leaf crate: runtime [`config::Config`], fragment-based console
//! output, and the seeded random sample data the demonstrations feed on.

pub mod config;
pub mod output;
pub mod random;
