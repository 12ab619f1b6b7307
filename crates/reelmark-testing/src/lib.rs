//! Testing infrastructure for reelmark tests.
//!
//! - `StubCatalog`: scripted, call-counting stand-in for the OMDb API
//! - `TestWorld`: isolated data directory plus a CLI runner
//! - `assertions`: checks over the CLI's JSON output

pub mod assertions;
pub mod catalog;
pub mod world;

pub use catalog::{StubCatalog, movie};
pub use world::{CliResult, TestWorld};
