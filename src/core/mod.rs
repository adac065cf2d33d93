//! Core payload types, builders, and the boundary error type.
//!
//! The input types mirror the host's JSON payload with an explicit `Option`
//! for every field the host may omit; the output types serialize to the
//! `updateLinePrice` operation shape the host consumes.

mod builder;
mod error;
mod types;

pub use builder::*;
pub use error::*;
pub use types::*;
