//! Loan decision engine for applicants identified by an Estonian personal code.
//!
//! The [`decision`] module holds the validator and the engine that searches for the
//! shortest period yielding a qualifying loan. [`identity`] parses personal codes into
//! birth dates and ages; the remaining modules carry configuration, logging, and the
//! application error type used by the API binary.

pub mod config;
pub mod decision;
pub mod error;
pub mod identity;
pub mod telemetry;
