//! Loan decision core: input validation, credit segmentation, the age factor,
//! and the forward search for the shortest qualifying loan period.

pub mod domain;
pub mod engine;
pub mod router;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::{AgeRestriction, Decision, DecisionError};
pub use engine::{CreditSegment, DecisionEngine};
pub use router::{decision_router, DecisionRequest, DecisionResponse};
pub use validator::LoanValidator;
