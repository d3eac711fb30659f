use chrono::NaiveDate;

use super::domain::DecisionError;
use crate::config::DecisionConfig;
use crate::identity::{IdentityCodeError, IdentityCodeService};

/// Gatekeeper run before any scoring: the code must be well-formed and the
/// requested amount and period must sit inside the configured bounds.
#[derive(Debug, Clone)]
pub struct LoanValidator<S> {
    identity: S,
    config: DecisionConfig,
}

impl<S: IdentityCodeService> LoanValidator<S> {
    pub fn new(identity: S, config: DecisionConfig) -> Self {
        Self { identity, config }
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Reports the first failing check in code, amount, period order.
    pub fn verify_inputs(
        &self,
        personal_code: &str,
        loan_amount: i64,
        loan_period: i32,
    ) -> Result<(), DecisionError> {
        if !self.identity.is_well_formed(personal_code) {
            return Err(DecisionError::InvalidIdentityCode);
        }
        if loan_amount < self.config.minimum_loan_amount
            || loan_amount > self.config.maximum_loan_amount
        {
            return Err(DecisionError::InvalidLoanAmount {
                amount: loan_amount,
            });
        }
        if loan_period < self.config.minimum_loan_period
            || loan_period > self.config.maximum_loan_period
        {
            return Err(DecisionError::InvalidLoanPeriod {
                period: loan_period,
            });
        }
        Ok(())
    }

    pub fn age_from_personal_code(
        &self,
        personal_code: &str,
        today: NaiveDate,
    ) -> Result<u32, IdentityCodeError> {
        self.identity.age_in_years(personal_code, today)
    }
}
