mod age;
mod segment;

pub use segment::CreditSegment;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use super::domain::{Decision, DecisionError};
use super::validator::LoanValidator;
use crate::config::DecisionConfig;
use crate::identity::{EstonianIdentityCodes, IdentityCodeService};

/// Stateless calculator for the largest loan an applicant qualifies for.
///
/// The amount ceiling for a period is `floor(modifier * period * age_factor)`. When the
/// requested period cannot reach the minimum loan amount the engine walks forward one
/// month at a time until it does, giving up once the maximum period is exceeded.
#[derive(Debug, Clone)]
pub struct DecisionEngine<S = EstonianIdentityCodes> {
    validator: LoanValidator<S>,
}

impl DecisionEngine<EstonianIdentityCodes> {
    pub fn new(config: DecisionConfig) -> Self {
        Self::with_identity_service(EstonianIdentityCodes, config)
    }
}

impl Default for DecisionEngine<EstonianIdentityCodes> {
    fn default() -> Self {
        Self::new(DecisionConfig::default())
    }
}

impl<S: IdentityCodeService> DecisionEngine<S> {
    pub fn with_identity_service(identity: S, config: DecisionConfig) -> Self {
        Self {
            validator: LoanValidator::new(identity, config),
        }
    }

    pub fn config(&self) -> &DecisionConfig {
        self.validator.config()
    }

    /// Evaluates the request against today's local date.
    pub fn calculate_approved_loan(
        &self,
        personal_code: &str,
        loan_amount: i64,
        loan_period: i32,
    ) -> Result<Decision, DecisionError> {
        let today = Local::now().date_naive();
        self.calculate_approved_loan_on(personal_code, loan_amount, loan_period, today)
    }

    pub fn calculate_approved_loan_on(
        &self,
        personal_code: &str,
        loan_amount: i64,
        loan_period: i32,
        today: NaiveDate,
    ) -> Result<Decision, DecisionError> {
        self.validator
            .verify_inputs(personal_code, loan_amount, loan_period)?;

        let segment = CreditSegment::for_personal_code(personal_code)
            .ok_or(DecisionError::InvalidIdentityCode)?;
        let credit_modifier = segment.credit_modifier(self.config());
        if credit_modifier == 0 {
            warn!(segment = segment.label(), "applicant is in debt");
            return Err(DecisionError::NoValidLoan);
        }

        let config = self.config();
        for period in loan_period..=config.maximum_loan_period {
            let highest =
                self.highest_valid_loan_amount(personal_code, credit_modifier, period, today)?;
            debug!(period, highest, "evaluated loan period");

            if highest >= config.minimum_loan_amount {
                let approved = highest.min(config.maximum_loan_amount);
                info!(
                    segment = segment.label(),
                    requested_amount = loan_amount,
                    requested_period = loan_period,
                    approved_amount = approved,
                    approved_period = period,
                    "loan approved"
                );
                return Ok(Decision::new(approved, period));
            }
        }

        warn!(
            segment = segment.label(),
            requested_period = loan_period,
            "no period within bounds reaches the minimum loan amount"
        );
        Err(DecisionError::NoValidLoan)
    }

    /// Largest loan for the given modifier and period, before clamping to the maximum.
    pub(crate) fn highest_valid_loan_amount(
        &self,
        personal_code: &str,
        credit_modifier: i64,
        loan_period: i32,
        today: NaiveDate,
    ) -> Result<i64, DecisionError> {
        let age = self
            .validator
            .age_from_personal_code(personal_code, today)?;
        let factor = age::age_factor(age, self.config())?;

        // Saturates under unvalidated configs.
        let base = credit_modifier.saturating_mul(i64::from(loan_period));
        Ok((base as f64 * factor).floor() as i64)
    }
}
