use serde::Serialize;

use crate::identity::IdentityCodeError;

/// Approved loan amount and period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    loan_amount: i64,
    loan_period: i32,
}

impl Decision {
    pub(crate) const fn new(loan_amount: i64, loan_period: i32) -> Self {
        Self {
            loan_amount,
            loan_period,
        }
    }

    pub const fn loan_amount(&self) -> i64 {
        self.loan_amount
    }

    pub const fn loan_period(&self) -> i32 {
        self.loan_period
    }
}

/// Why an applicant's age rules out any loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AgeRestriction {
    #[error("Customer is too young for a loan.")]
    TooYoung,
    #[error("Customer is too old for a loan.")]
    TooOld,
}

/// Terminal failures of a loan calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error("Invalid personal ID code!")]
    InvalidIdentityCode,
    #[error("Invalid loan amount!")]
    InvalidLoanAmount { amount: i64 },
    #[error("Invalid loan period!")]
    InvalidLoanPeriod { period: i32 },
    #[error("No valid loan found!")]
    NoValidLoan,
    #[error(transparent)]
    AgeRestriction(#[from] AgeRestriction),
    #[error("personal code could not be read for age lookup: {0}")]
    MalformedCode(#[from] IdentityCodeError),
}

impl DecisionError {
    pub const fn kind(&self) -> &'static str {
        match self {
            DecisionError::InvalidIdentityCode => "invalid_identity_code",
            DecisionError::InvalidLoanAmount { .. } => "invalid_loan_amount",
            DecisionError::InvalidLoanPeriod { .. } => "invalid_loan_period",
            DecisionError::NoValidLoan => "no_valid_loan",
            DecisionError::AgeRestriction(_) => "age_restriction",
            DecisionError::MalformedCode(_) => "malformed_code",
        }
    }

    /// Failures caused by the request itself rather than by the applicant's standing.
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            DecisionError::InvalidIdentityCode
                | DecisionError::InvalidLoanAmount { .. }
                | DecisionError::InvalidLoanPeriod { .. }
                | DecisionError::AgeRestriction(_)
        )
    }
}
