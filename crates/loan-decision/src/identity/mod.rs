//! Personal identity code parsing and age lookup.

mod estonia;

pub use estonia::{EstonianIdentityCodes, Gender, PersonalCode};

use chrono::NaiveDate;

/// Failures raised while parsing a personal code for its embedded birth date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityCodeError {
    #[error("personal code must be exactly 11 digits, found {0:?}")]
    InvalidFormat(String),
    #[error("unsupported century/gender digit {0}")]
    InvalidCenturyDigit(u8),
    #[error("personal code embeds an impossible birth date {year:04}-{month:02}-{day:02}")]
    InvalidBirthDate { year: i32, month: u32, day: u32 },
    #[error("checksum digit {found} does not match expected {expected}")]
    ChecksumMismatch { expected: u8, found: u8 },
    #[error("birth date {birth_date} lies after the evaluation date {today}")]
    BirthDateInFuture {
        birth_date: NaiveDate,
        today: NaiveDate,
    },
}

/// Collaborator consulted by the decision engine for code validation and age lookup.
pub trait IdentityCodeService: Send + Sync {
    fn is_well_formed(&self, code: &str) -> bool;

    /// Age in whole years on `today`.
    fn age_in_years(&self, code: &str, today: NaiveDate) -> Result<u32, IdentityCodeError>;
}
