use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{IdentityCodeError, IdentityCodeService};

const CODE_LENGTH: usize = 11;
const PRIMARY_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECONDARY_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// Sex encoded by the leading digit of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// A structurally valid Estonian personal code (`GYYMMDDSSSC`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalCode {
    raw: String,
    gender: Gender,
    birth_date: NaiveDate,
    sequence: u16,
    checksum: u8,
}

impl PersonalCode {
    pub fn parse(code: &str) -> Result<Self, IdentityCodeError> {
        let digits = split_digits(code)?;

        let century_digit = digits[0];
        let century_start = match century_digit {
            1 | 2 => 1800,
            3 | 4 => 1900,
            5 | 6 => 2000,
            7 | 8 => 2100,
            other => return Err(IdentityCodeError::InvalidCenturyDigit(other)),
        };
        let gender = if century_digit % 2 == 1 {
            Gender::Male
        } else {
            Gender::Female
        };

        let year = century_start + i32::from(digits[1] * 10 + digits[2]);
        let month = u32::from(digits[3] * 10 + digits[4]);
        let day = u32::from(digits[5] * 10 + digits[6]);
        let birth_date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(IdentityCodeError::InvalidBirthDate { year, month, day })?;

        let expected = check_digit(&digits);
        let found = digits[10];
        if expected != found {
            return Err(IdentityCodeError::ChecksumMismatch { expected, found });
        }

        let sequence = digits[7..10]
            .iter()
            .fold(0u16, |acc, &digit| acc * 10 + u16::from(digit));

        Ok(Self {
            raw: code.to_string(),
            gender,
            birth_date,
            sequence,
            checksum: found,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Registration sequence number (`SSS`).
    pub fn sequence(&self) -> u16 {
        self.sequence
    }

    /// The trailing `SSSC` group read as an integer in `0..=9999`.
    pub fn last_four_digits(&self) -> u16 {
        self.sequence * 10 + u16::from(self.checksum)
    }

    /// Completed years of age on `today`.
    pub fn age_on(&self, today: NaiveDate) -> Result<u32, IdentityCodeError> {
        if self.birth_date > today {
            return Err(IdentityCodeError::BirthDateInFuture {
                birth_date: self.birth_date,
                today,
            });
        }

        let mut years = today.year() - self.birth_date.year();
        if (today.month(), today.day()) < (self.birth_date.month(), self.birth_date.day()) {
            years -= 1;
        }
        Ok(years.unsigned_abs())
    }
}

fn split_digits(code: &str) -> Result<[u8; CODE_LENGTH], IdentityCodeError> {
    let invalid = || IdentityCodeError::InvalidFormat(code.to_string());

    if code.len() != CODE_LENGTH {
        return Err(invalid());
    }

    let mut digits = [0u8; CODE_LENGTH];
    for (slot, ch) in digits.iter_mut().zip(code.chars()) {
        let digit = ch.to_digit(10).ok_or_else(invalid)?;
        *slot = digit as u8;
    }
    Ok(digits)
}

fn check_digit(digits: &[u8; CODE_LENGTH]) -> u8 {
    let weighted = |weights: &[u32; 10]| {
        digits
            .iter()
            .zip(weights.iter())
            .map(|(&digit, &weight)| u32::from(digit) * weight)
            .sum::<u32>()
            % 11
    };

    let remainder = match weighted(&PRIMARY_WEIGHTS) {
        10 => weighted(&SECONDARY_WEIGHTS),
        value => value,
    };

    if remainder == 10 {
        0
    } else {
        remainder as u8
    }
}

/// Identity collaborator backed by the Estonian personal code rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstonianIdentityCodes;

impl IdentityCodeService for EstonianIdentityCodes {
    fn is_well_formed(&self, code: &str) -> bool {
        PersonalCode::parse(code).is_ok()
    }

    fn age_in_years(&self, code: &str, today: NaiveDate) -> Result<u32, IdentityCodeError> {
        PersonalCode::parse(code)?.age_on(today)
    }
}
