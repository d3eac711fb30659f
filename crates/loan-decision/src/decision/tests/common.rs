use std::sync::atomic::{AtomicUsize, Ordering};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::config::DecisionConfig;
use crate::decision::DecisionEngine;
use crate::identity::{IdentityCodeError, IdentityCodeService};

/// Born 2007-01-01, tail 7921 (segment 3).
pub(super) const YOUNG_CODE: &str = "50701017921";
/// Born 1990-02-01, tail 2785 (segment 1).
pub(super) const MID_CODE: &str = "49002012785";
/// Born 1970-05-03, tail 2808 (segment 1).
pub(super) const SENIOR_CODE: &str = "37005032808";
/// Born 1955-02-01, tail 6670 (segment 2).
pub(super) const TOO_OLD_CODE: &str = "35502016670";
/// Born 2003-07-17, tail 0158 (debt).
pub(super) const DEBTOR_CODE: &str = "50307170158";
/// Born 2000-01-01, tail 3106 (segment 1).
pub(super) const YOUNG_ADULT_CODE: &str = "50001013106";
/// Born 1985-01-01, tail 5521 (segment 2).
pub(super) const SEGMENT_2_CODE: &str = "38501015521";
/// Born 1985-01-01, tail 8000 (segment 3).
pub(super) const SEGMENT_3_CODE: &str = "38501018000";
/// Born 2030-01-01, tail 3101 (segment 1).
pub(super) const UNBORN_CODE: &str = "53001013101";

pub(super) fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date")
}

pub(super) fn engine() -> DecisionEngine {
    DecisionEngine::new(DecisionConfig::default())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Identity double returning a fixed age and counting lookups.
#[derive(Debug)]
pub(super) struct FixedAgeIdentity {
    pub(super) well_formed: bool,
    pub(super) age: Result<u32, IdentityCodeError>,
    pub(super) lookups: AtomicUsize,
}

impl FixedAgeIdentity {
    pub(super) fn aged(age: u32) -> Self {
        Self {
            well_formed: true,
            age: Ok(age),
            lookups: AtomicUsize::new(0),
        }
    }

    pub(super) fn failing(error: IdentityCodeError) -> Self {
        Self {
            well_formed: true,
            age: Err(error),
            lookups: AtomicUsize::new(0),
        }
    }

    pub(super) fn malformed() -> Self {
        Self {
            well_formed: false,
            age: Ok(40),
            lookups: AtomicUsize::new(0),
        }
    }

    pub(super) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl IdentityCodeService for FixedAgeIdentity {
    fn is_well_formed(&self, _code: &str) -> bool {
        self.well_formed
    }

    fn age_in_years(&self, _code: &str, _today: NaiveDate) -> Result<u32, IdentityCodeError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.age.clone()
    }
}

impl IdentityCodeService for &FixedAgeIdentity {
    fn is_well_formed(&self, code: &str) -> bool {
        (**self).is_well_formed(code)
    }

    fn age_in_years(&self, code: &str, today: NaiveDate) -> Result<u32, IdentityCodeError> {
        (**self).age_in_years(code, today)
    }
}
