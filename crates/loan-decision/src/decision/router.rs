use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use super::domain::{Decision, DecisionError};
use super::engine::DecisionEngine;
use crate::identity::IdentityCodeService;

const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Loan request as submitted by the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    pub personal_code: String,
    pub loan_amount: i64,
    pub loan_period: i32,
}

/// Wire response carrying either the approved loan or the failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResponse {
    pub loan_amount: Option<i64>,
    pub loan_period: Option<i32>,
    pub error_message: Option<String>,
}

impl DecisionResponse {
    pub fn approved(decision: Decision) -> Self {
        Self {
            loan_amount: Some(decision.loan_amount()),
            loan_period: Some(decision.loan_period()),
            error_message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            loan_amount: None,
            loan_period: None,
            error_message: Some(message.into()),
        }
    }
}

/// Router builder exposing the loan decision endpoint.
pub fn decision_router<S>(engine: Arc<DecisionEngine<S>>) -> Router
where
    S: IdentityCodeService + 'static,
{
    Router::new()
        .route("/api/v1/loan/decision", post(decision_handler::<S>))
        .with_state(engine)
}

pub(crate) async fn decision_handler<S>(
    State(engine): State<Arc<DecisionEngine<S>>>,
    Json(request): Json<DecisionRequest>,
) -> Response
where
    S: IdentityCodeService + 'static,
{
    let result = engine.calculate_approved_loan(
        &request.personal_code,
        request.loan_amount,
        request.loan_period,
    );

    match result {
        Ok(decision) => {
            (StatusCode::OK, Json(DecisionResponse::approved(decision))).into_response()
        }
        Err(err) => rejection(err),
    }
}

fn rejection(err: DecisionError) -> Response {
    let (status, message) = match &err {
        DecisionError::NoValidLoan => (StatusCode::NOT_FOUND, err.to_string()),
        DecisionError::MalformedCode(source) => {
            error!(error = %source, "age lookup failed after validation passed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                UNEXPECTED_ERROR.to_string(),
            )
        }
        _ => (StatusCode::BAD_REQUEST, err.to_string()),
    };
    warn!(kind = err.kind(), status = status.as_u16(), "loan request rejected");

    (status, Json(DecisionResponse::rejected(message))).into_response()
}
