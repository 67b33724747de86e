//! Wire types for the `/analyser` endpoint.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::GENERIC_ERROR_MESSAGE;
use crate::error::AnalysisError;

/// A scenario plus the constraints it must be analysed under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub scenario: Option<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
}

impl AnalysisRequest {
    pub fn new(scenario: impl Into<String>, constraints: Vec<String>) -> Self {
        Self {
            scenario: Some(scenario.into()),
            constraints,
        }
    }

    /// Decode a raw request body. An empty body counts as no request at
    /// all; a body that isn't a request object is rejected outright.
    pub fn from_body(body: &[u8]) -> Result<Option<Self>, AnalysisError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            debug!("request body is empty");
            return Ok(None);
        }
        serde_json::from_slice(body).map(Some).map_err(|e| {
            debug!(error = %e, "request body is not an analysis request");
            AnalysisError::invalid("request body is not a valid analysis request")
        })
    }

    /// Check the request is processable and hand back its scenario.
    pub fn validate(&self) -> Result<&str, AnalysisError> {
        let scenario = self
            .scenario
            .as_deref()
            .ok_or_else(|| AnalysisError::invalid("scenario is missing"))?;
        if scenario.trim().is_empty() {
            return Err(AnalysisError::invalid("scenario is blank"));
        }
        if self.constraints.is_empty() {
            return Err(AnalysisError::invalid("constraints are empty"));
        }
        Ok(scenario)
    }
}

/// The structured analysis returned to the caller.
///
/// Only the parser builds these, so the fields stay private.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    scenario_summary: String,
    potential_pitfalls: Vec<String>,
    proposed_strategies: Vec<String>,
    recommended_resources: Vec<String>,
    disclaimer: String,
}

impl AnalysisResponse {
    pub(crate) fn new(
        scenario_summary: String,
        potential_pitfalls: Vec<String>,
        proposed_strategies: Vec<String>,
        recommended_resources: Vec<String>,
        disclaimer: String,
    ) -> Self {
        Self {
            scenario_summary,
            potential_pitfalls,
            proposed_strategies,
            recommended_resources,
            disclaimer,
        }
    }

    pub fn scenario_summary(&self) -> &str {
        &self.scenario_summary
    }

    pub fn potential_pitfalls(&self) -> &[String] {
        &self.potential_pitfalls
    }

    pub fn proposed_strategies(&self) -> &[String] {
        &self.proposed_strategies
    }

    pub fn recommended_resources(&self) -> &[String] {
        &self.recommended_resources
    }

    pub fn disclaimer(&self) -> &str {
        &self.disclaimer
    }
}

/// HTTP status classes an error body can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorStatus {
    BadRequest,
    InternalServerError,
}

impl ErrorStatus {
    pub fn code(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body of every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status: ErrorStatus,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: ErrorStatus::BadRequest,
        }
    }

    /// Fixed body that leaks nothing about the underlying failure.
    pub fn internal() -> Self {
        Self {
            message: GENERIC_ERROR_MESSAGE.to_string(),
            status: ErrorStatus::InternalServerError,
        }
    }
}
