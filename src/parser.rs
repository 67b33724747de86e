//! Pulls the analysis object out of a model reply.
//!
//! Models like to wrap JSON in markdown fences or chat around it, so the
//! reply is scanned for the first `{` that starts a complete JSON value.
//! That value is the payload: it either has the expected shape or the reply
//! is rejected. Objects nested inside it are never considered on their own.

use serde::Deserialize;
use serde_json::{Deserializer, Value};
use tracing::debug;

use crate::models::AnalysisResponse;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("no JSON object found in reply")]
    NoJsonObject,

    #[error("reply is not a valid analysis object: {0}")]
    Invalid(#[source] serde_json::Error),
}

/// The object shape the prompt asks the model for.
#[derive(Deserialize)]
struct RawAnalysis {
    summary: String,
    pitfalls_or_risks: Vec<String>,
    proposed_strategies: Vec<String>,
    recommended_resources: Vec<String>,
    disclaimer: String,
}

impl From<RawAnalysis> for AnalysisResponse {
    fn from(raw: RawAnalysis) -> Self {
        AnalysisResponse::new(
            raw.summary,
            raw.pitfalls_or_risks,
            raw.proposed_strategies,
            raw.recommended_resources,
            raw.disclaimer,
        )
    }
}

/// Parse a raw completion into an [`AnalysisResponse`].
///
/// A `{` that doesn't start valid JSON (a stray brace in commentary) is
/// skipped. If no `{` does, the first syntax error is reported.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResponse, ParseError> {
    let mut first_err = None;

    for (start, _) in raw.match_indices('{') {
        match first_value_at(&raw[start..]) {
            Ok(value) => {
                debug!(offset = start, "found JSON object");
                let analysis: RawAnalysis =
                    serde_json::from_value(value).map_err(ParseError::Invalid)?;
                return Ok(analysis.into());
            }
            Err(e) => {
                first_err.get_or_insert(e);
            }
        }
    }

    Err(first_err.map_or(ParseError::NoJsonObject, ParseError::Invalid))
}

/// Stream-parse one value from the start of `text`, ignoring whatever trails it.
fn first_value_at(text: &str) -> Result<Value, serde_json::Error> {
    let mut stream = Deserializer::from_str(text).into_iter::<Value>();
    match stream.next() {
        Some(result) => result,
        None => Err(serde::de::Error::custom("unexpected end of reply")),
    }
}
