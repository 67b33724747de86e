//! Errors surfaced by the analysis pipeline.

use crate::parser::ParseError;

/// Why an analysis could not be produced.
///
/// Only [`AnalysisError::InvalidScenario`] is the caller's fault; the HTTP
/// layer maps it to 400 and everything else to a generic 500.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Unable to process request, not a valid scenario: {reason}")]
    InvalidScenario { reason: &'static str },

    #[error("Unable to process request, error generating a response: {0:#}")]
    Completion(anyhow::Error),

    #[error("Unable to process request, error parsing the response: {0}")]
    Parse(#[from] ParseError),
}

impl AnalysisError {
    pub fn invalid(reason: &'static str) -> Self {
        Self::InvalidScenario { reason }
    }

    pub fn is_invalid_scenario(&self) -> bool {
        matches!(self, Self::InvalidScenario { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_scenario_message_names_reason() {
        let err = AnalysisError::invalid("scenario is blank");
        assert!(err.is_invalid_scenario());
        assert_eq!(
            err.to_string(),
            "Unable to process request, not a valid scenario: scenario is blank"
        );
    }

    #[test]
    fn completion_message_includes_cause_chain() {
        let cause = anyhow::anyhow!("connection refused").context("OpenAI request failed");
        let err = AnalysisError::Completion(cause);
        assert!(!err.is_invalid_scenario());
        let msg = err.to_string();
        assert!(msg.starts_with("Unable to process request"));
        assert!(msg.contains("OpenAI request failed"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn parse_error_converts() {
        let err: AnalysisError = ParseError::NoJsonObject.into();
        assert!(matches!(err, AnalysisError::Parse(_)));
        assert!(err.to_string().contains("no JSON object"));
    }
}
