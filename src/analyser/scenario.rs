use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::Analyser;
use crate::completion::Completer;
use crate::error::AnalysisError;
use crate::models::{AnalysisRequest, AnalysisResponse};
use crate::parser::parse_analysis;
use crate::prompts::PromptTemplate;

/// Validate, prompt, complete, parse. Wires a Completer to a PromptTemplate.
pub struct ScenarioAnalyser {
    completer: Arc<dyn Completer>,
    template: PromptTemplate,
}

impl ScenarioAnalyser {
    pub fn new(completer: Arc<dyn Completer>, template: PromptTemplate) -> Self {
        Self {
            completer,
            template,
        }
    }

    async fn run(&self, request: Option<&AnalysisRequest>) -> Result<AnalysisResponse, AnalysisError> {
        let request = request.ok_or_else(|| AnalysisError::invalid("request is missing"))?;
        let scenario = request.validate()?;

        info!(constraints = request.constraints.len(), "building prompt");
        let prompt = self.template.render(scenario, &request.constraints);
        debug!(%prompt, "constructed prompt");

        info!("calling completion API");
        let raw = self
            .completer
            .complete(&prompt)
            .await
            .map_err(AnalysisError::Completion)?;
        info!(bytes = raw.len(), "received completion");
        debug!(%raw, "completion text");

        let analysis = parse_analysis(&raw)?;
        info!(
            pitfalls = analysis.potential_pitfalls().len(),
            strategies = analysis.proposed_strategies().len(),
            resources = analysis.recommended_resources().len(),
            "completion parsed"
        );
        Ok(analysis)
    }
}

#[async_trait]
impl Analyser for ScenarioAnalyser {
    async fn generate_analysis(
        &self,
        request: Option<&AnalysisRequest>,
    ) -> Result<AnalysisResponse, AnalysisError> {
        info!(
            scenario = request.and_then(|r| r.scenario.as_deref()).unwrap_or("null"),
            "starting analysis"
        );
        self.run(request)
            .await
            .inspect_err(|e| error!(error = %e, "analysis failed"))
    }
}
