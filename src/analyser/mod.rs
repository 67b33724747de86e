pub mod scenario;

use async_trait::async_trait;

use crate::error::AnalysisError;
use crate::models::{AnalysisRequest, AnalysisResponse};

/// The outermost boundary. The HTTP layer only knows this trait.
#[async_trait]
pub trait Analyser: Send + Sync {
    /// Produce an analysis for `request`. `None` means the caller sent no
    /// usable request at all.
    async fn generate_analysis(
        &self,
        request: Option<&AnalysisRequest>,
    ) -> Result<AnalysisResponse, AnalysisError>;
}
