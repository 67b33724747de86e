use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scenario_analyser::analyser::scenario::ScenarioAnalyser;
use scenario_analyser::completion::openai::OpenAiCompleter;
use scenario_analyser::config::Settings;
use scenario_analyser::prompts::PromptTemplate;
use scenario_analyser::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::parse();

    let template = match &settings.prompt_file {
        Some(path) => PromptTemplate::from_file(path)?,
        None => PromptTemplate::default(),
    };

    let completer = OpenAiCompleter::new(
        settings.api_url.clone(),
        settings.model.clone(),
        settings.api_key()?,
        settings.timeout(),
        settings.connect_timeout(),
    )?;
    info!(model = completer.model(), api_url = %settings.api_url, "completion API configured");

    let analyser = ScenarioAnalyser::new(Arc::new(completer), template);
    server::run(&settings, Arc::new(analyser)).await
}
