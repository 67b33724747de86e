pub mod mock;
pub mod openai;

use anyhow::Result;
use async_trait::async_trait;

/// The borrowed oracle: takes a prompt, returns whatever text the model wrote.
///
/// Every failure (transport, auth, odd envelope) is one opaque error. Calls
/// are made at most once; nothing here retries.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}
