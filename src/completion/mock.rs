use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::Completer;

/// A scripted completer for tests. Returns pre-defined replies in order and
/// remembers every prompt it was given.
pub struct MockCompleter {
    replies: Vec<Result<String, String>>,
    index: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockCompleter {
    /// Each entry is either a reply text or an error message to fail with.
    pub fn new(replies: Vec<Result<String, String>>) -> Self {
        Self {
            replies,
            index: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(vec![Ok(text.into())])
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(vec![Err(message.into())])
    }

    /// How many times `complete` has been called.
    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Completer for MockCompleter {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        match self.replies.get(i) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(message)) => Err(anyhow!("{}", message)),
            None => Err(anyhow!("MockCompleter: no more replies (called {} times)", i + 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_in_order_then_runs_out() {
        let mock = MockCompleter::new(vec![Ok("one".to_string()), Err("boom".to_string())]);

        assert_eq!(mock.complete("p1").await.unwrap(), "one");
        assert_eq!(mock.complete("p2").await.unwrap_err().to_string(), "boom");
        let err = mock.complete("p3").await.unwrap_err();
        assert!(err.to_string().contains("no more replies"));

        assert_eq!(mock.calls(), 3);
        assert_eq!(mock.prompts(), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn fresh_mock_has_no_calls() {
        let mock = MockCompleter::replying("x");
        assert_eq!(mock.calls(), 0);
        assert!(mock.prompts().is_empty());
    }
}
