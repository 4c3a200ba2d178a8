use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use text_digest::{LengthBounds, Summarizer, SummaryResponse};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub content: String,
    pub bounds: LengthBounds,
}

#[derive(Clone)]
pub struct MockSummarizer {
    pub summary: String,
    /// Per-call responses, falling back to `summary` once exhausted
    pub scripted: Vec<String>,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    /// Zero-based call index that fails
    pub fail_on_call: Option<usize>,
    pub fail_with: Option<String>,
    pub delays: Vec<Duration>,
    pub echo: bool,
}

impl MockSummarizer {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            scripted: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_on_call: None,
            fail_with: None,
            delays: Vec::new(),
            echo: false,
        }
    }

    pub fn scripted(responses: &[&str]) -> Self {
        Self {
            scripted: responses.iter().map(|r| r.to_string()).collect(),
            ..Self::new("")
        }
    }

    /// Responds with `summary(<first word of content>)`
    pub fn echo_first_word() -> Self {
        Self {
            echo: true,
            ..Self::new("")
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self::new("").fail_on(0, msg)
    }

    pub fn fail_on(mut self, call: usize, msg: &str) -> Self {
        self.fail_on_call = Some(call);
        self.fail_with = Some(msg.to_string());
        self
    }

    pub fn with_delays(mut self, delays: Vec<Duration>) -> Self {
        self.delays = delays;
        self
    }

    pub fn call_contents(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.content.clone())
            .collect()
    }
}

impl Summarizer for MockSummarizer {
    const CONTEXT_WINDOW_LIMIT: usize = 1024;
    const SUMMARIZER_MODEL: &'static str = "mock-bart";
    type Error = anyhow::Error;

    async fn summarize(
        &self,
        content: &str,
        bounds: LengthBounds,
    ) -> Result<SummaryResponse, Self::Error> {
        let idx = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(RecordedCall {
                content: content.to_string(),
                bounds,
            });
            calls.len() - 1
        };

        if let Some(delay) = self.delays.get(idx) {
            tokio::time::sleep(*delay).await;
        }

        if self.fail_on_call == Some(idx) {
            let msg = self.fail_with.clone().unwrap_or_default();
            return Err(anyhow::anyhow!("{}", msg));
        }

        let summary = if self.echo {
            let first = content.split_whitespace().next().unwrap_or_default();
            format!("summary({first})")
        } else {
            self.scripted
                .get(idx)
                .cloned()
                .unwrap_or_else(|| self.summary.clone())
        };

        Ok(SummaryResponse { summary })
    }
}
