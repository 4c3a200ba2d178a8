use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Word bounds handed to the summarization model. These are directives to the
/// model; the driver only uses `max_words` to decide on a condensing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    pub max_words: usize,
    pub min_words: usize,
}

impl LengthBounds {
    pub const DEFAULT_MAX_WORDS: usize = 130;
    pub const DEFAULT_MIN_WORDS: usize = 30;

    pub fn new(max_words: usize, min_words: usize) -> Self {
        Self {
            max_words,
            min_words,
        }
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_WORDS, Self::DEFAULT_MIN_WORDS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
    Summarized,
    TooShort,
    Failed,
}

/// Outcome of a single [`ChunkedSummarizer::summarize`](crate::ChunkedSummarizer::summarize) call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub original_word_count: usize,
    pub summary_word_count: usize,
    /// Time spent inside summarizer calls only
    pub processing_time_ms: u64,
    pub status: SummaryStatus,
}

impl SummaryResult {
    pub const TOO_SHORT_MESSAGE: &'static str = "Text is too short to summarize meaningfully.";

    pub fn summarized(summary: String, original_word_count: usize, elapsed: Duration) -> Self {
        Self {
            summary_word_count: crate::text::word_count(&summary),
            summary,
            original_word_count,
            processing_time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            status: SummaryStatus::Summarized,
        }
    }

    pub fn too_short(original_word_count: usize) -> Self {
        Self {
            summary: Self::TOO_SHORT_MESSAGE.to_string(),
            original_word_count,
            summary_word_count: 0,
            processing_time_ms: 0,
            status: SummaryStatus::TooShort,
        }
    }

    pub fn failed(error: &crate::Error) -> Self {
        Self {
            summary: format!("Error: {error}"),
            original_word_count: 0,
            summary_word_count: 0,
            processing_time_ms: 0,
            status: SummaryStatus::Failed,
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == SummaryStatus::Failed
    }

    pub fn processing_time(&self) -> Duration {
        Duration::from_millis(self.processing_time_ms)
    }
}
