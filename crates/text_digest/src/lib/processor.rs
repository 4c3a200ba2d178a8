pub mod builder;

use std::time::{Duration, Instant};

use futures::{stream, StreamExt, TryStreamExt};

use crate::{
    chunk_sentences,
    text::{char_len, normalize_whitespace, word_count},
    Error, LengthBounds, RuleBasedSplitter, SentenceSplitter, Summarizer, SummaryResult,
};

/// Summarizes text of any length through a summarizer that only accepts
/// `chunk_budget` characters at a time.
///
/// Long text is split at sentence boundaries into chunks, each chunk is
/// summarized, and the chunk summaries are joined in order. If the joined
/// summary of a chunked text is still longer than the requested maximum, it is
/// summarized once more. Holds no state between calls.
#[derive(Debug)]
pub struct ChunkedSummarizer<S, P = RuleBasedSplitter>
where
    S: Summarizer,
    P: SentenceSplitter,
{
    summarizer: S,
    splitter: P,
    chunk_budget: usize,
    min_words: usize,
    concurrency: usize,
}

impl<S, P> ChunkedSummarizer<S, P>
where
    S: Summarizer,
    P: SentenceSplitter,
{
    pub fn summarizer(&self) -> &S {
        &self.summarizer
    }

    pub fn chunk_budget(&self) -> usize {
        self.chunk_budget
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Summarizes `text` within `bounds`.
    ///
    /// Never fails: short input and summarizer failures are reported through
    /// [`SummaryResult::status`].
    #[tracing::instrument(
        skip(self, text),
        fields(max_words = bounds.max_words, min_words = bounds.min_words)
    )]
    pub async fn summarize(&self, text: &str, bounds: LengthBounds) -> SummaryResult {
        let text = normalize_whitespace(text);
        let original_word_count = word_count(&text);

        if original_word_count < self.min_words {
            tracing::info!(
                original_word_count,
                min_words = self.min_words,
                "Text is too short to summarize"
            );
            return SummaryResult::too_short(original_word_count);
        }

        match self.run(&text, bounds).await {
            Ok((summary, elapsed)) => {
                SummaryResult::summarized(summary, original_word_count, elapsed)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to summarize text");
                SummaryResult::failed(&e)
            }
        }
    }

    /// Splits normalized `text` into summarizer-sized chunks.
    /// Text that fits the budget is returned whole.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        if char_len(text) <= self.chunk_budget {
            return vec![text.to_string()];
        }
        chunk_sentences(self.splitter.split(text), self.chunk_budget)
    }

    /// Returns the final summary and the time spent in summarizer calls
    async fn run(&self, text: &str, bounds: LengthBounds) -> Result<(String, Duration), Error> {
        let chunked = char_len(text) > self.chunk_budget;
        let chunks = self.chunk(text);
        let total = chunks.len();

        if chunked {
            tracing::info!(
                chunks = total,
                chars = char_len(text),
                "Text is long, summarizing in chunks"
            );
        }

        let started = Instant::now();

        // `buffered` yields in submission order regardless of completion order
        let summaries = stream::iter(chunks.iter().enumerate())
            .map(|(idx, chunk)| self.summarize_segment(chunk, idx + 1, total, bounds))
            .buffered(self.concurrency)
            .try_collect::<Vec<_>>()
            .await?;

        let combined = summaries.join(" ");
        let combined_words = word_count(&combined);

        let summary = if chunked && combined_words > bounds.max_words {
            tracing::info!(
                combined_words,
                max_words = bounds.max_words,
                "Condensing combined summary"
            );
            self.summarizer
                .summarize(&combined, bounds)
                .await
                .map(|resp| resp.summary)
                .map_err(|e| Error::Condense(e.to_string()))?
        } else {
            combined
        };

        Ok((summary, started.elapsed()))
    }

    async fn summarize_segment(
        &self,
        chunk: &str,
        segment: usize,
        total: usize,
        bounds: LengthBounds,
    ) -> Result<String, Error> {
        tracing::info!(segment, total, chars = char_len(chunk), "Summarizing segment");

        self.summarizer
            .summarize(chunk, bounds)
            .await
            .map(|resp| resp.summary)
            .map_err(|e| Error::Summarizer {
                segment,
                total,
                message: e.to_string(),
            })
    }
}
