use crate::{
    ChunkedSummarizer, RuleBasedSplitter, SentenceSplitter, Summarizer, MIN_WORDS_TO_SUMMARIZE,
};

pub struct ChunkedSummarizerBuilder<S = (), P = RuleBasedSplitter> {
    summarizer: S,
    splitter: P,
    chunk_budget: Option<usize>,
    min_words: usize,
    concurrency: usize,
}

impl ChunkedSummarizerBuilder {
    pub fn new() -> Self {
        Self {
            summarizer: (),
            splitter: RuleBasedSplitter,
            chunk_budget: None,
            min_words: MIN_WORDS_TO_SUMMARIZE,
            concurrency: 1,
        }
    }
}

impl Default for ChunkedSummarizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, P> ChunkedSummarizerBuilder<S, P> {
    pub fn summarizer<S2: Summarizer>(self, summarizer: S2) -> ChunkedSummarizerBuilder<S2, P> {
        ChunkedSummarizerBuilder {
            summarizer,
            splitter: self.splitter,
            chunk_budget: self.chunk_budget,
            min_words: self.min_words,
            concurrency: self.concurrency,
        }
    }

    pub fn splitter<P2: SentenceSplitter>(self, splitter: P2) -> ChunkedSummarizerBuilder<S, P2> {
        ChunkedSummarizerBuilder {
            summarizer: self.summarizer,
            splitter,
            chunk_budget: self.chunk_budget,
            min_words: self.min_words,
            concurrency: self.concurrency,
        }
    }

    /// Overrides the summarizer's `CONTEXT_WINDOW_LIMIT` as the chunk budget
    pub fn chunk_budget(mut self, chunk_budget: usize) -> Self {
        self.chunk_budget = Some(chunk_budget);
        self
    }

    pub fn min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    /// Number of chunks summarized at once. 1 keeps calls strictly sequential.
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }
}

impl<S, P> ChunkedSummarizerBuilder<S, P>
where
    S: Summarizer,
    P: SentenceSplitter,
{
    pub fn build(self) -> ChunkedSummarizer<S, P> {
        ChunkedSummarizer {
            summarizer: self.summarizer,
            splitter: self.splitter,
            chunk_budget: self.chunk_budget.unwrap_or(S::CONTEXT_WINDOW_LIMIT),
            min_words: self.min_words,
            concurrency: self.concurrency.max(1),
        }
    }
}
