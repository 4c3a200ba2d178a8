mod chunker;
mod error;
mod llm;
mod processor;
pub mod sentence;
pub mod text;
pub mod tracing;
pub mod types;

pub use chunker::{chunk_sentences, DEFAULT_CHUNK_BUDGET, MIN_WORDS_TO_SUMMARIZE};
pub use error::Error;
pub use llm::openai;
pub use llm::summarizer::{Summarizer, SummaryResponse};
pub use processor::{builder::ChunkedSummarizerBuilder, ChunkedSummarizer};
pub use sentence::{RuleBasedSplitter, SentenceSplitter};
pub use types::{LengthBounds, SummaryResult, SummaryStatus};
