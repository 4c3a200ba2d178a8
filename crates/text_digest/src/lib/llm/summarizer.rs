use std::{fmt::Display, future::Future};

use serde::Deserialize;

use crate::LengthBounds;

/// A length-limited text-to-text summarization backend.
///
/// Implementations are explicit inference handles: construct once, then pass
/// into the driver. Calls are assumed to be slow.
pub trait Summarizer {
    /// Longest input, in characters, the backend handles reliably
    const CONTEXT_WINDOW_LIMIT: usize = crate::DEFAULT_CHUNK_BUDGET;
    const SUMMARIZER_MODEL: &'static str;

    type Error: Display;

    fn summarize(
        &self,
        content: &str,
        bounds: LengthBounds,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}
