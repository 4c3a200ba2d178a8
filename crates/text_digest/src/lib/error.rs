#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No text provided")]
    EmptyInput,
    #[error("Summarizer failed on segment {segment}/{total}: {message}")]
    Summarizer {
        segment: usize,
        total: usize,
        message: String,
    },
    #[error("Summarizer failed while condensing the combined summary: {0}")]
    Condense(String),
}
