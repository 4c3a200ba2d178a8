pub mod splitter;
pub mod summarizer;
