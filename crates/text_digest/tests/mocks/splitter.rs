use text_digest::SentenceSplitter;

/// Treats every `;`-terminated clause as a sentence.
#[derive(Clone, Copy, Default)]
pub struct SemicolonSplitter;

impl SentenceSplitter for SemicolonSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_inclusive(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
