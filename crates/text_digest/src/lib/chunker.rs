use crate::text::char_len;

/// Character budget for a single summarizer input
pub const DEFAULT_CHUNK_BUDGET: usize = 1024;

/// Inputs with fewer words than this are not summarized at all
pub const MIN_WORDS_TO_SUMMARIZE: usize = 50;

/// Greedily packs consecutive sentences into chunks that stay under `budget`
/// characters.
///
/// A sentence joins the current chunk while the chunk (including its trailing
/// separator) plus the sentence is shorter than `budget`. Otherwise the current
/// chunk is closed and the sentence starts the next one, so a sentence that is
/// longer than `budget` on its own ends up as a chunk by itself.
pub fn chunk_sentences<'a, I>(sentences: I, budget: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for sentence in sentences {
        let sentence_len = char_len(sentence);

        if current_len + sentence_len < budget {
            current.push_str(sentence);
            current.push(' ');
            current_len += sentence_len + 1;
            continue;
        }

        if !current.is_empty() {
            chunks.push(current.trim_end().to_string());
        }
        current = format!("{sentence} ");
        current_len = sentence_len + 1;
    }

    if !current.is_empty() {
        chunks.push(current.trim_end().to_string());
    }

    chunks
}
