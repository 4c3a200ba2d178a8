//! # Sentence boundary detection
//!
//! Sentences are the atomic units the chunker accumulates; they are never split.

use std::sync::LazyLock;

use regex::Regex;

/// Terminal punctuation, optional closing quotes or brackets, then whitespace.
static SENTENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([.!?]+["'”’)\]]*)\s+"#).unwrap());

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "etc", "e.g", "i.e", "inc", "ltd",
    "co", "corp", "fig", "approx",
];

pub trait SentenceSplitter {
    /// Splits `text` into ordered, trimmed, non-empty sentences borrowed from it.
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

impl<T: SentenceSplitter + ?Sized> SentenceSplitter for &T {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).split(text)
    }
}

/// Punctuation-driven splitter for English prose.
///
/// A lone `.` after a known abbreviation, or after a capital initial that
/// follows a capitalised word, does not end a sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedSplitter;

impl RuleBasedSplitter {
    fn is_abbreviation(preceding: &str) -> bool {
        let mut words = preceding.split_whitespace().rev();
        let Some(word) = words.next() else {
            return false;
        };
        let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());

        if Self::is_initial(word) {
            // "John F. Kennedy", "Mr. J. Doe", but not "plan B."
            return words
                .next()
                .map_or(true, |prev| prev.starts_with(char::is_uppercase));
        }

        // Capitalised only, so "the answer was no." still ends a sentence
        word == "No" || ABBREVIATIONS.contains(&word.to_lowercase().as_str())
    }

    /// A single capital letter other than the words `I` and `A`
    fn is_initial(word: &str) -> bool {
        let mut chars = word.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.is_uppercase() && c != 'I' && c != 'A',
            _ => false,
        }
    }
}

impl SentenceSplitter for RuleBasedSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for caps in SENTENCE_END_RE.captures_iter(text) {
            let (Some(whole), Some(terminator)) = (caps.get(0), caps.get(1)) else {
                continue;
            };

            if terminator.as_str() == "."
                && Self::is_abbreviation(&text[start..terminator.start()])
            {
                continue;
            }

            let sentence = text[start..terminator.end()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = whole.end();
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }

        sentences
    }
}
