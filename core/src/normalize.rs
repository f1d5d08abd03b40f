//! Lexical normalization: raw text to matchable tokens.
//!
//! The extractor only ever sees the output of a [`Normalizer`]. The default
//! [`StemmingNormalizer`] lower-cases, splits on whitespace, joins a few known
//! two-word menu items, drops English stopwords and stems what remains with
//! the Snowball English stemmer.

use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};

use crate::quantity::is_number_word;

/// Turns a raw utterance into the ordered token sequence the extractor reads.
pub trait Normalizer {
    fn normalize(&self, text: &str) -> Vec<String>;
}

const COMPOUNDS: &[(&str, &str)] = &[
    ("sugar", "free"),
    ("extra", "cheese"),
    ("green", "pepper"),
    ("green", "peppers"),
];

const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Default normalizer backed by the Snowball English stemmer.
///
/// Number words bypass the stemmer so the quantity resolver still knows them
/// ("twelve" would otherwise come out as "twelv").
pub struct StemmingNormalizer {
    stemmer: Stemmer,
}

impl StemmingNormalizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for StemmingNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

// rust_stemmers::Stemmer has no Debug impl.
impl fmt::Debug for StemmingNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemmingNormalizer")
            .field("algorithm", &"english")
            .finish()
    }
}

impl Normalizer for StemmingNormalizer {
    fn normalize(&self, text: &str) -> Vec<String> {
        let words = join_compounds(tokenize(text));
        words
            .into_iter()
            .filter(|word| !STOPWORDS.contains(&word.as_str()))
            .map(|word| {
                if is_number_word(&word) {
                    word
                } else {
                    self.stemmer.stem(&word).into_owned()
                }
            })
            .collect()
    }
}

/// Lower-case and split on whitespace, trimming punctuation at word edges.
/// Hyphens and apostrophes inside a word are kept.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

fn join_compounds(words: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(words.len());
    let mut iter = words.into_iter().peekable();
    while let Some(word) = iter.next() {
        let joins_next = iter.peek().is_some_and(|next| {
            COMPOUNDS
                .iter()
                .any(|(first, second)| *first == word && *second == next.as_str())
        });
        if joins_next && let Some(next) = iter.next() {
            out.push(format!("{word}-{next}"));
        } else {
            out.push(word);
        }
    }
    out
}
