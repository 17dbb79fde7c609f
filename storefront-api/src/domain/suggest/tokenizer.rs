use crate::domain::catalog::PREFIXES;

const MIN_TOKEN_LEN: usize = 3;

/// Filler words that carry no product meaning. The generated-catalog prefixes
/// are stop words too, see [`is_stop_word`].
const STOP_WORDS: [&str; 20] = [
    "with",
    "and",
    "for",
    "the",
    "this",
    "that",
    "from",
    "your",
    "you",
    "are",
    "all",
    "use",
    "designed",
    "everyday",
    "reliable",
    "performance",
    "value",
    "focused",
    "shopping",
    "model",
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token) || PREFIXES.iter().any(|p| p.eq_ignore_ascii_case(token))
}

/// Lowercases `text`, splits on anything that is not `[a-z0-9]` and drops
/// short tokens and stop words. Duplicates are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|token| token.len() >= MIN_TOKEN_LEN && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}
