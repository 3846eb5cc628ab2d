use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("static regex"));

/// Splits page text into lowercase word tokens.
///
/// A token is a maximal run of Unicode word characters (letters, digits,
/// underscore). Nothing is filtered out: no stopwords, no stemming, no
/// minimum length.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
