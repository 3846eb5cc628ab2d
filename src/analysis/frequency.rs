use crate::error::AnalysisError;
use std::collections::HashMap;

/// Number of words shown on the frequency chart
pub const TOP_WORD_COUNT: usize = 10;

#[derive(Debug, Clone, Copy)]
struct Entry {
    count: usize,
    first_seen: usize,
}

/// Occurrence counts of word tokens
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    entries: HashMap<String, Entry>,
}

impl FrequencyTable {
    /// Counts every token of the sequence
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: HashMap<String, Entry> = HashMap::new();
        for (position, token) in tokens.into_iter().enumerate() {
            let token = token.as_ref();
            match entries.get_mut(token) {
                Some(entry) => entry.count += 1,
                None => {
                    entries.insert(
                        token.to_string(),
                        Entry {
                            count: 1,
                            first_seen: position,
                        },
                    );
                }
            }
        }
        Self { entries }
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occurrences of a token (0 when absent)
    pub fn count(&self, token: &str) -> usize {
        self.entries.get(token).map_or(0, |e| e.count)
    }

    /// The `n` most frequent tokens by descending count.
    ///
    /// Tokens with equal counts keep the order in which they first appeared.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<(&String, &Entry)> = self.entries.iter().collect();
        ranked.sort_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        ranked
            .into_iter()
            .take(n)
            .map(|(token, entry)| (token.clone(), entry.count))
            .collect()
    }
}

/// Counts the tokens and returns the `n` most frequent ones.
///
/// Fails with [`AnalysisError::EmptyInput`] when there is nothing to count.
pub fn top_words<S: AsRef<str>>(
    tokens: &[S],
    n: usize,
) -> Result<Vec<(String, usize)>, AnalysisError> {
    let table = FrequencyTable::from_tokens(tokens);
    if table.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let top = table.most_common(n);
    ::log::debug!(
        "Counted {} distinct tokens, top {}: {:?}",
        table.len(),
        top.len(),
        top
    );
    Ok(top)
}
