use std::collections::HashMap;
use std::fmt;

/// Token occurrence counts for a single message. Recomputed fresh per
/// message, never merged across messages. Iteration and display follow
/// first-occurrence order within the message.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    counts: HashMap<String, u32>,
    order: Vec<String>,
}

impl WordFrequencies {
    /// Splits a normalized message on whitespace and counts each token.
    /// Tokens are already lowercase and punctuation-free at this point.
    pub fn of(normalized: &str) -> Self {
        let mut frequencies = Self::default();
        for word in normalized.split_whitespace() {
            match frequencies.counts.get_mut(word) {
                Some(count) => *count += 1,
                None => {
                    frequencies.counts.insert(word.to_string(), 1);
                    frequencies.order.push(word.to_string());
                }
            }
        }
        frequencies
    }

    /// Count for `word`, looked up by its lowercased form. Absent words
    /// yield 0, never an error.
    pub fn get(&self, word: &str) -> u32 {
        self.counts
            .get(word.to_lowercase().as_str())
            .copied()
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.order.iter().map(|word| (word.as_str(), self.counts[word]))
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl fmt::Display for WordFrequencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (word, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{}\": {}", word, count)?;
        }
        f.write_str("}")
    }
}
