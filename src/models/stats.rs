use serde::{Deserialize, Serialize};

/// Aggregate counters accumulated across every located archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationStats {
    pub total_word_count: u64,
    /// Phrase occurrence counts, in first-seen phrase order.
    pub phrase_counts: Vec<PhraseCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseCount {
    pub phrase: String,
    pub count: u64,
}

impl ConversationStats {
    /// Create an empty counter set for the given target phrases.
    ///
    /// Duplicate phrases collapse into a single entry; the first occurrence
    /// keeps the display position.
    pub fn new(phrases: &[String]) -> Self {
        let mut phrase_counts: Vec<PhraseCount> = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            if !phrase_counts.iter().any(|entry| entry.phrase == *phrase) {
                phrase_counts.push(PhraseCount { phrase: phrase.clone(), count: 0 });
            }
        }
        Self { total_word_count: 0, phrase_counts }
    }

    /// Fold one transcript text into the running totals.
    ///
    /// Word counting is whitespace tokenization of the lower-cased text.
    /// Phrase counting is non-overlapping, left-to-right, case-insensitive
    /// substring counting: "cat" matches inside "category", and "aaa" counts
    /// one occurrence of "aa".
    pub fn add_text(&mut self, text: &str) {
        let lowered = text.to_lowercase();
        self.total_word_count += lowered.split_whitespace().count() as u64;

        for entry in &mut self.phrase_counts {
            let needle = entry.phrase.to_lowercase();
            entry.count += lowered.matches(needle.as_str()).count() as u64;
        }
    }
}
