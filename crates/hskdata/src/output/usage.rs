//! Per-radical usage statistics, collected while deriving the wordfile.

use hsk_core::{
    dataset_types::{ExampleWord, Word},
    per_level, Level, PerLevel,
};
use std::collections::HashMap;

pub const MAX_EXAMPLES_PER_LEVEL: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadicalUsage {
    pub word_counts_by_level: PerLevel<u32>,
    pub char_counts_by_level: PerLevel<u32>,
    pub examples_by_level: PerLevel<Vec<ExampleWord>>,
}

impl RadicalUsage {
    /// Usage with every level present and empty.
    pub fn unused() -> Self {
        Self {
            word_counts_by_level: per_level(|_| 0),
            char_counts_by_level: per_level(|_| 0),
            examples_by_level: per_level(|_| Vec::new()),
        }
    }

    /// The lowest level with at least one word using the radical.
    pub fn first_level(&self) -> Option<Level> {
        self.word_counts_by_level
            .iter()
            .find(|(_, count)| **count > 0)
            .map(|(level, _)| *level)
    }
}

/// Accumulates radical usage one word at a time.
#[derive(Debug, Default)]
pub struct UsageAggregator {
    usage: HashMap<String, RadicalUsage>,
}

impl UsageAggregator {
    /// Records that `word` uses the radical through `chars` of its characters.
    pub fn accumulate(&mut self, radical_id: &str, level: Level, chars: u32, word: &Word) {
        let usage = self
            .usage
            .entry(radical_id.to_string())
            .or_insert_with(RadicalUsage::unused);
        *usage.word_counts_by_level.entry(level).or_default() += 1;
        *usage.char_counts_by_level.entry(level).or_default() += chars;

        let examples = usage.examples_by_level.entry(level).or_default();
        if examples.len() < MAX_EXAMPLES_PER_LEVEL && !examples.iter().any(|e| e.word == word.word)
        {
            examples.push(word.to_example());
        }
    }

    pub fn finalize(self) -> HashMap<String, RadicalUsage> {
        self.usage
    }
}
