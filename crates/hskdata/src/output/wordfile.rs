//! Types and functionality for creating the leveled word lists.

use crate::{
    complete_hsk::{CompleteHsk, Entry},
    usage::{RadicalUsage, UsageAggregator},
};
use hsk_core::{dataset_types::Word, per_level, radical_sort_key, PerLevel};
use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct Wordfile {
    pub levels: PerLevel<Vec<Word>>,
}

impl Wordfile {
    /// Sorts the vocabulary entries into levels and links their characters to radicals.
    /// Also returns how each radical is used by the words.
    pub fn derive(
        entries: CompleteHsk,
        char_to_radical: &HashMap<char, String>,
    ) -> (Self, HashMap<String, RadicalUsage>) {
        let mut levels = per_level(|_| Vec::new());
        let mut usage = UsageAggregator::default();

        let mut word_seq = 0;
        for entry in entries {
            let Some(level) = entry.hsk_level() else {
                tracing::debug!("Dropping {} with levels {:?}", entry.simplified, entry.level);
                continue;
            };
            word_seq += 1;

            let char_radicals = char_radicals(&entry, char_to_radical);
            let radical_ids = char_radicals
                .iter()
                .unique()
                .sorted_by(|l, r| {
                    radical_sort_key(l)
                        .cmp(&radical_sort_key(r))
                        .then(l.cmp(r))
                })
                .map(|id| id.to_string())
                .collect::<Vec<_>>();

            let word = Word {
                id: format!("w-{word_seq:06}"),
                word: entry.simplified.clone(),
                pinyin: entry.pinyin().to_string(),
                meaning: entry.meaning().to_string(),
                level,
                frequency: entry.frequency(),
                radical_ids,
            };
            for radical_id in &word.radical_ids {
                let chars = char_radicals
                    .iter()
                    .filter(|r| **r == radical_id.as_str())
                    .count();
                usage.accumulate(radical_id, level, chars as u32, &word);
            }
            levels.entry(level).or_default().push(word);
        }

        for words in levels.values_mut() {
            words.sort_by(|l, r| l.frequency.cmp(&r.frequency).then(l.word.cmp(&r.word)));
        }
        (Self { levels }, usage.finalize())
    }

    pub fn word_count(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }
}

/// The radical of each of the entry's characters, characters without one are skipped.
fn char_radicals<'a>(entry: &Entry, char_to_radical: &'a HashMap<char, String>) -> Vec<&'a str> {
    hsk::hanzi_from_word(&entry.simplified)
        .filter_map(|c| {
            let radical = char_to_radical.get(&c);
            if radical.is_none() {
                tracing::debug!("No radical for {c}");
            }
            radical.map(String::as_str)
        })
        .collect()
}
