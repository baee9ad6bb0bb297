//! Records of the radical, word, grammar and metadata datasets.

use crate::{Level, PerLevel};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Radical {
    /// 1-based position in the sorted radical list.
    pub index: usize,
    pub id: String,
    /// The radical form if it has one, otherwise the ideograph.
    pub symbol: String,
    pub ideograph: String,
    pub unicode_name: String,
    pub name: String,
    pub pinyin: String,
    pub definition: String,
    pub strokes: Option<u32>,
    /// The lowest level with at least one word using this radical.
    pub first_hsk_level: Option<Level>,
    pub word_counts_by_level: PerLevel<u32>,
    pub char_counts_by_level: PerLevel<u32>,
    pub examples_by_level: PerLevel<Vec<ExampleWord>>,
}

/// A snapshot of a word shown as an example of a radical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleWord {
    pub word: String,
    pub pinyin: String,
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    pub id: String,
    pub word: String,
    pub pinyin: String,
    pub meaning: String,
    pub level: Level,
    /// Frequency rank, lower is more frequent.
    pub frequency: u32,
    pub radical_ids: Vec<String>,
}

impl Word {
    pub fn to_example(&self) -> ExampleWord {
        ExampleWord {
            word: self.word.clone(),
            pinyin: self.pinyin.clone(),
            meaning: self.meaning.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarPoint {
    pub id: String,
    pub level: Level,
    pub level_label: String,
    pub code: String,
    pub title: String,
    pub category: String,
    pub examples: Vec<String>,
    pub source: String,
    pub title_pinyin: String,
    pub examples_pinyin: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub generated_at: String,
    pub levels: PerLevel<LevelSummary>,
    pub totals: Totals,
    pub sources: Sources,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelSummary {
    pub words: usize,
    pub grammar_points: usize,
    pub radicals_introduced: usize,
    pub radicals_available_cumulative: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub radicals: usize,
    pub words: usize,
    pub grammar_points: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sources {
    pub radicals: Vec<String>,
    pub words: Vec<String>,
    pub grammar: Vec<String>,
}
