//! Types and functionality for creating the radical list.

use crate::{cjk_radicals::CjkRadicals, unihan::Unihan, usage::RadicalUsage};
use hsk_core::{dataset_types::Radical, radical_sort_key};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct Radicalfile {
    pub radicals: Vec<Radical>,
}

/// A radical table row with its display character resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRadical {
    pub id: String,
    pub symbol: char,
    pub ideograph: char,
    pub unicode_name: String,
}

/// Resolves the symbol and Unicode name of each radical and sorts them by id,
/// so that `9` < `9'` < `9''` < `214`.
pub fn index_radicals(
    table: CjkRadicals,
    unicode_name: impl Fn(char) -> Option<String>,
) -> Vec<IndexedRadical> {
    let mut index = table
        .rows
        .into_iter()
        .map(|row| {
            let symbol = row.radical.unwrap_or(row.ideograph);
            IndexedRadical {
                unicode_name: unicode_name(symbol).unwrap_or_default(),
                id: row.id,
                symbol,
                ideograph: row.ideograph,
            }
        })
        .collect::<Vec<_>>();
    index.sort_by_key(|radical| radical_sort_key(&radical.id));
    index
}

/// Looks up the name of `c` in the Unicode character database.
pub fn unicode_name(c: char) -> Option<String> {
    unicode_names2::name(c).map(|name| name.to_string())
}

impl Radicalfile {
    pub fn derive(
        index: Vec<IndexedRadical>,
        usage: &HashMap<String, RadicalUsage>,
        unihan: &Unihan,
    ) -> Self {
        let radicals = index
            .into_iter()
            .enumerate()
            .map(|(idx, radical)| {
                let usage = usage
                    .get(&radical.id)
                    .cloned()
                    .unwrap_or_else(RadicalUsage::unused);
                let ideograph = radical.ideograph;
                Radical {
                    index: idx + 1,
                    name: display_name(&radical.unicode_name),
                    unicode_name: radical.unicode_name,
                    id: radical.id,
                    symbol: radical.symbol.to_string(),
                    ideograph: ideograph.to_string(),
                    pinyin: unihan.mandarin.get(&ideograph).cloned().unwrap_or_default(),
                    definition: unihan
                        .definitions
                        .get(&ideograph)
                        .cloned()
                        .unwrap_or_default(),
                    strokes: unihan.total_strokes.get(&ideograph).copied(),
                    first_hsk_level: usage.first_level(),
                    word_counts_by_level: usage.word_counts_by_level,
                    char_counts_by_level: usage.char_counts_by_level,
                    examples_by_level: usage.examples_by_level,
                }
            })
            .collect();
        Self { radicals }
    }
}

/// `KANGXI RADICAL WATER` -> `WATER`
fn display_name(unicode_name: &str) -> String {
    unicode_name
        .replace("KANGXI RADICAL ", "")
        .replace("CJK RADICAL ", "")
}
