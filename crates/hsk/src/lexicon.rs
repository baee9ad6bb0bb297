//! Per-character pronunciation lookup.

use pinyin::ToPinyin;
use std::{collections::HashMap, hash::BuildHasher};

/// Looks up the primary reading of Han characters.
pub trait Lexicon {
    /// Returns exactly one tone-marked syllable for each character in `han`.
    fn readings(&self, han: &str) -> Vec<String>;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn readings(&self, han: &str) -> Vec<String> {
        (**self).readings(han)
    }
}

/// Lexicon backed by the `pinyin` crate's dictionary.
/// Characters without a reading are kept as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinLexicon;

impl Lexicon for PinyinLexicon {
    fn readings(&self, han: &str) -> Vec<String> {
        han.chars()
            .map(|c| match c.to_pinyin() {
                Some(pinyin) => pinyin.with_tone().to_string(),
                None => {
                    tracing::debug!("No reading for {c}");
                    c.to_string()
                }
            })
            .collect()
    }
}

/// A fixed character to reading table, such as one built from Unihan's `kMandarin`.
/// Characters missing from the table are kept as they are.
impl<S: BuildHasher> Lexicon for HashMap<char, String, S> {
    fn readings(&self, han: &str) -> Vec<String> {
        han.chars()
            .map(|c| self.get(&c).cloned().unwrap_or_else(|| c.to_string()))
            .collect()
    }
}
