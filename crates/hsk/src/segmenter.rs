//! Annotates mixed text with pinyin.
//! Runs of Han characters are replaced with their readings, everything else is kept.

use crate::{is_han, Lexicon};
use regex::Regex;
use std::sync::LazyLock;

static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([，。！？；：、,.!?;:])").expect("invalid regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("invalid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run<'a> {
    Han(&'a str),
    Other(&'a str),
}

/// Iterates through the maximal Han and non-Han runs of a string.
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    idx: usize,
    s: &'a str,
}

impl<'a> Runs<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { idx: 0, s }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.s.get(self.idx..)?;
        let first = rest.chars().next()?;
        let han = is_han(first);
        let len = rest
            .char_indices()
            .find(|(_, c)| is_han(*c) != han)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.idx += len;

        let run = &rest[..len];
        Some(if han { Run::Han(run) } else { Run::Other(run) })
    }
}

/// Replaces every Han run in `text` with its space-separated syllables and tidies up the spacing.
/// `我是 Tom。` -> `wǒ shì Tom。`
pub fn text_to_pinyin<L: Lexicon + ?Sized>(text: &str, lexicon: &L) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut merged = String::with_capacity(text.len() * 2);
    for run in Runs::new(text) {
        match run {
            Run::Han(han) => merged.push_str(&lexicon.readings(han).join(" ")),
            Run::Other(other) => merged.push_str(other),
        }
    }
    reflow(&merged)
}

/// Removes whitespace before punctuation and collapses the rest.
fn reflow(text: &str) -> String {
    let text = SPACE_BEFORE_PUNCTUATION.replace_all(text, "$1");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn lexicon() -> HashMap<char, String> {
        [
            ('我', "wǒ"),
            ('是', "shì"),
            ('你', "nǐ"),
            ('好', "hǎo"),
            ('们', "men"),
        ]
        .into_iter()
        .map(|(c, r)| (c, r.to_string()))
        .collect()
    }

    #[test]
    fn splits_runs() {
        let runs = Runs::new("A你好, b").collect::<Vec<_>>();
        assert_eq!(
            runs,
            &[Run::Other("A"), Run::Han("你好"), Run::Other(", b")]
        );
    }

    #[test]
    fn empty_is_empty() {
        assert_eq!(text_to_pinyin("", &lexicon()), "");
        assert_eq!(Runs::new("").count(), 0);
    }

    #[test]
    fn non_han_is_unchanged() {
        assert_eq!(text_to_pinyin("A + B", &lexicon()), "A + B");
        assert_eq!(text_to_pinyin("  A   +\tB ", &lexicon()), "A + B");
    }

    #[test]
    fn replaces_han_runs_only() {
        assert_eq!(text_to_pinyin("Subj + 是 + Obj", &lexicon()), "Subj + shì + Obj");
        assert_eq!(text_to_pinyin("你们好", &lexicon()), "nǐ men hǎo");
    }

    #[test]
    fn removes_space_before_punctuation() {
        assert_eq!(text_to_pinyin("你好，我是你们。", &lexicon()), "nǐ hǎo，wǒ shì nǐ men。");
        assert_eq!(text_to_pinyin("你好 !", &lexicon()), "nǐ hǎo!");
        assert_eq!(text_to_pinyin("A 是 ; B", &lexicon()), "A shì; B");
    }
}
