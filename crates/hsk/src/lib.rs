//! Provides the text processing of the HSK study app.

pub mod lexicon;
pub mod segmenter;
pub mod tone;

pub use lexicon::{Lexicon, PinyinLexicon};

/// Characters that get annotated with pinyin:
/// CJK Unified Ideographs Extension A and CJK Unified Ideographs.
pub fn is_han(c: char) -> bool {
    ('\u{3400}'..='\u{9FFF}').contains(&c)
}

/// Unicode CJK Unified Ideographs
pub fn is_cjk_unified(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

pub fn contains_cjk_unified(text: &str) -> bool {
    text.chars().any(is_cjk_unified)
}

/// The characters of a word that can be broken down into radicals, in order.
pub fn hanzi_from_word(word: &str) -> impl Iterator<Item = char> + '_ {
    word.chars().filter(|c| is_cjk_unified(*c))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn recognises_han() {
        assert!(!is_han('k'));
        assert!(!is_han('，'));
        assert!(is_han('好'));
        assert!(is_han('\u{3400}'));
        assert!(!is_cjk_unified('\u{3400}'));
    }

    #[test]
    fn extracts_hanzi_in_order() {
        let hanzi = hanzi_from_word("卡拉OK厅").collect::<String>();
        assert_eq!(hanzi, "卡拉厅");
    }
}
