//! Types and functionality for creating the summary metadata.

use crate::{grammarfile::Grammarfile, radicalfile::Radicalfile, wordfile::Wordfile};
use chrono::{DateTime, Utc};
use hsk_core::{
    dataset_types::{LevelSummary, Meta, Sources, Totals},
    per_level,
};

pub fn derive(
    radicals: &Radicalfile,
    words: &Wordfile,
    grammar: &Grammarfile,
    generated_at: DateTime<Utc>,
) -> Meta {
    let levels = per_level(|level| {
        let first_levels = radicals.radicals.iter().filter_map(|r| r.first_hsk_level);
        LevelSummary {
            words: words.levels.get(&level).map(Vec::len).unwrap_or_default(),
            grammar_points: grammar.points.iter().filter(|p| p.level == level).count(),
            radicals_introduced: first_levels.clone().filter(|first| *first == level).count(),
            radicals_available_cumulative: first_levels.filter(|first| *first <= level).count(),
        }
    });

    Meta {
        generated_at: generated_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        levels,
        totals: Totals {
            radicals: radicals.radicals.len(),
            words: words.word_count(),
            grammar_points: grammar.points.len(),
        },
        sources: sources(),
    }
}

fn sources() -> Sources {
    let urls = |urls: &[&str]| urls.iter().map(|url| url.to_string()).collect();
    Sources {
        radicals: urls(&[
            "https://www.unicode.org/Public/UCD/latest/ucd/CJKRadicals.txt",
            "https://www.unicode.org/Public/UCD/latest/ucd/Unihan.zip",
        ]),
        words: urls(&["https://github.com/drkameleon/complete-hsk-vocabulary"]),
        grammar: urls(&[
            "https://github.com/krmanik/HSK-3.0",
            "https://hsk.cn-bj.ufileos.com/3.0/%E6%96%B0%E7%89%88HSK%E8%80%83%E8%AF%95%E5%A4%A7%E7%BA%B2%EF%BC%88%E8%AF%8D%E6%B1%87%E3%80%81%E6%B1%89%E5%AD%97%E3%80%81%E8%AF%AD%E6%B3%95%EF%BC%89.pdf",
            "https://github.com/mozillazg/rust-pinyin",
        ]),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::usage::RadicalUsage;
    use chrono::TimeZone;
    use hsk_core::{
        dataset_types::{GrammarPoint, Radical, Word},
        Level, LEVELS,
    };

    fn radical(id: &str, first_hsk_level: Option<Level>) -> Radical {
        let usage = RadicalUsage::unused();
        Radical {
            index: 0,
            id: id.to_string(),
            symbol: String::new(),
            ideograph: String::new(),
            unicode_name: String::new(),
            name: String::new(),
            pinyin: String::new(),
            definition: String::new(),
            strokes: None,
            first_hsk_level,
            word_counts_by_level: usage.word_counts_by_level,
            char_counts_by_level: usage.char_counts_by_level,
            examples_by_level: usage.examples_by_level,
        }
    }

    fn word(level: Level) -> Word {
        Word {
            id: String::new(),
            word: String::new(),
            pinyin: String::new(),
            meaning: String::new(),
            level,
            frequency: 0,
            radical_ids: vec![],
        }
    }

    fn point(level: Level) -> GrammarPoint {
        GrammarPoint {
            id: String::new(),
            level,
            level_label: String::new(),
            code: String::new(),
            title: String::new(),
            category: String::new(),
            examples: vec![],
            source: String::new(),
            title_pinyin: String::new(),
            examples_pinyin: vec![],
        }
    }

    fn derive_fixture() -> Meta {
        let radicals = Radicalfile {
            radicals: vec![
                radical("1", Some(1)),
                radical("2", Some(3)),
                radical("3", Some(3)),
                radical("4", None),
                radical("5", Some(7)),
            ],
        };
        let mut levels = per_level(|_| vec![]);
        levels.insert(1, vec![word(1), word(1)]);
        levels.insert(7, vec![word(7)]);
        let words = Wordfile { levels };
        let grammar = Grammarfile {
            points: vec![point(1), point(2), point(2)],
        };
        let generated_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        derive(&radicals, &words, &grammar, generated_at)
    }

    #[test]
    fn counts_per_level() {
        let meta = derive_fixture();
        assert_eq!(
            meta.levels[&1],
            LevelSummary {
                words: 2,
                grammar_points: 1,
                radicals_introduced: 1,
                radicals_available_cumulative: 1,
            }
        );
        assert_eq!(meta.levels[&2].grammar_points, 2);
        assert_eq!(meta.levels[&2].radicals_introduced, 0);
        assert_eq!(meta.levels[&3].radicals_introduced, 2);
        assert_eq!(meta.levels[&3].radicals_available_cumulative, 3);
        // unused radicals are never available
        assert_eq!(meta.levels[&7].radicals_available_cumulative, 4);
    }

    #[test]
    fn cumulative_radicals_never_decrease() {
        let meta = derive_fixture();
        let cumulative = LEVELS
            .map(|level| meta.levels[&level].radicals_available_cumulative)
            .collect::<Vec<_>>();
        assert!(cumulative.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn totals_and_timestamp() {
        let meta = derive_fixture();
        assert_eq!(
            meta.totals,
            Totals {
                radicals: 5,
                words: 3,
                grammar_points: 3,
            }
        );
        assert_eq!(meta.generated_at, "2024-01-02T03:04:05Z");
        assert_eq!(meta.sources.words.len(), 1);
    }
}
