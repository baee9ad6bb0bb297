//! HSK study app core types and functions.

use std::{collections::BTreeMap, ops::RangeInclusive};

pub mod dataset_types;

/// An HSK level. Levels 1 to 6 map to the levels of the same name,
/// level 7 is the merged 7-9 band.
pub type Level = u8;

pub const LEVELS: RangeInclusive<Level> = 1..=7;

pub const MERGED_LEVEL: Level = 7;

/// A value for each level, serialized as a map keyed by the level number.
pub type PerLevel<T> = BTreeMap<Level, T>;

/// Creates a map with an entry for every level.
pub fn per_level<T>(mut f: impl FnMut(Level) -> T) -> PerLevel<T> {
    LEVELS.map(|level| (level, f(level))).collect()
}

pub fn level_label(level: Level) -> String {
    if level == MERGED_LEVEL {
        "7-9".to_string()
    } else {
        level.to_string()
    }
}

/// Sort key for radical ids such as `9`, `9'` and `162''`.
/// The leading number is the primary rank and the amount of variant marks after it the secondary,
/// ids without a leading number go last.
pub fn radical_sort_key(radical_id: &str) -> (u32, usize) {
    const NO_NUMBER: (u32, usize) = (999, 0);

    let digits_end = radical_id
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(radical_id.len());
    let Ok(number) = radical_id[..digits_end].parse::<u32>() else {
        return NO_NUMBER;
    };
    let variant_marks = radical_id[digits_end..]
        .chars()
        .take_while(|c| *c == '\'')
        .count();
    (number, variant_marks)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sorts_radical_ids_numerically() {
        let mut ids = vec!["214", "214'", "9", "9'"];
        ids.sort_by_key(|id| radical_sort_key(id));
        assert_eq!(ids, &["9", "9'", "214", "214'"]);
    }

    #[test]
    fn variant_marks_are_secondary() {
        assert!(radical_sort_key("9") < radical_sort_key("9'"));
        assert!(radical_sort_key("9'") < radical_sort_key("9''"));
        assert!(radical_sort_key("9''") < radical_sort_key("10"));
    }

    #[test]
    fn ids_without_number_go_last() {
        assert_eq!(radical_sort_key("x"), (999, 0));
        assert!(radical_sort_key("214''") < radical_sort_key("x"));
    }

    #[test]
    fn labels_merged_level() {
        assert_eq!(level_label(1), "1");
        assert_eq!(level_label(6), "6");
        assert_eq!(level_label(7), "7-9");
    }

    #[test]
    fn per_level_covers_every_level() {
        let counts = per_level(|_| 0u32);
        assert_eq!(counts.keys().copied().collect::<Vec<_>>(), LEVELS.collect::<Vec<_>>());
    }
}
