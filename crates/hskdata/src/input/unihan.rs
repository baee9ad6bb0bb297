//! Models and parses the Unihan database files.
//! See <https://www.unicode.org/reports/tr38/>

use super::{content_lines, parse_codepoint};
use hsk::tone;
use std::collections::HashMap;

pub const READINGS_FILE: &str = "Unihan_Readings.txt";
pub const IRG_SOURCES_FILE: &str = "Unihan_IRGSources.txt";

/// The character properties used for radicals and words.
/// When a property is listed more than once for a character, the first one is used.
#[derive(Debug, Clone, Default)]
pub struct Unihan {
    /// `kMandarin`, the first reading with tone marks.
    pub mandarin: HashMap<char, String>,
    /// `kDefinition`, up to the first `;`.
    pub definitions: HashMap<char, String>,
    /// `kRSUnicode`, the radical id of the first radical-stroke index.
    pub radical_ids: HashMap<char, String>,
    /// `kTotalStrokes`
    pub total_strokes: HashMap<char, u32>,
}

impl Unihan {
    /// Parses the contents of `Unihan_Readings.txt` and `Unihan_IRGSources.txt`.
    pub fn from_files(readings: &str, irg_sources: &str) -> Self {
        let mut unihan = Self::default();
        for (c, property, value) in properties(readings).chain(properties(irg_sources)) {
            unihan.insert(c, property, value);
        }
        tracing::debug!(
            "{} readings, {} definitions, {} radical ids, {} stroke counts",
            unihan.mandarin.len(),
            unihan.definitions.len(),
            unihan.radical_ids.len(),
            unihan.total_strokes.len()
        );
        unihan
    }

    fn insert(&mut self, c: char, property: &str, value: &str) {
        let first_token = value.split_whitespace().next();
        match property {
            "kMandarin" => {
                if let Some(reading) = first_token {
                    self.mandarin
                        .entry(c)
                        .or_insert_with(|| tone::pinyin_to_marked(reading));
                }
            }
            "kDefinition" => {
                let definition = value.split(';').next().unwrap_or_default();
                self.definitions
                    .entry(c)
                    .or_insert_with(|| definition.trim().to_string());
            }
            "kRSUnicode" => {
                // radical.strokes, e.g. 162'.3
                if let Some(index) = first_token {
                    let radical_id = index.split('.').next().unwrap_or_default();
                    self.radical_ids
                        .entry(c)
                        .or_insert_with(|| radical_id.to_string());
                }
            }
            "kTotalStrokes" => {
                let strokes = first_token
                    .filter(|t| t.bytes().all(|b| b.is_ascii_digit()))
                    .and_then(|t| t.parse().ok());
                if let Some(strokes) = strokes {
                    self.total_strokes.entry(c).or_insert(strokes);
                }
            }
            _ => {}
        }
    }
}

/// `U+{codepoint}\t{property}\t{value}`
fn properties(text: &str) -> impl Iterator<Item = (char, &str, &str)> {
    content_lines(text).filter_map(|(line, content)| {
        let mut split = content.splitn(3, '\t');
        let (Some(codepoint), Some(property), Some(value)) =
            (split.next(), split.next(), split.next())
        else {
            tracing::warn!("Skipping malformed Unihan line {line}: '{content}'");
            return None;
        };
        let Some(c) = codepoint
            .starts_with("U+")
            .then(|| parse_codepoint(codepoint))
            .flatten()
        else {
            tracing::warn!("Skipping Unihan line {line} with invalid codepoint '{codepoint}'");
            return None;
        };
        Some((c, property, value))
    })
}
