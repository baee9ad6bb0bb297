//! Models and parses the complete HSK vocabulary file.
//! See <https://github.com/drkameleon/complete-hsk-vocabulary>

use crate::error::Result;
use hsk_core::{Level, LEVELS};
use serde::{Deserialize, Serialize};

pub type CompleteHsk = Vec<Entry>;

/// Used for entries without a frequency rank.
pub const DEFAULT_FREQUENCY: u32 = 999_999;

const NEW_HSK_TAG: &str = "new-";

pub fn parse(json: &str) -> Result<CompleteHsk> {
    Ok(serde_json::from_str(json)?)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub simplified: String,
    /// Tags such as `new-1` and `old-2`.
    #[serde(default)]
    pub level: Vec<String>,
    #[serde(default)]
    pub frequency: Option<u32>,
    #[serde(default)]
    pub forms: Vec<Form>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Form {
    #[serde(default)]
    pub transcriptions: Transcriptions,
    #[serde(default)]
    pub meanings: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcriptions {
    #[serde(default)]
    pub pinyin: String,
}

impl Entry {
    /// The lowest new HSK level the entry is tagged with,
    /// or `None` if there is no such tag or the lowest one is not a valid level.
    pub fn hsk_level(&self) -> Option<Level> {
        let lowest = self
            .level
            .iter()
            .filter_map(|tag| tag.strip_prefix(NEW_HSK_TAG))
            .filter_map(|level| match level.parse::<i64>() {
                Ok(level) => Some(level),
                Err(_) => {
                    tracing::warn!(
                        "Ignoring invalid level tag '{NEW_HSK_TAG}{level}' of {}",
                        self.simplified
                    );
                    None
                }
            })
            .min()?;
        Level::try_from(lowest)
            .ok()
            .filter(|level| LEVELS.contains(level))
    }

    pub fn frequency(&self) -> u32 {
        self.frequency.unwrap_or(DEFAULT_FREQUENCY)
    }

    /// Only the first form is used for the pinyin and meaning.
    pub fn pinyin(&self) -> &str {
        self.forms
            .first()
            .map(|f| f.transcriptions.pinyin.as_str())
            .unwrap_or_default()
    }

    pub fn meaning(&self) -> &str {
        self.forms
            .first()
            .and_then(|f| f.meanings.first())
            .map(String::as_str)
            .unwrap_or_default()
    }
}
