//! Builds the datasets of the HSK study app from the Unicode radical table,
//! the Unihan database, the complete HSK vocabulary and the HSK 3.0 grammar documents.

pub mod error;
pub mod files;
pub mod input;
pub mod output;

pub use error::{Error, Result};
pub use files::SourcePaths;
pub use input::{cjk_radicals, complete_hsk, hsk_grammar, unihan};
pub use output::{grammarfile, metafile, radicalfile, usage, wordfile};

use chrono::{DateTime, Utc};
use cjk_radicals::CjkRadicals;
use grammarfile::Grammarfile;
use hsk::Lexicon;
use hsk_core::dataset_types::Meta;
use hsk_grammar::GrammarDocument;
use radicalfile::Radicalfile;
use unihan::Unihan;
use wordfile::Wordfile;

/// The contents of the source files.
#[derive(Debug, Clone)]
pub struct RawSources {
    pub cjk_radicals: String,
    pub unihan_readings: String,
    pub unihan_irg_sources: String,
    pub complete_hsk: String,
    pub grammar: Vec<GrammarDocument>,
}

#[derive(Debug, Clone)]
pub struct Datasets {
    pub radicals: Radicalfile,
    pub words: Wordfile,
    pub grammar: Grammarfile,
    pub meta: Meta,
}

impl Datasets {
    /// Derives every dataset, or none if a source is invalid.
    pub fn derive<L: Lexicon + ?Sized>(
        sources: &RawSources,
        lexicon: &L,
        generated_at: DateTime<Utc>,
    ) -> Result<Self> {
        tracing::info!("indexing radicals");
        let cjk_radicals = CjkRadicals::parse(&sources.cjk_radicals)?;
        let index = radicalfile::index_radicals(cjk_radicals, radicalfile::unicode_name);

        tracing::info!("reading Unihan properties");
        let unihan = Unihan::from_files(&sources.unihan_readings, &sources.unihan_irg_sources);

        tracing::info!("deriving words and radical usage");
        let entries = complete_hsk::parse(&sources.complete_hsk)?;
        let (words, usage) = Wordfile::derive(entries, &unihan.radical_ids);

        tracing::info!("deriving radicals");
        let radicals = Radicalfile::derive(index, &usage, &unihan);

        tracing::info!("parsing grammar");
        let grammar = Grammarfile::derive(&sources.grammar, lexicon);

        tracing::info!("deriving metadata");
        let meta = metafile::derive(&radicals, &words, &grammar, generated_at);

        Ok(Self {
            radicals,
            words,
            grammar,
            meta,
        })
    }
}
