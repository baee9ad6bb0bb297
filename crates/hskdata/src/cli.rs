use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Builds radicals.json, words.json, grammar.json and meta.json.
    Build {
        /// The path to the input CJKRadicals.txt file.
        #[arg(short, long, env = "HSKDATA_RADICALS")]
        radicals: PathBuf,
        /// The path to Unihan.zip, or to a directory with its extracted Unihan_Readings.txt and Unihan_IRGSources.txt files.
        #[arg(short, long, env = "HSKDATA_UNIHAN")]
        unihan: PathBuf,
        /// The path to the input complete HSK vocabulary file (complete.json).
        #[arg(short, long, env = "HSKDATA_VOCABULARY")]
        vocabulary: PathBuf,
        /// The path to the directory with the HSK grammar documents (HSK 1.txt, ..., HSK 7-9.txt).
        #[arg(short, long, env = "HSKDATA_GRAMMAR")]
        grammar: PathBuf,
        /// The path to the output directory.
        #[arg(short, long, env = "HSKDATA_OUTPUT", default_value = "data")]
        output: PathBuf,
    },
    /// Prints the pinyin annotation of each text.
    Pinyin { texts: Vec<String> },
    /// Converts numbered pinyin such as ni3-hao3 to tone-marked pinyin.
    Tone { pinyin: Vec<String> },
}
