//! Creates the `radicals.json`, `words.json`, `grammar.json` and `meta.json` files.

mod cli;

use chrono::Utc;
use clap::Parser;
use cli::{Cli, Command};
use eyre::WrapErr;
use hsk::{segmenter, tone, PinyinLexicon};
use hskdata::{Datasets, RawSources, SourcePaths};
use std::{io::Write, path::Path};

fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    run(cli.command, &mut std::io::stdout().lock())
}

fn run(command: Command, out: &mut impl Write) -> eyre::Result<()> {
    match command {
        Command::Build {
            radicals,
            unihan,
            vocabulary,
            grammar,
            output,
        } => {
            let paths = SourcePaths {
                radicals,
                unihan,
                vocabulary,
                grammar,
            };
            build(&paths, &output)?;
        }
        Command::Pinyin { texts } => {
            for text in texts {
                writeln!(out, "{}", segmenter::text_to_pinyin(&text, &PinyinLexicon))?;
            }
        }
        Command::Tone { pinyin } => {
            for pinyin in pinyin {
                writeln!(out, "{}", tone::pinyin_to_marked(&pinyin))?;
            }
        }
    }
    Ok(())
}

fn build(paths: &SourcePaths, output_dir: &Path) -> eyre::Result<()> {
    tracing::info!("reading sources");
    let sources = RawSources::read(paths).wrap_err("Failed to read sources")?;

    let datasets = Datasets::derive(&sources, &PinyinLexicon, Utc::now())
        .wrap_err("Failed to derive datasets")?;

    tracing::info!("writing output to {}", output_dir.display());
    datasets.write(output_dir).wrap_err_with(|| {
        format!("Failed to write datasets to '{}'", output_dir.display())
    })?;

    tracing::info!("radicals: {}", datasets.meta.totals.radicals);
    tracing::info!("words: {}", datasets.meta.totals.words);
    tracing::info!("grammar points: {}", datasets.meta.totals.grammar_points);
    Ok(())
}
