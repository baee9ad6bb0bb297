//! Reading the source files and writing the dataset files.

use crate::{
    error::io_error,
    hsk_grammar::{GrammarDocument, GRAMMAR_DOCUMENTS},
    unihan, Datasets, Error, RawSources, Result,
};
use serde::Serialize;
use std::{
    fs::{self, File},
    io::{BufWriter, Read, Seek, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use zip::ZipArchive;

pub const RADICALS_FILE: &str = "radicals.json";
pub const WORDS_FILE: &str = "words.json";
pub const GRAMMAR_FILE: &str = "grammar.json";
pub const META_FILE: &str = "meta.json";

/// Where the source files are.
#[derive(Debug, Clone)]
pub struct SourcePaths {
    /// `CJKRadicals.txt`
    pub radicals: PathBuf,
    /// `Unihan.zip`, or a directory with its extracted files.
    pub unihan: PathBuf,
    /// `complete.json`
    pub vocabulary: PathBuf,
    /// The directory with the grammar documents.
    pub grammar: PathBuf,
}

impl RawSources {
    pub fn read(paths: &SourcePaths) -> Result<Self> {
        let (unihan_readings, unihan_irg_sources) = read_unihan(&paths.unihan)?;
        let grammar = GRAMMAR_DOCUMENTS
            .iter()
            .map(|(level, filename)| -> Result<GrammarDocument> {
                Ok(GrammarDocument {
                    level: *level,
                    filename: filename.to_string(),
                    text: read(&paths.grammar.join(filename))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            cjk_radicals: read(&paths.radicals)?,
            unihan_readings,
            unihan_irg_sources,
            complete_hsk: read(&paths.vocabulary)?,
            grammar,
        })
    }
}

impl Datasets {
    /// Writes the dataset files to `output_dir`, creating it if needed.
    /// On error, the files already in `output_dir` are left as they were.
    pub fn write(&self, output_dir: &Path) -> Result<()> {
        fs::create_dir_all(output_dir).map_err(io_error(output_dir))?;
        let staged = vec![
            (RADICALS_FILE, stage(output_dir, RADICALS_FILE, &self.radicals)?),
            (WORDS_FILE, stage(output_dir, WORDS_FILE, &self.words)?),
            (GRAMMAR_FILE, stage(output_dir, GRAMMAR_FILE, &self.grammar)?),
            (META_FILE, stage(output_dir, META_FILE, &self.meta)?),
        ];
        install(output_dir, staged)
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(io_error(path))
}

fn read_unihan(path: &Path) -> Result<(String, String)> {
    if path.is_dir() {
        return Ok((
            read(&path.join(unihan::READINGS_FILE))?,
            read(&path.join(unihan::IRG_SOURCES_FILE))?,
        ));
    }
    let file = File::open(path).map_err(io_error(path))?;
    let mut archive = ZipArchive::new(file).map_err(|source| Error::Archive {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((
        read_archive_entry(&mut archive, path, unihan::READINGS_FILE)?,
        read_archive_entry(&mut archive, path, unihan::IRG_SOURCES_FILE)?,
    ))
}

fn read_archive_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    archive_path: &Path,
    name: &str,
) -> Result<String> {
    let entry_path = archive_path.join(name);
    let mut entry = archive.by_name(name).map_err(|source| Error::Archive {
        path: entry_path.clone(),
        source,
    })?;
    let mut text = String::new();
    entry
        .read_to_string(&mut text)
        .map_err(io_error(&entry_path))?;
    Ok(text)
}

/// Serializes `value` into a temporary file in `dir`.
fn stage<T: Serialize>(dir: &Path, name: &'static str, value: &T) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new_in(dir).map_err(io_error(dir))?;
    let path = file.path().to_path_buf();
    let mut writer = BufWriter::new(file.as_file_mut());
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|source| Error::Serialize { name, source })?;
    writer.flush().map_err(io_error(&path))?;
    drop(writer);
    Ok(file)
}

/// A file moved into place, and where the file it replaced was moved.
struct Replaced {
    target: PathBuf,
    backup: Option<PathBuf>,
}

/// Moves the staged files into `dir`, restoring the replaced files if any move fails.
fn install(dir: &Path, staged: Vec<(&str, NamedTempFile)>) -> Result<()> {
    for (name, _) in &staged {
        let target = dir.join(name);
        if target.is_dir() {
            return Err(Error::OutputIsDirectory(target));
        }
    }

    let backups = tempfile::tempdir_in(dir).map_err(io_error(dir))?;
    let mut replaced = Vec::new();
    for (name, file) in staged {
        match replace(&dir.join(name), file, &backups.path().join(name)) {
            Ok(done) => replaced.push(done),
            Err(err) => {
                restore(replaced);
                return Err(err);
            }
        }
    }
    Ok(())
}

fn replace(target: &Path, file: NamedTempFile, backup: &Path) -> Result<Replaced> {
    let backup = if target.exists() {
        fs::rename(target, backup).map_err(io_error(target))?;
        Some(backup.to_path_buf())
    } else {
        None
    };
    match file.persist(target) {
        Ok(_) => Ok(Replaced {
            target: target.to_path_buf(),
            backup,
        }),
        Err(err) => {
            restore(vec![Replaced {
                target: target.to_path_buf(),
                backup,
            }]);
            Err(Error::Io {
                path: target.to_path_buf(),
                source: err.error,
            })
        }
    }
}

fn restore(replaced: Vec<Replaced>) {
    for Replaced { target, backup } in replaced.into_iter().rev() {
        let result = match backup {
            Some(backup) => fs::rename(&backup, &target),
            None if target.exists() => fs::remove_file(&target),
            None => Ok(()),
        };
        if let Err(err) = result {
            tracing::error!("Failed to restore '{}': {err}", target.display());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

    fn staged(dir: &Path, content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new_in(dir).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn stored() -> SimpleFileOptions {
        SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        names.sort();
        names
    }

    #[test]
    fn installs_and_replaces_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), "old a").unwrap();

        let files = vec![
            ("a.json", staged(dir.path(), "new a")),
            ("b.json", staged(dir.path(), "new b")),
        ];
        install(dir.path(), files).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("a.json")).unwrap(), "new a");
        assert_eq!(fs::read_to_string(dir.path().join("b.json")).unwrap(), "new b");
        assert_eq!(entries(dir.path()), &["a.json", "b.json"]);
    }

    #[test]
    fn restores_replaced_files_when_a_later_move_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), "old a").unwrap();

        // the parent of the last target does not exist so moving it fails
        let files = vec![
            ("a.json", staged(dir.path(), "new a")),
            ("b.json", staged(dir.path(), "new b")),
            ("missing/c.json", staged(dir.path(), "new c")),
        ];
        let result = install(dir.path(), files);

        assert!(matches!(result, Err(Error::Io { .. })));
        assert_eq!(fs::read_to_string(dir.path().join("a.json")).unwrap(), "old a");
        assert_eq!(entries(dir.path()), &["a.json"]);
    }

    #[test]
    fn directory_in_the_way_leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), "old a").unwrap();
        fs::create_dir(dir.path().join("b.json")).unwrap();
        fs::write(dir.path().join("b.json").join("keep"), "").unwrap();

        let files = vec![
            ("a.json", staged(dir.path(), "new a")),
            ("b.json", staged(dir.path(), "new b")),
            ("c.json", staged(dir.path(), "new c")),
        ];
        let result = install(dir.path(), files);

        assert!(matches!(result, Err(Error::OutputIsDirectory(_))));
        assert_eq!(fs::read_to_string(dir.path().join("a.json")).unwrap(), "old a");
        assert!(dir.path().join("b.json").join("keep").exists());
        assert_eq!(entries(dir.path()), &["a.json", "b.json"]);
    }

    #[test]
    fn reads_unihan_from_directory_or_archive() {
        let dir = tempfile::tempdir().unwrap();
        let extracted = dir.path().join("Unihan");
        fs::create_dir(&extracted).unwrap();
        fs::write(extracted.join(unihan::READINGS_FILE), "readings").unwrap();
        fs::write(extracted.join(unihan::IRG_SOURCES_FILE), "irg").unwrap();

        let archive_path = dir.path().join("Unihan.zip");
        let mut archive = ZipWriter::new(File::create(&archive_path).unwrap());
        archive.start_file(unihan::READINGS_FILE, stored()).unwrap();
        archive.write_all(b"zipped readings").unwrap();
        archive.start_file(unihan::IRG_SOURCES_FILE, stored()).unwrap();
        archive.write_all(b"zipped irg").unwrap();
        archive.finish().unwrap();

        let (readings, irg) = read_unihan(&extracted).unwrap();
        assert_eq!((readings.as_str(), irg.as_str()), ("readings", "irg"));
        let (readings, irg) = read_unihan(&archive_path).unwrap();
        assert_eq!((readings.as_str(), irg.as_str()), ("zipped readings", "zipped irg"));
    }

    #[test]
    fn archive_without_entry_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("Unihan.zip");
        let mut archive = ZipWriter::new(File::create(&archive_path).unwrap());
        archive.start_file(unihan::READINGS_FILE, stored()).unwrap();
        archive.finish().unwrap();

        let result = read_unihan(&archive_path);
        assert!(matches!(
            result,
            Err(Error::Archive { path, .. }) if path.ends_with(unihan::IRG_SOURCES_FILE)
        ));
    }
}
