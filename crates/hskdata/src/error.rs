//! hskdata error type.

use std::{io, path::PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed radical table row at line {line}: '{content}'")]
    MalformedRadicalRow { line: usize, content: String },
    #[error("Radical '{id}' at line {line} has no ideograph")]
    MissingIdeograph { line: usize, id: String },
    #[error("Invalid codepoint '{value}' at line {line}")]
    InvalidCodepoint { line: usize, value: String },
    #[error("Invalid vocabulary file")]
    Vocabulary(#[from] serde_json::Error),
    #[error("Failed to access '{}'", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("Failed to read archive '{}'", .path.display())]
    Archive {
        path: PathBuf,
        source: zip::result::ZipError,
    },
    #[error("Failed to serialize {name}")]
    Serialize {
        name: &'static str,
        source: serde_json::Error,
    },
    #[error("Output path '{}' is a directory", .0.display())]
    OutputIsDirectory(PathBuf),
}

pub(crate) fn io_error(path: &std::path::Path) -> impl FnOnce(io::Error) -> Error + '_ {
    move |source| Error::Io {
        path: path.to_path_buf(),
        source,
    }
}
