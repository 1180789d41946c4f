use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while locating or parsing data files.
#[derive(Debug, Error)]
pub enum Error {
    /// No data root contains the requested file.
    #[error("{} does not exist in any data root (searched {})", path.display(), display_roots(searched))]
    NotFound {
        path: PathBuf,
        searched: Vec<PathBuf>,
    },

    /// The file was located but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line had neither one nor two tokens.
    #[error("entry ({text}) on line {line} of odds file '{file}' is invalid")]
    MalformedLine {
        file: String,
        line: usize,
        text: String,
    },

    /// The odds column of a line was not a number.
    #[error("odds value '{token}' on line {line} of odds file '{file}' is not a number")]
    InvalidOdds {
        file: String,
        line: usize,
        token: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// reports whether this is the file-not-found kind
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn display_roots(roots: &[PathBuf]) -> String {
    if roots.is_empty() {
        return "no roots".to_owned();
    }
    roots
        .iter()
        .map(|r| r.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, Error>;
