//! Support utilities for SMARTY: lookup of bundled data files and parsing of
//! the odds files that weight SMARTS decorators.

use std::path::{Path, PathBuf};

pub mod data;
pub mod errors;
pub mod odds;

pub use data::DataDir;
pub use errors::{Error, Result};
pub use odds::{
    parse_odds, parse_odds_reader, Diagnostics, LogDiagnostics, OddsFile,
    Quiet,
};

/// Locate `relative_path` in the data roots given by [DataDir::from_env].
///
/// ```no_run
/// let path =
///     smarty_rs::get_data_filename("odds_files/atom_index_odds.smarts")?;
/// assert!(path.exists());
/// # Ok::<(), smarty_rs::Error>(())
/// ```
pub fn get_data_filename(relative_path: impl AsRef<Path>) -> Result<PathBuf> {
    DataDir::from_env().get_data_filename(relative_path)
}

/// Parse the odds file at `path`, which may be an existing path or one
/// relative to the data roots from [DataDir::from_env].
pub fn parse_odds_file(
    path: impl AsRef<Path>,
    verbose: bool,
) -> Result<OddsFile> {
    DataDir::from_env().parse_odds_file(path, verbose)
}
