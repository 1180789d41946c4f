//! Lookup of the data files that ship with smarty-rs, such as the decorator
//! tables under `odds_files/`.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{Error, Result};

/// Environment variable holding extra data roots, separated like `PATH`.
pub const DATA_DIR_ENV: &str = "SMARTY_DATA_DIR";

/// An ordered set of directories that bundled data files are resolved
/// against. Earlier roots shadow later ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataDir {
    roots: Vec<PathBuf>,
}

impl DataDir {
    /// construct a [DataDir] with the single root `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            roots: vec![root.into()],
        }
    }

    /// append `root` to the search order
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// the `data` directory in the crate source tree
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// The roots listed in [DATA_DIR_ENV], followed by [DataDir::bundled].
    /// Empty entries in the variable are ignored.
    pub fn from_env() -> Self {
        Self::from_env_value(env::var_os(DATA_DIR_ENV))
    }

    /// [DataDir::from_env] with the value of [DATA_DIR_ENV] passed in
    pub fn from_env_value(val: Option<OsString>) -> Self {
        let mut roots: Vec<PathBuf> = match val {
            Some(val) => env::split_paths(&val)
                .filter(|p| !p.as_os_str().is_empty())
                .collect(),
            None => Vec::new(),
        };
        roots.extend(Self::bundled().roots);
        Self { roots }
    }

    /// a [DataDir] searching `extra`, in order, ahead of the roots of `self`
    pub fn prepend_roots(self, extra: &[PathBuf]) -> Self {
        let mut roots = extra.to_vec();
        roots.extend(self.roots);
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Return the path of `relative_path` under the first root that contains
    /// it as a regular file.
    pub fn get_data_filename(
        &self,
        relative_path: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let relative_path = relative_path.as_ref();
        if !relative_path.as_os_str().is_empty() {
            for root in &self.roots {
                let candidate = root.join(relative_path);
                debug!("looking for {}", candidate.display());
                if candidate.is_file() {
                    return Ok(candidate);
                }
            }
        }
        Err(Error::NotFound {
            path: relative_path.to_path_buf(),
            searched: self.roots.clone(),
        })
    }

    /// Use `path` as given if it names an existing file, otherwise look it up
    /// with [DataDir::get_data_filename].
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        self.get_data_filename(path)
    }
}

impl Default for DataDir {
    fn default() -> Self {
        Self::from_env()
    }
}
