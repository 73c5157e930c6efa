//! All error types for the stringsdedup crate.
//!
//! These are returned from all fallible operations (reading, analysis, cleaning).

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot open `{}`: {}", path.display(), source)]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading `{}`: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write `{}`: {}", path.display(), source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "clean destination `{}` is the same as the input file; use a different name, e.g. `{}`",
        path.display(),
        suggested.display()
    )]
    CleanDestinationIsSource { path: PathBuf, suggested: PathBuf },
}

impl Error {
    /// Creates a new file-access error for a failed open.
    pub fn file_access(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::FileAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new read error for an I/O failure mid-scan.
    pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new write error for a failed create or write.
    pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
