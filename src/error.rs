use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to open input file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read input file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output")]
    Write(#[from] io::Error),
}

impl Error {
    /// Short machine-readable name for log fields.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::FileAccess { .. } => "FILE_ACCESS",
            Self::Read { .. } => "READ_FAILED",
            Self::Write(_) => "WRITE_FAILED",
        }
    }
}
