use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarveError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Cannot open source {path:?}: {source}")]
    SourceOpen { path: PathBuf, source: io::Error },
    #[error("Cannot write destination {path:?}: {source}")]
    Destination { path: PathBuf, source: io::Error },
    #[error("Invalid buffer size: must be greater than zero")]
    InvalidBufferSize,
}

pub type Result<T> = std::result::Result<T, CarveError>;
