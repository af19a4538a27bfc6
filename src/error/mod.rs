use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("expected exactly one argument, got {0}")]
    InvalidArguments(usize),
    #[error("{} is not an existing file", .0.display())]
    FileNotFound(PathBuf),
    #[error("could not open CSV file {}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse CSV rows")]
    Csv(#[from] csv::Error),
    #[error("could not write TeX file {}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("could not write to standard output")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
