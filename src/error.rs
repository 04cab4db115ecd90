use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MetricsError>;

/// Everything that can stop a run. None of these are recovered from; they
/// propagate up to `main`.
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("could not find font: {0}")]
    FontNotFound(String),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid font file: {0}")]
    Parse(#[from] ttf_parser::FaceParsingError),

    #[error("usage: {0}")]
    Usage(String),
}
