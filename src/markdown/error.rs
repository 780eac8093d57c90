use std::num::ParseIntError;
use thiserror::Error;

/// Any opaque upstream failure behind a username lookup.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A message identifier which isn't of the form `<seconds>.<fractional>`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("timestamp '{0}' is not in <seconds>.<fractional> format")]
    Shape(String),
    #[error("timestamp '{ts}' has a non-integer part: {source}")]
    NotInteger {
        ts: String,
        #[source]
        source: ParseIntError,
    },
    #[error("timestamp '{0}' is out of range")]
    OutOfRange(String),
}

/// A username lookup which failed upstream.
#[derive(Debug, Error)]
#[error("could not resolve username for {id}: {source}")]
pub struct ResolutionError {
    pub id: String,
    #[source]
    pub source: BoxError,
}

impl ResolutionError {
    pub fn new<E: Into<BoxError>>(id: &str, source: E) -> Self {
        ResolutionError {
            id: id.to_owned(),
            source: source.into(),
        }
    }
}

/// Everything that can abort assembling a document. Either failure discards
/// the document entirely.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}
