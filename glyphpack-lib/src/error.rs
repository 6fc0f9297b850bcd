use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bitmap line {line}: {kind}")]
    InvalidBitLine { line: usize, kind: BitLineError },

    #[error("malformed stream: input ends mid-chunk")]
    MalformedStream,

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum BitLineError {
    #[error("unexpected {found:?} at column {column}")]
    BadChar { column: usize, found: char },

    #[error("length {len} is not a multiple of 8")]
    BadLength { len: usize },
}
