use crate::serde::Dtm;
use std::io;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every variant that can occur mid-stream carries `len`: the count of bytes the
/// failing call had read or written before it failed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O failure after {len} bytes: {source}")]
    Io {
        len: usize,
        #[source]
        source: io::Error,
    },

    #[error("Malformed varint after {len} bytes: longer than {max_len} bytes or wider than its integer")]
    MalformedVarint { len: usize, max_len: usize },

    /// The stream holds a well-formed DTM that differs from the expected one.
    /// The payload that follows has not been touched.
    #[error("Wrong DTM: expected {expected}, got {actual}")]
    WrongDtm {
        expected: Dtm,
        actual: Dtm,
        len: usize,
    },

    #[error("Invalid DTM {value}: must be in 0..={max}", max = Dtm::MAX)]
    InvalidDtm { value: i128 },

    #[error("Payload failure after {len} bytes: {source}")]
    Payload {
        len: usize,
        #[source]
        source: anyhow::Error,
    },
}

impl Error {
    pub fn io(len: usize, source: io::Error) -> Self {
        Self::Io { len, source }
    }

    pub fn payload(len: usize, source: impl Into<anyhow::Error>) -> Self {
        Self::Payload {
            len,
            source: source.into(),
        }
    }

    pub fn byte_count(&self) -> usize {
        match self {
            Self::Io { len, .. }
            | Self::MalformedVarint { len, .. }
            | Self::WrongDtm { len, .. }
            | Self::Payload { len, .. } => *len,
            Self::InvalidDtm { .. } => 0,
        }
    }

    /// Adds `delta` to `len`.
    ///
    /// For composite serializers: a failure in a later part also accounts for
    /// the bytes its earlier parts already consumed.
    pub fn offset(mut self, delta: usize) -> Self {
        match &mut self {
            Self::Io { len, .. }
            | Self::MalformedVarint { len, .. }
            | Self::WrongDtm { len, .. }
            | Self::Payload { len, .. } => *len += delta,
            Self::InvalidDtm { .. } => {}
        }
        self
    }

    pub fn is_wrong_dtm(&self) -> bool {
        matches!(self, Self::WrongDtm { .. })
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::UnexpectedEof)
    }
}
