use crate::types::ImageFormat;
use std::fmt;
use std::io;
use thiserror::Error;

/// The I/O step that failed while measuring a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoStep {
    Open,
    SeekProbe,
    ReadProbe,
    SeekField,
    ReadField,
}

impl fmt::Display for IoStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            IoStep::Open => "open file",
            IoStep::SeekProbe => "seek to start of file",
            IoStep::ReadProbe => "read file signature",
            IoStep::SeekField => "seek to header fields",
            IoStep::ReadField => "read header fields",
        };
        f.write_str(step)
    }
}

/// Errors returned when measuring an image.
#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("failed to {step}: {source}")]
    Io {
        step: IoStep,
        #[source]
        source: io::Error,
    },

    #[error("unknown file type")]
    UnknownFormat,

    #[error("unable to measure {0} file")]
    Unsupported(ImageFormat),

    #[error("unable to read {format} header: expected {expected} bytes, got {actual}")]
    TruncatedHeader {
        format: ImageFormat,
        expected: usize,
        actual: usize,
    },
}

impl MeasureError {
    pub(crate) fn io(step: IoStep) -> impl FnOnce(io::Error) -> Self {
        move |source| MeasureError::Io { step, source }
    }

    /// The underlying I/O error, if this is an I/O failure.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            MeasureError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors returned when registering a format descriptor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("signature for {0} is empty")]
    EmptySignature(ImageFormat),

    #[error("signature for {format} is {len} bytes, longer than the {max}-byte probe window")]
    SignatureTooLong {
        format: ImageFormat,
        len: usize,
        max: usize,
    },

    #[error("signature for {format} overlaps the registered {existing} signature")]
    Ambiguous {
        format: ImageFormat,
        existing: ImageFormat,
    },
}

pub type Result<T> = std::result::Result<T, MeasureError>;
