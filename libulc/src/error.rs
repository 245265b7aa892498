// libulc/src/error.rs

use thiserror::Error;

/// Why the tag classifier refused a detected tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RejectReason {
    #[display(fmt = "missing Mifare Ultralight technology")]
    NotUltralight,
    #[display(fmt = "missing NfcA link layer")]
    NoNfcA,
    #[display(fmt = "frame size {} below minimum {}", actual, minimum)]
    FrameTooSmall { actual: usize, minimum: usize },
}

/// Coarse failure classes reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong card; not a card fault.
    TagRejected,
    /// I/O failure on connect/transceive/close.
    Transport,
    /// Malformed or short card response, status mismatch, artifact mismatch.
    ProtocolViolation,
    /// Failure building or parsing an authority document.
    Codec,
    /// Operation invoked in the wrong session state.
    Usage,
}

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("tag rejected: {0}")]
    TagRejected(RejectReason),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("transport not connected")]
    NotConnected,

    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unexpected status byte: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedStatus { expected: u8, actual: u8 },

    #[error("card response does not match the expected authentication value")]
    ArtifactMismatch,

    #[error("read failed at page {page:#04x}: {source}")]
    ReadFailed {
        page: u8,
        #[source]
        source: Box<Error>,
    },

    #[error("write failed at page {page:#04x}: {source}")]
    WriteFailed {
        page: u8,
        #[source]
        source: Box<Error>,
    },

    /// The write flow was torn down before any page was written, e.g. the
    /// replacement data did not decode to 80 bytes.
    #[error("write aborted: {source}")]
    WriteAborted {
        #[source]
        source: Box<Error>,
    },

    #[error("authentication rejected: {source}")]
    AuthenticationRejected {
        #[source]
        source: Box<Error>,
    },

    #[error("invalid session state: expected {expected}, got {actual}")]
    InvalidState {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload decode error: {0}")]
    Payload(#[from] base64::DecodeError),
}

impl Error {
    /// Classify this error. Wrapping variants report the class of their source.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TagRejected(_) => ErrorKind::TagRejected,
            Error::Transport(_) | Error::NotConnected => ErrorKind::Transport,
            Error::InvalidLength { .. }
            | Error::UnexpectedStatus { .. }
            | Error::ArtifactMismatch => ErrorKind::ProtocolViolation,
            Error::ReadFailed { source, .. }
            | Error::WriteFailed { source, .. }
            | Error::WriteAborted { source }
            | Error::AuthenticationRejected { source } => source.kind(),
            Error::InvalidState { .. } => ErrorKind::Usage,
            Error::Json(_) | Error::Payload(_) => ErrorKind::Codec,
        }
    }

    /// Short message suitable for prompting the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::TagRejected(_) => "unsupported tag",
            Error::ReadFailed { .. } => "could not read tag",
            Error::WriteFailed { .. }
            | Error::WriteAborted { .. }
            | Error::AuthenticationRejected { .. } => "could not authenticate/write",
            Error::Json(_) | Error::Payload(_) => "could not process authority message",
            _ => "could not read tag",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
