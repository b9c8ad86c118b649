//! Contains the Error and Result type used by the codecs.

/// An error from reading, writing or building NBT data.
///
/// The [`kind`](Error::kind) tells malformed data apart from failures of the
/// underlying stream and from misuse of the tree API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The data was malformed: an unknown tag id, a negative array length, a
    /// non-unicode string, bad SNBT syntax or mismatched element kinds.
    Parse,

    /// The underlying stream failed.
    Io,

    /// The input ended part way through a value. This is a kind of I/O error.
    UnexpectedEof,

    /// The tree API was used in a way that breaks one of its invariants, such
    /// as adding an Int to a list of Strings.
    InvariantViolation,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_parse(&self) -> bool {
        self.kind == ErrorKind::Parse
    }

    /// True for stream failures, including running out of input.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io | ErrorKind::UnexpectedEof)
    }

    pub fn is_invariant(&self) -> bool {
        self.kind == ErrorKind::InvariantViolation
    }

    /// A parse error with a custom message. Intended for sibling crates
    /// parsing other representations into the same tree.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::Parse,
        }
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::InvariantViolation,
        }
    }

    pub fn unexpected_eof() -> Self {
        Self {
            msg: "eof: unexpectedly ran out of input".into(),
            kind: ErrorKind::UnexpectedEof,
        }
    }

    pub(crate) fn io(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::Io,
        }
    }

    pub(crate) fn invalid_tag(tag: u8) -> Self {
        Self::parse(format!("invalid nbt tag value: {}", tag))
    }

    pub(crate) fn negative_len(what: &str, len: i32) -> Self {
        Self::parse(format!("{} was prefixed with a negative length: {}", what, len))
    }

    pub(crate) fn nonunicode_string(data: &[u8]) -> Self {
        Self::parse(format!(
            "invalid nbt string: nonunicode: {}",
            String::from_utf8_lossy(data)
        ))
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::unexpected_eof(),
            _ => Self::io(format!("io error: {}", e)),
        }
    }
}
