use std::error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// An error that occurred while reading an emoji data file.
///
/// When known, the file and line the error came from are included in the
/// error's `Display` output as a `path:line: ` prefix.
#[derive(Debug)]
pub struct Error {
    pub(crate) kind: ErrorKind,
    pub(crate) line: Option<u64>,
    pub(crate) path: Option<PathBuf>,
}

/// What went wrong while reading an emoji data file.
#[derive(Debug)]
pub enum ErrorKind {
    /// The file could not be opened or read.
    Io(io::Error),
    /// A row could not be parsed.
    Parse(String),
    /// The comment header of `emoji-data.txt` names no version.
    MissingVersion,
}

impl Error {
    pub(crate) fn parse(msg: String) -> Error {
        Error { kind: ErrorKind::Parse(msg), line: None, path: None }
    }

    pub(crate) fn missing_version() -> Error {
        Error { kind: ErrorKind::MissingVersion, line: None, path: None }
    }

    pub(crate) fn io<P: AsRef<Path>>(err: io::Error, path: P) -> Error {
        Error {
            kind: ErrorKind::Io(err),
            line: None,
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// What went wrong.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The 1-based line of the offending row, if the error is tied to one.
    pub fn line(&self) -> Option<u64> {
        self.line
    }

    /// The data file being read, if known.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.kind {
            ErrorKind::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.path, self.line) {
            (Some(path), Some(line)) => {
                write!(f, "{}:{}: ", path.display(), line)?
            }
            (Some(path), None) => write!(f, "{}: ", path.display())?,
            (None, Some(line)) => write!(f, "line {}: ", line)?,
            (None, None) => {}
        }
        match self.kind {
            ErrorKind::Io(ref err) => write!(f, "{}", err),
            ErrorKind::Parse(ref msg) => write!(f, "{}", msg),
            ErrorKind::MissingVersion => {
                write!(f, "no emoji data version found in the file header")
            }
        }
    }
}
