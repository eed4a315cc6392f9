use std::error;
use std::fmt;
use std::io;
use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Clap(clap::Error),
    Parse(emoji_parse::Error),
    Trie(ucd_trie::Error),
    Other(String),
}

impl Error {
    pub fn is_broken_pipe(&self) -> bool {
        match *self {
            Error::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe => true,
            Error::Parse(ref e) => match *e.kind() {
                emoji_parse::ErrorKind::Io(ref e) => {
                    e.kind() == io::ErrorKind::BrokenPipe
                }
                _ => false,
            },
            _ => false,
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Io(ref err) => Some(err),
            Error::Clap(ref err) => Some(err),
            Error::Parse(ref err) => Some(err),
            Error::Trie(ref err) => Some(err),
            Error::Other(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Io(ref err) => err.fmt(f),
            Error::Clap(ref err) => err.fmt(f),
            Error::Parse(ref err) => err.fmt(f),
            Error::Trie(ref err) => err.fmt(f),
            Error::Other(ref msg) => write!(f, "{}", msg),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<clap::Error> for Error {
    fn from(err: clap::Error) -> Error {
        Error::Clap(err)
    }
}

impl From<emoji_parse::Error> for Error {
    fn from(err: emoji_parse::Error) -> Error {
        Error::Parse(err)
    }
}

impl From<ucd_trie::Error> for Error {
    fn from(err: ucd_trie::Error) -> Error {
        Error::Trie(err)
    }
}

impl From<emoji_engine::ParseSkinToneError> for Error {
    fn from(err: emoji_engine::ParseSkinToneError) -> Error {
        Error::Other(err.to_string())
    }
}
