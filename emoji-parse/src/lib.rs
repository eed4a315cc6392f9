/*!
A library for parsing the Unicode emoji data files.

The emoji data files (`emoji-data.txt` and friends) use the same line format
as the Unicode character database: a codepoint or codepoint range, a `;`
separated list of fields and an optional trailing `#` comment. This crate
parses them into typed rows that can be fed to a table generator.
*/

#![deny(missing_docs)]

pub use crate::common::{
    parse, parse_codepoint_association, Codepoint, CodepointIter,
    CodepointRange, Codepoints, UcdFile, UcdFileByCodepoint, UcdLineParser,
};
pub use crate::error::{Error, ErrorKind};

pub use crate::emoji_properties::{emoji_data_version, EmojiProperty};

macro_rules! err {
    ($($tt:tt)*) => {
        Err(crate::error::Error::parse(format!($($tt)*)))
    }
}

mod common;
mod error;

mod emoji_properties;
