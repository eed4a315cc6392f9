use std::fmt;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::common::{
    parse_codepoint_association, CodepointIter, Codepoints, UcdFile,
    UcdFileByCodepoint,
};
use crate::error::{Error, ErrorKind};

/// A single row in the `emoji-data.txt` file.
///
/// The `emoji-data.txt` file is the source of truth on several Emoji-related
/// Unicode properties.
///
/// Note that `emoji-data.txt` is not formally part of the Unicode Character
/// Database. You can download the Emoji data files separately here:
/// https://unicode.org/Public/emoji/
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EmojiProperty {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: Codepoints,
    /// The property name assigned to the codepoints in this entry.
    pub property: String,
}

impl UcdFile for EmojiProperty {
    fn relative_file_path() -> &'static Path {
        Path::new("emoji/emoji-data.txt")
    }

    fn file_path<P: AsRef<Path>>(ucd_dir: P) -> PathBuf {
        let ucd_dir = ucd_dir.as_ref();
        // The standard location, but only on UCDs from 13.0.0 and up.
        let std = ucd_dir.join(Self::relative_file_path());
        if std.exists() {
            std
        } else {
            // If the old location does exist, use it.
            let legacy = ucd_dir.join("emoji-data.txt");
            if legacy.exists() {
                legacy
            } else {
                // This might end up in an error message, so use the standard
                // one if forced to choose.
                std
            }
        }
    }
}

impl UcdFileByCodepoint for EmojiProperty {
    fn codepoints(&self) -> CodepointIter {
        self.codepoints.into_iter()
    }
}

impl FromStr for EmojiProperty {
    type Err = Error;

    fn from_str(line: &str) -> Result<EmojiProperty, Error> {
        let (codepoints, property) = parse_codepoint_association(line)?;
        Ok(EmojiProperty { codepoints, property: property.to_string() })
    }
}

impl fmt::Display for EmojiProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<14}; {}", self.codepoints.to_string(), self.property)
    }
}

/// Return the version of the emoji data found in the given directory.
///
/// The version is read from the comment header of `emoji-data.txt`. Both the
/// `# Version: 13.0` form and the `# Used with Emoji Version 15.1 ...` form
/// are recognized. A missing patch component is reported as `0`.
pub fn emoji_data_version<P: AsRef<Path>>(
    ucd_dir: P,
) -> Result<(u64, u64, u64), Error> {
    let path = EmojiProperty::file_path(ucd_dir);
    let file = File::open(&path).map_err(|e| Error::io(e, &path))?;
    version_from_header(io::BufReader::new(file)).map_err(|mut err| {
        if err.path.is_none() {
            err.path = Some(path.clone());
        }
        err
    })
}

fn version_from_header<R: BufRead>(rdr: R) -> Result<(u64, u64, u64), Error> {
    lazy_static! {
        static ref VERSION: Regex = Regex::new(
            r"Version:?\s+(?P<major>[0-9]+)\.(?P<minor>[0-9]+)(?:\.(?P<patch>[0-9]+))?"
        )
        .unwrap();
    }

    for (i, result) in rdr.lines().enumerate() {
        let line = result.map_err(|e| Error {
            kind: ErrorKind::Io(e),
            line: Some(i as u64 + 1),
            path: None,
        })?;
        // The version always lives in the leading comment block.
        if !line.starts_with('#') {
            break;
        }
        let caps = match VERSION.captures(&line) {
            None => continue,
            Some(caps) => caps,
        };
        let component = |name: &str| -> Result<u64, Error> {
            match caps.name(name) {
                None => Ok(0),
                Some(m) => m.as_str().parse().or_else(|err| {
                    err!("invalid version component '{}': {}", m.as_str(), err)
                }),
            }
        };
        return Ok((component("major")?, component("minor")?, component("patch")?));
    }
    Err(Error::missing_version())
}
