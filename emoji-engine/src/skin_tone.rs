use std::error;
use std::fmt;
use std::str::FromStr;

use crate::property::is_emoji_modifier_base;

/// A Fitzpatrick skin tone, or the request to remove any skin tone.
///
/// Every variant except `Strip` corresponds to exactly one emoji modifier
/// codepoint in `U+1F3FB..U+1F3FF`, in declaration order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SkinTone {
    /// No skin tone. Normalizing to this removes all modifiers.
    Strip,
    /// `U+1F3FB`, Fitzpatrick type 1-2.
    Light,
    /// `U+1F3FC`, Fitzpatrick type 3.
    MediumLight,
    /// `U+1F3FD`, Fitzpatrick type 4.
    Medium,
    /// `U+1F3FE`, Fitzpatrick type 5.
    MediumDark,
    /// `U+1F3FF`, Fitzpatrick type 6.
    Dark,
}

const FIRST_MODIFIER: u32 = 0x1F3FB;
const LAST_MODIFIER: u32 = 0x1F3FF;

impl SkinTone {
    /// Every skin tone value, `Strip` first.
    pub const ALL: [SkinTone; 6] = [
        SkinTone::Strip,
        SkinTone::Light,
        SkinTone::MediumLight,
        SkinTone::Medium,
        SkinTone::MediumDark,
        SkinTone::Dark,
    ];

    /// Return the modifier codepoint for this tone. `Strip` has none.
    pub fn codepoint(self) -> Option<char> {
        match self {
            SkinTone::Strip => None,
            SkinTone::Light => Some('\u{1F3FB}'),
            SkinTone::MediumLight => Some('\u{1F3FC}'),
            SkinTone::Medium => Some('\u{1F3FD}'),
            SkinTone::MediumDark => Some('\u{1F3FE}'),
            SkinTone::Dark => Some('\u{1F3FF}'),
        }
    }

    /// Map a modifier codepoint back to its tone. Any other codepoint,
    /// including every non-modifier, yields `None`.
    pub fn from_codepoint(c: char) -> Option<SkinTone> {
        match c as u32 {
            cp @ FIRST_MODIFIER..=LAST_MODIFIER => {
                Some(SkinTone::ALL[(cp - FIRST_MODIFIER) as usize + 1])
            }
            _ => None,
        }
    }

    /// The name used by `Display` and accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            SkinTone::Strip => "strip",
            SkinTone::Light => "light",
            SkinTone::MediumLight => "medium-light",
            SkinTone::Medium => "medium",
            SkinTone::MediumDark => "medium-dark",
            SkinTone::Dark => "dark",
        }
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SkinTone {
    type Err = ParseSkinToneError;

    fn from_str(s: &str) -> Result<SkinTone, ParseSkinToneError> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        SkinTone::ALL
            .iter()
            .copied()
            .find(|tone| tone.name() == wanted)
            .ok_or_else(|| ParseSkinToneError { given: s.to_string() })
    }
}

/// The error returned when a string does not name a skin tone.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSkinToneError {
    given: String,
}

impl ParseSkinToneError {
    /// The string that failed to parse.
    pub fn given(&self) -> &str {
        &self.given
    }
}

impl error::Error for ParseSkinToneError {}

impl fmt::Display for ParseSkinToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized skin tone '{}' (expected one of: strip, light, \
             medium-light, medium, medium-dark, dark)",
            self.given
        )
    }
}

/// Returns true if and only if `c` is one of the five skin tone modifiers.
pub fn is_skin_tone_modifier(c: char) -> bool {
    SkinTone::from_codepoint(c).is_some()
}

/// Return the first skin tone found anywhere in `text`.
///
/// Returns `None` (never `Strip`) when `text` has no modifier. If several
/// modifiers are present, only the first one counts.
pub fn emoji_skin_tone(text: &str) -> Option<SkinTone> {
    text.chars().find_map(SkinTone::from_codepoint)
}

/// Rewrite every skin tone in `text` to `tone`.
///
/// All existing modifiers are dropped. Unless `tone` is `Strip`, the new
/// modifier is then placed right after every modifier base, so each person
/// in a ZWJ sequence gets the tone. Normalizing twice to the same tone gives
/// the same result as normalizing once.
pub fn normalizing_skin_tone(text: &str, tone: SkinTone) -> String {
    let modifier = tone.codepoint();
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if is_skin_tone_modifier(c) {
            continue;
        }
        out.push(c);
        if let Some(m) = modifier {
            if is_emoji_modifier_base(c) {
                out.push(m);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codepoints_round_trip() {
        assert_eq!(SkinTone::Strip.codepoint(), None);
        for &tone in &SkinTone::ALL[1..] {
            let c = tone.codepoint().unwrap();
            assert_eq!(SkinTone::from_codepoint(c), Some(tone));
        }
        assert_eq!(SkinTone::from_codepoint('\u{1F3FB}'), Some(SkinTone::Light));
        assert_eq!(SkinTone::from_codepoint('\u{1F3FF}'), Some(SkinTone::Dark));
        assert_eq!(SkinTone::from_codepoint('\u{1F3FA}'), None);
        assert_eq!(SkinTone::from_codepoint('a'), None);
    }

    #[test]
    fn parse_names() {
        assert_eq!("strip".parse(), Ok(SkinTone::Strip));
        assert_eq!("Medium-Light".parse(), Ok(SkinTone::MediumLight));
        assert_eq!("medium_dark".parse(), Ok(SkinTone::MediumDark));
        assert_eq!(" DARK ".parse(), Ok(SkinTone::Dark));
        let err = "purple".parse::<SkinTone>().unwrap_err();
        assert_eq!(err.given(), "purple");
        assert!(err.to_string().contains("purple"));
        for &tone in &SkinTone::ALL {
            assert_eq!(tone.to_string().parse(), Ok(tone));
        }
    }

    #[test]
    fn detect() {
        assert_eq!(emoji_skin_tone("👋🏽"), Some(SkinTone::Medium));
        assert_eq!(emoji_skin_tone("👩🏽\u{200D}🦰"), Some(SkinTone::Medium));
        assert_eq!(emoji_skin_tone("👋"), None);
        assert_eq!(emoji_skin_tone(""), None);
        // Malformed: two modifiers on one base. The first one wins.
        assert_eq!(emoji_skin_tone("👋🏻🏿"), Some(SkinTone::Light));
    }

    #[test]
    fn normalize_replaces_tone() {
        assert_eq!(normalizing_skin_tone("👋🏽", SkinTone::Dark), "👋🏿");
        assert_eq!(normalizing_skin_tone("👋🏽", SkinTone::Strip), "👋");
        assert_eq!(normalizing_skin_tone("👋", SkinTone::Light), "👋🏻");
    }

    #[test]
    fn normalize_strips_every_modifier() {
        assert_eq!(normalizing_skin_tone("👋🏻🏿", SkinTone::Strip), "👋");
        assert_eq!(normalizing_skin_tone("👋🏻🏿", SkinTone::Medium), "👋🏽");
        assert_eq!(normalizing_skin_tone("\u{1F3FD}", SkinTone::Strip), "");
    }

    #[test]
    fn normalize_leaves_non_bases_alone() {
        assert_eq!(normalizing_skin_tone("😊", SkinTone::Dark), "😊");
        assert_eq!(normalizing_skin_tone("hello", SkinTone::Dark), "hello");
        assert_eq!(normalizing_skin_tone("", SkinTone::Dark), "");
    }

    #[test]
    fn normalize_zwj_sequence_tones_every_base() {
        let couple = "👩\u{200D}❤\u{FE0F}\u{200D}👨";
        assert_eq!(
            normalizing_skin_tone(couple, SkinTone::MediumDark),
            "👩🏾\u{200D}❤\u{FE0F}\u{200D}👨🏾"
        );
        assert_eq!(
            normalizing_skin_tone("👩🏽\u{200D}🦰", SkinTone::Light),
            "👩🏻\u{200D}🦰"
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = ["👋🏽", "👩\u{200D}💻", "Hi 👋🏿 there", "🇺🇸", "👋🏻🏿"];
        for input in &inputs {
            for &tone in &SkinTone::ALL {
                let once = normalizing_skin_tone(input, tone);
                assert_eq!(normalizing_skin_tone(&once, tone), once);
            }
        }
    }
}
