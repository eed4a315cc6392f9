use std::cmp::Ordering;

use crate::unicode_tables::emoji_properties::{
    BY_NAME, EMOJI, EMOJI_MODIFIER, EMOJI_MODIFIER_BASE, EMOJI_PRESENTATION,
};

/// The version of the Unicode emoji data that the property tables in this
/// crate were generated from.
pub const UNICODE_VERSION: (u64, u64, u64) =
    crate::unicode_tables::emoji_properties::UNICODE_VERSION;

/// Zero width joiner. Glues several emoji into one glyph.
pub const ZWJ: char = '\u{200D}';

/// Variation selector 16. Requests emoji presentation for the preceding
/// codepoint.
pub const VS16: char = '\u{FE0F}';

/// Combining enclosing keycap.
pub const COMBINING_KEYCAP: char = '\u{20E3}';

/// Returns true if and only if the given codepoint has the `Emoji` property.
pub fn is_emoji(c: char) -> bool {
    contains(EMOJI, c)
}

/// Returns true if and only if the given codepoint has the
/// `Emoji_Presentation` property.
pub fn is_emoji_presentation(c: char) -> bool {
    contains(EMOJI_PRESENTATION, c)
}

/// Returns true if and only if the given codepoint has the
/// `Emoji_Modifier_Base` property.
pub fn is_emoji_modifier_base(c: char) -> bool {
    contains(EMOJI_MODIFIER_BASE, c)
}

/// Returns true if and only if the given codepoint has the `Emoji_Modifier`
/// property, i.e., it is one of the five Fitzpatrick skin tone modifiers.
pub fn is_emoji_modifier(c: char) -> bool {
    contains(EMOJI_MODIFIER, c)
}

/// Returns true if and only if the given codepoint is a regional indicator
/// symbol (`U+1F1E6..U+1F1FF`). Pairs of these form flags.
pub fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

/// Returns true if and only if the given codepoint can start a keycap
/// sequence: an ASCII digit, `#` or `*`.
pub fn is_keycap_base(c: char) -> bool {
    match c {
        '0'..='9' | '#' | '*' => true,
        _ => false,
    }
}

/// Look up one of the generated property tables by name.
///
/// Names are matched loosely: case, `_`, `-` and spaces are ignored, so
/// `Emoji_Modifier_Base` and `emoji-modifier-base` name the same table.
/// The table is a sorted sequence of inclusive, non-overlapping codepoint
/// ranges.
pub fn property_table(name: &str) -> Option<&'static [(u32, u32)]> {
    let wanted = normalize_name(name);
    BY_NAME
        .iter()
        .find(|&&(candidate, _)| normalize_name(candidate) == wanted)
        .map(|&(_, table)| table)
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|&c| c != '_' && c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Binary search a sorted range table. Codepoints missing from the table
/// (including unassigned ones) have the property set to false.
fn contains(table: &[(u32, u32)], c: char) -> bool {
    let cp = c as u32;
    table
        .binary_search_by(|&(start, end)| {
            if start > cp {
                Ordering::Greater
            } else if end < cp {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted_and_disjoint() {
        for &(name, table) in BY_NAME {
            for &(start, end) in table {
                assert!(start <= end, "{}: bad range {:X}..{:X}", name, start, end);
            }
            for pair in table.windows(2) {
                assert!(
                    pair[0].1 + 1 < pair[1].0,
                    "{}: ranges {:X?} and {:X?} are not sorted and merged",
                    name,
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn derived_properties_imply_emoji() {
        for name in &["Emoji_Presentation", "Emoji_Modifier_Base", "Emoji_Modifier"] {
            let table = property_table(name).unwrap();
            for &(start, end) in table {
                for cp in start..=end {
                    let c = std::char::from_u32(cp).unwrap();
                    assert!(is_emoji(c), "{} U+{:X} is not Emoji", name, cp);
                }
            }
        }
    }

    #[test]
    fn presentation() {
        assert!(is_emoji_presentation('😊'));
        assert!(is_emoji_presentation('🔥'));
        assert!(is_emoji_presentation('⌚'));
        assert!(is_emoji_presentation('\u{1F3FD}'));
        assert!(!is_emoji_presentation('©'));
        assert!(!is_emoji_presentation('#'));
        assert!(!is_emoji_presentation('❤'));
        assert!(!is_emoji_presentation('a'));
    }

    #[test]
    fn emoji_includes_text_default_symbols() {
        assert!(is_emoji('©'));
        assert!(is_emoji('™'));
        assert!(is_emoji('▶'));
        assert!(is_emoji('↩'));
        assert!(is_emoji('❤'));
        assert!(is_emoji('#'));
        assert!(is_emoji('7'));
        assert!(!is_emoji('a'));
        assert!(!is_emoji(VS16));
        assert!(!is_emoji(ZWJ));
        assert!(!is_emoji(COMBINING_KEYCAP));
    }

    #[test]
    fn modifier_bases() {
        assert!(is_emoji_modifier_base('👋'));
        assert!(is_emoji_modifier_base('👩'));
        assert!(is_emoji_modifier_base('☝'));
        assert!(is_emoji_modifier_base('🫸'));
        assert!(!is_emoji_modifier_base('😊'));
        assert!(!is_emoji_modifier_base('🦰'));
        assert!(!is_emoji_modifier_base('💻'));
    }

    #[test]
    fn modifiers() {
        for cp in 0x1F3FB..=0x1F3FF {
            assert!(is_emoji_modifier(std::char::from_u32(cp).unwrap()));
        }
        assert!(!is_emoji_modifier('\u{1F3FA}'));
        assert!(!is_emoji_modifier('\u{1F400}'));
    }

    #[test]
    fn unassigned_codepoints_have_no_properties() {
        for &c in &['\u{1FAFF}', '\u{E0000}', '\u{10FFFF}', '\u{0}'] {
            assert!(!is_emoji(c));
            assert!(!is_emoji_presentation(c));
            assert!(!is_emoji_modifier_base(c));
            assert!(!is_emoji_modifier(c));
        }
    }

    #[test]
    fn regional_indicators() {
        assert!(is_regional_indicator('\u{1F1E6}'));
        assert!(is_regional_indicator('\u{1F1FF}'));
        assert!(!is_regional_indicator('\u{1F1E5}'));
        assert!(!is_regional_indicator('\u{1F200}'));
    }

    #[test]
    fn keycap_bases() {
        for c in "0123456789#*".chars() {
            assert!(is_keycap_base(c));
        }
        assert!(!is_keycap_base('a'));
        assert!(!is_keycap_base('+'));
    }

    #[test]
    fn property_table_lookup_is_loose() {
        assert_eq!(property_table("Emoji_Modifier"), Some(EMOJI_MODIFIER));
        assert_eq!(property_table("emoji-modifier"), Some(EMOJI_MODIFIER));
        assert_eq!(
            property_table("EMOJI PRESENTATION"),
            Some(EMOJI_PRESENTATION)
        );
        assert_eq!(property_table("Extended_Pictographic"), None);
    }

    #[test]
    fn version() {
        assert_eq!(UNICODE_VERSION, (15, 1, 0));
    }
}
