use crate::classify::is_single_emoji;
use crate::property::ZWJ;

/// Split a single emoji into the emoji joined by `U+200D`.
///
/// Each returned component keeps its own modifiers and variation selectors,
/// so `👩🏽‍🦰` yields `["👩🏽", "🦰"]`. An emoji without a joiner yields
/// itself. When `text` is not exactly one emoji the result is empty.
pub fn emoji_components(text: &str) -> Vec<&str> {
    if !is_single_emoji(text) {
        return vec![];
    }
    text.split(ZWJ).filter(|component| !component.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::emoji_components;

    #[test]
    fn family() {
        assert_eq!(
            emoji_components("👨\u{200D}👩\u{200D}👧\u{200D}👦"),
            vec!["👨", "👩", "👧", "👦"]
        );
    }

    #[test]
    fn modifiers_stay_with_their_base() {
        assert_eq!(emoji_components("👩🏽\u{200D}🦰"), vec!["👩🏽", "🦰"]);
        assert_eq!(
            emoji_components("👩\u{200D}❤\u{FE0F}\u{200D}👨"),
            vec!["👩", "❤\u{FE0F}", "👨"]
        );
    }

    #[test]
    fn no_joiner() {
        assert_eq!(emoji_components("😊"), vec!["😊"]);
        assert_eq!(emoji_components("🇺🇸"), vec!["🇺🇸"]);
    }

    #[test]
    fn not_a_single_emoji() {
        assert!(emoji_components("").is_empty());
        assert!(emoji_components("abc").is_empty());
        assert!(emoji_components("😊😊").is_empty());
        assert!(emoji_components("\u{200D}").is_empty());
    }

    #[test]
    fn joining_reconstructs() {
        let family = "👨\u{200D}👩\u{200D}👧\u{200D}👦";
        assert_eq!(emoji_components(family).join("\u{200D}"), family);
    }
}
