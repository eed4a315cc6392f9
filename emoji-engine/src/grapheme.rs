use unicode_segmentation::{Graphemes, UnicodeSegmentation};

/// Return an iterator over the extended grapheme clusters of `text`.
///
/// Every classification routine in this crate operates on the clusters
/// yielded here, so a flag, a keycap or a ZWJ family is always seen as one
/// unit.
pub fn graphemes(text: &str) -> Graphemes<'_> {
    text.graphemes(true)
}

/// Return the number of extended grapheme clusters in `text`.
pub fn grapheme_count(text: &str) -> usize {
    graphemes(text).count()
}

/// Return the only cluster in `text`, or `None` if `text` is empty or has
/// more than one cluster. Stops after at most two clusters.
pub(crate) fn single_grapheme(text: &str) -> Option<&str> {
    let mut it = graphemes(text);
    let first = it.next()?;
    if it.next().is_some() {
        return None;
    }
    Some(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zwj_family_is_one_cluster() {
        assert_eq!(grapheme_count("👨\u{200D}👩\u{200D}👧\u{200D}👦"), 1);
    }

    #[test]
    fn flag_is_one_cluster() {
        assert_eq!(grapheme_count("🇺🇸"), 1);
        assert_eq!(grapheme_count("🇺🇸🇫🇷"), 2);
    }

    #[test]
    fn keycap_is_one_cluster() {
        assert_eq!(grapheme_count("1\u{FE0F}\u{20E3}"), 1);
    }

    #[test]
    fn mixed() {
        let got: Vec<&str> = graphemes("a😊 b").collect();
        assert_eq!(got, vec!["a", "😊", " ", "b"]);
        assert_eq!(grapheme_count(""), 0);
    }

    #[test]
    fn single() {
        assert_eq!(single_grapheme("👋🏽"), Some("👋🏽"));
        assert_eq!(single_grapheme("😊😊"), None);
        assert_eq!(single_grapheme(""), None);
    }
}
