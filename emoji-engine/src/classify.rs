use crate::grapheme::{graphemes, single_grapheme};
use crate::property::{
    is_emoji as has_emoji_property, is_emoji_modifier,
    is_emoji_modifier_base, is_emoji_presentation, is_keycap_base,
    is_regional_indicator, COMBINING_KEYCAP, VS16, ZWJ,
};

/// Returns true if and only if the given grapheme cluster renders as an
/// emoji.
///
/// A cluster is an emoji when it is a keycap sequence (`0`-`9`, `#` or `*`
/// followed somewhere by `U+20E3`), or when it has at least one base
/// codepoint and every codepoint in it belongs to an emoji sequence. A base
/// is a codepoint with emoji presentation, a modifier base, a regional
/// indicator, or any `Emoji` codepoint when the cluster also carries
/// `U+FE0F`. This means that `©` alone is text but `©\u{FE0F}` is an emoji,
/// and that a lone digit is never an emoji.
///
/// This never panics and never allocates. Passing a string that is not a
/// single cluster is allowed; the same rule is applied to all of it.
pub fn is_emoji_cluster(cluster: &str) -> bool {
    let first = match cluster.chars().next() {
        None => return false,
        Some(first) => first,
    };
    if is_keycap_base(first) && cluster.contains(COMBINING_KEYCAP) {
        return true;
    }

    let has_vs16 = cluster.contains(VS16);
    let has_base = cluster.chars().any(|c| {
        is_emoji_presentation(c)
            || is_emoji_modifier_base(c)
            || is_regional_indicator(c)
            || (has_vs16 && c != VS16 && has_emoji_property(c))
    });
    if !has_base {
        return false;
    }
    cluster.chars().all(|c| is_sequence_member(c, has_vs16))
}

fn is_sequence_member(c: char, has_vs16: bool) -> bool {
    is_emoji_presentation(c)
        || is_emoji_modifier_base(c)
        || is_emoji_modifier(c)
        || c == VS16
        || c == ZWJ
        || c == COMBINING_KEYCAP
        || is_regional_indicator(c)
        || (has_vs16 && has_emoji_property(c))
}

/// Returns true if and only if `text` is non-empty and every one of its
/// grapheme clusters is an emoji.
pub fn contains_only_emoji(text: &str) -> bool {
    !text.is_empty() && graphemes(text).all(is_emoji_cluster)
}

/// Returns true if and only if `text` is exactly one grapheme cluster and
/// that cluster is an emoji.
pub fn is_single_emoji(text: &str) -> bool {
    single_grapheme(text).map_or(false, is_emoji_cluster)
}

/// Returns true if and only if `text` is made up entirely of emoji.
///
/// This is the same as [`contains_only_emoji`](fn.contains_only_emoji.html).
pub fn is_emoji(text: &str) -> bool {
    contains_only_emoji(text)
}
