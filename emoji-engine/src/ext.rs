use crate::classify;
use crate::sequence;
use crate::skin_tone::{self, SkinTone};
use crate::text;

/// Emoji operations as methods on `str`.
///
/// Each method forwards to the free function of the same name.
pub trait EmojiExt {
    /// See [`is_emoji`](fn.is_emoji.html).
    fn is_emoji(&self) -> bool;
    /// See [`contains_only_emoji`](fn.contains_only_emoji.html).
    fn contains_only_emoji(&self) -> bool;
    /// See [`is_single_emoji`](fn.is_single_emoji.html).
    fn is_single_emoji(&self) -> bool;
    /// See [`emojis`](fn.emojis.html).
    fn emojis(&self) -> Vec<&str>;
    /// See [`emoji_count`](fn.emoji_count.html).
    fn emoji_count(&self) -> usize;
    /// See [`removing_emojis`](fn.removing_emojis.html).
    fn removing_emojis(&self) -> String;
    /// See [`stripping_emojis`](fn.stripping_emojis.html).
    fn stripping_emojis(&self) -> String;
    /// See [`emoji_skin_tone`](fn.emoji_skin_tone.html).
    fn emoji_skin_tone(&self) -> Option<SkinTone>;
    /// See [`normalizing_skin_tone`](fn.normalizing_skin_tone.html).
    fn normalizing_skin_tone(&self, tone: SkinTone) -> String;
    /// See [`emoji_components`](fn.emoji_components.html).
    fn emoji_components(&self) -> Vec<&str>;
}

impl EmojiExt for str {
    fn is_emoji(&self) -> bool {
        classify::is_emoji(self)
    }

    fn contains_only_emoji(&self) -> bool {
        classify::contains_only_emoji(self)
    }

    fn is_single_emoji(&self) -> bool {
        classify::is_single_emoji(self)
    }

    fn emojis(&self) -> Vec<&str> {
        text::emojis(self)
    }

    fn emoji_count(&self) -> usize {
        text::emoji_count(self)
    }

    fn removing_emojis(&self) -> String {
        text::removing_emojis(self)
    }

    fn stripping_emojis(&self) -> String {
        text::stripping_emojis(self)
    }

    fn emoji_skin_tone(&self) -> Option<SkinTone> {
        skin_tone::emoji_skin_tone(self)
    }

    fn normalizing_skin_tone(&self, tone: SkinTone) -> String {
        skin_tone::normalizing_skin_tone(self, tone)
    }

    fn emoji_components(&self) -> Vec<&str> {
        sequence::emoji_components(self)
    }
}
