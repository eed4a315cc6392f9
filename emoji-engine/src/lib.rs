/*!
Classify, extract and normalize emoji in Unicode text.

All operations work on extended grapheme clusters, so a flag, a keycap or a
whole ZWJ family counts as one emoji. Codepoint properties come from static
tables generated from the Unicode emoji data (see
[`UNICODE_VERSION`](property/constant.UNICODE_VERSION.html)), so results do
not depend on the host platform.

Every function here is total: any `&str` is valid input, nothing panics and
nothing keeps state between calls.

```
use emoji_engine::{EmojiExt, SkinTone};

assert!("😊".is_single_emoji());
assert!(!"#".is_emoji());
assert!("#\u{FE0F}\u{20E3}".is_emoji());
assert_eq!("Hello 😊 World 🔥".stripping_emojis(), "Hello World");
assert_eq!("👋🏽".normalizing_skin_tone(SkinTone::Dark), "👋🏿");
```
*/

#![deny(missing_docs)]

pub use crate::classify::{
    contains_only_emoji, is_emoji, is_emoji_cluster, is_single_emoji,
};
pub use crate::ext::EmojiExt;
pub use crate::filter::{FilterConfig, InputFilter};
pub use crate::grapheme::{grapheme_count, graphemes};
pub use crate::sequence::emoji_components;
pub use crate::skin_tone::{
    emoji_skin_tone, is_skin_tone_modifier, normalizing_skin_tone,
    ParseSkinToneError, SkinTone,
};
pub use crate::text::{emoji_count, emojis, removing_emojis, stripping_emojis};

/// Codepoint level emoji properties.
pub mod property;

mod classify;
mod ext;
mod filter;
mod grapheme;
mod sequence;
mod skin_tone;
mod text;
#[rustfmt::skip]
mod unicode_tables;
