use crate::classify::is_emoji_cluster;
use crate::grapheme::graphemes;

/// Return every emoji cluster in `text`, in order, duplicates included.
pub fn emojis(text: &str) -> Vec<&str> {
    graphemes(text).filter(|cluster| is_emoji_cluster(cluster)).collect()
}

/// Return the number of emoji clusters in `text`.
pub fn emoji_count(text: &str) -> usize {
    graphemes(text).filter(|cluster| is_emoji_cluster(cluster)).count()
}

/// Return `text` with every emoji cluster removed. Everything else,
/// including whitespace, is kept exactly as it was.
pub fn removing_emojis(text: &str) -> String {
    graphemes(text).filter(|cluster| !is_emoji_cluster(cluster)).collect()
}

/// Like [`removing_emojis`](fn.removing_emojis.html), but also collapses
/// each whitespace run to a single space and trims both ends.
pub fn stripping_emojis(text: &str) -> String {
    let removed = removing_emojis(text);
    let mut out = String::with_capacity(removed.len());
    for word in removed.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract() {
        let text = "Hello 😊 World 🔥";
        assert_eq!(emojis(text), vec!["😊", "🔥"]);
        assert_eq!(emoji_count(text), 2);
        assert_eq!(emojis("😊😊"), vec!["😊", "😊"]);
        assert!(emojis("no emoji here").is_empty());
        assert!(emojis("").is_empty());
    }

    #[test]
    fn extract_sequences_whole() {
        let text = "team: 👨\u{200D}👩\u{200D}👧 and 🇺🇸 #\u{FE0F}\u{20E3} #";
        assert_eq!(
            emojis(text),
            vec!["👨\u{200D}👩\u{200D}👧", "🇺🇸", "#\u{FE0F}\u{20E3}"]
        );
        assert_eq!(emoji_count(text), 3);
    }

    #[test]
    fn remove() {
        assert_eq!(removing_emojis("Hello 😊 World"), "Hello  World");
        assert_eq!(removing_emojis("😊🔥"), "");
        assert_eq!(removing_emojis("plain"), "plain");
        assert_eq!(removing_emojis("© 2024"), "© 2024");
    }

    #[test]
    fn strip() {
        assert_eq!(stripping_emojis("Hello 😊 World 🔥"), "Hello World");
        assert_eq!(stripping_emojis("A 😊 B 🔥 C"), "A B C");
        assert_eq!(stripping_emojis("  😊  "), "");
        assert_eq!(stripping_emojis("a\t\n😊 b"), "a b");
        assert_eq!(stripping_emojis(""), "");
    }
}
