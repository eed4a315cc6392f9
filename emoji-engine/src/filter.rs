use log::{debug, trace};

use crate::classify::is_single_emoji;
use crate::skin_tone::{normalizing_skin_tone, SkinTone};

/// Settings for an [`InputFilter`](struct.InputFilter.html).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FilterConfig {
    /// When set, only insertions that are exactly one emoji are accepted.
    /// Otherwise every non-empty insertion is accepted.
    pub emoji_only: bool,
    /// When set, accepted insertions are rewritten to this skin tone.
    pub normalize_skin_tone: Option<SkinTone>,
}

impl Default for FilterConfig {
    fn default() -> FilterConfig {
        FilterConfig { emoji_only: true, normalize_skin_tone: None }
    }
}

impl FilterConfig {
    /// Create the default configuration: emoji only, no normalization.
    pub fn new() -> FilterConfig {
        FilterConfig::default()
    }

    /// Set whether only single emoji are accepted.
    pub fn emoji_only(mut self, yes: bool) -> FilterConfig {
        self.emoji_only = yes;
        self
    }

    /// Set the skin tone accepted insertions are normalized to.
    pub fn normalize_skin_tone(
        mut self,
        tone: Option<SkinTone>,
    ) -> FilterConfig {
        self.normalize_skin_tone = tone;
        self
    }
}

/// Decides, one keystroke at a time, what text is forwarded to an input
/// field.
///
/// A filter holds no state besides its configuration, so one value can be
/// shared freely between threads.
#[derive(Clone, Debug, Default)]
pub struct InputFilter {
    config: FilterConfig,
}

impl InputFilter {
    /// Create a filter with the given configuration.
    pub fn new(config: FilterConfig) -> InputFilter {
        InputFilter { config }
    }

    /// Return this filter's configuration.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Decide what to do with one proposed insertion.
    ///
    /// Returns the text to forward, or `None` if the insertion is rejected.
    /// An empty insertion (a backward delete) is never forwarded. In emoji
    /// only mode, anything but a single emoji is rejected. Accepted text is
    /// normalized to the configured skin tone, if any.
    pub fn accept(&self, insertion: &str) -> Option<String> {
        if insertion.is_empty() {
            debug!("ignoring empty insertion");
            return None;
        }
        if self.config.emoji_only && !is_single_emoji(insertion) {
            debug!("rejecting insertion {:?}: not a single emoji", insertion);
            return None;
        }
        match self.config.normalize_skin_tone {
            None => Some(insertion.to_string()),
            Some(tone) => {
                let normalized = normalizing_skin_tone(insertion, tone);
                trace!(
                    "normalized {:?} to {:?} (skin tone {})",
                    insertion,
                    normalized,
                    tone
                );
                Some(normalized)
            }
        }
    }
}
