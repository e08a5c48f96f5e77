//! Noise filter — drops messages that carry no useful signal.

use crate::config::NoiseConfig;

/// Decides whether a finished message is worth classifying.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    min_length: usize,
    /// Lower-cased ignore phrases.
    phrases: Vec<String>,
}

impl NoiseFilter {
    pub fn new(config: &NoiseConfig) -> Self {
        Self {
            min_length: config.min_length,
            phrases: config.ignore_phrases.iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    /// True when the content is too short (after trimming) or contains any
    /// ignore phrase as a case-insensitive substring.
    ///
    /// Matching is plain containment, so `"left"` also rejects "leftover".
    pub fn is_noise(&self, content: &str) -> bool {
        let lower = content.to_lowercase();
        let lower = lower.trim();

        if lower.chars().count() < self.min_length {
            return true;
        }
        self.phrases.iter().any(|p| lower.contains(p.as_str()))
    }
}
