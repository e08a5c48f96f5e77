//! Smart-tag extractor — mode, cost, audience, urgency, region and phone.
//!
//! Runs over the same text as the classifier but independently of it. Every
//! keyword check is a case-insensitive substring test; there is no
//! tokenisation, so `"meet"` also matches "meetup" and "$" matches anywhere.

use crate::config::TagConfig;
use crate::types::{Audience, Cost, Meta, Mode, UNKNOWN_REGION};
use regex::Regex;
use std::sync::LazyLock;

/// Indian mobile number: optional `+91`, ten digits starting 6–9, optionally
/// split after the fifth digit by a space or hyphen.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+91[\-\s]?)?[6-9][0-9]{4}[\-\s]?[0-9]{5}")
        .expect("phone pattern must compile")
});

/// Lower-cased keyword list with a containment test.
#[derive(Debug, Clone, Default)]
struct Keywords(Vec<String>);

impl Keywords {
    fn new(words: &[String]) -> Self {
        Self(words.iter().map(|w| w.to_lowercase()).collect())
    }

    fn any_in(&self, lower: &str) -> bool {
        self.0.iter().any(|k| lower.contains(k.as_str()))
    }
}

/// Derives a [`Meta`] record from message content.
#[derive(Debug, Clone)]
pub struct TagExtractor {
    /// Checked in this order; first hit wins.
    modes: [(Mode, Keywords); 3],
    costs: [(Cost, Keywords); 2],
    audiences: [(Audience, Keywords); 3],
    urgency: Keywords,
    regions: Vec<String>,
}

impl TagExtractor {
    pub fn new(config: &TagConfig) -> Self {
        Self {
            modes: [
                (Mode::Hybrid, Keywords::new(&config.modes.hybrid)),
                (Mode::Online, Keywords::new(&config.modes.online)),
                (Mode::Offline, Keywords::new(&config.modes.offline)),
            ],
            costs: [
                (Cost::Free, Keywords::new(&config.costs.free)),
                (Cost::Paid, Keywords::new(&config.costs.paid)),
            ],
            audiences: [
                (Audience::Students, Keywords::new(&config.audiences.students)),
                (Audience::Founders, Keywords::new(&config.audiences.founders)),
                (Audience::Developers, Keywords::new(&config.audiences.developers)),
            ],
            urgency: Keywords::new(&config.urgency),
            regions: config.regions.iter().map(|r| r.to_lowercase()).collect(),
        }
    }

    pub fn extract(&self, content: &str) -> Meta {
        let lower = content.to_lowercase();

        Meta {
            mode: self.mode(&lower),
            cost: self.cost(&lower),
            audience: self.audience(&lower),
            urgency: self.urgency.any_in(&lower),
            region: self.region(&lower),
            phone_number: phone_number(content),
        }
    }

    fn mode(&self, lower: &str) -> Mode {
        self.modes
            .iter()
            .find(|(_, kws)| kws.any_in(lower))
            .map_or(Mode::Unknown, |(mode, _)| *mode)
    }

    fn cost(&self, lower: &str) -> Cost {
        self.costs
            .iter()
            .find(|(_, kws)| kws.any_in(lower))
            .map_or(Cost::Unknown, |(cost, _)| *cost)
    }

    fn audience(&self, lower: &str) -> Vec<Audience> {
        self.audiences
            .iter()
            .filter(|(_, kws)| kws.any_in(lower))
            .map(|(aud, _)| *aud)
            .collect()
    }

    /// First configured region mentioned anywhere, in list order rather than
    /// order of appearance in the text.
    fn region(&self, lower: &str) -> String {
        self.regions
            .iter()
            .find(|r| lower.contains(r.as_str()))
            .map_or_else(|| UNKNOWN_REGION.to_string(), |r| capitalize(r))
    }
}

/// First phone number in the text with interior spaces and hyphens removed.
pub fn phone_number(content: &str) -> Option<String> {
    PHONE.find(content).map(|m| {
        m.as_str()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect()
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
