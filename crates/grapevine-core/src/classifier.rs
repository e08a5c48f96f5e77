//! Taxonomy classifier — keyword scoring over a two-level taxonomy.
//!
//! Each subcategory scores one point per keyword found anywhere in the
//! message (case-insensitive substring, counted once per keyword). The best
//! score wins; on a tie the subcategory declared first keeps the slot.

use crate::config::{CategoryConfig, ClassifierConfig};
use crate::types::{Confidence, GENERAL, NOT_USEFUL, UNCATEGORIZED};

/// Best-matching taxonomy slot for a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'t> {
    pub category: &'t str,
    pub sub_category: &'t str,
    pub score: usize,
}

impl Classification<'static> {
    /// Result when nothing in the taxonomy matched.
    pub const UNMATCHED: Self = Self {
        category: UNCATEGORIZED,
        sub_category: GENERAL,
        score: 0,
    };
}

/// Final category assignment of a message, after the confidence tier and
/// the short-message override have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'t> {
    pub category: &'t str,
    pub sub_category: &'t str,
    pub score: usize,
    pub confidence: Confidence,
}

#[derive(Debug, Clone)]
struct Subcategory {
    category: String,
    name: String,
    keywords: Vec<String>,
}

/// Scores content against a fixed taxonomy.
#[derive(Debug, Clone)]
pub struct Classifier {
    /// Flattened in declaration order; keywords lower-cased.
    slots: Vec<Subcategory>,
    short_message_len: usize,
    link_marker: String,
}

impl Classifier {
    pub fn new(taxonomy: &[CategoryConfig], config: &ClassifierConfig) -> Self {
        let slots = taxonomy
            .iter()
            .flat_map(|cat| {
                cat.subcategories.iter().map(move |sub| Subcategory {
                    category: cat.name.clone(),
                    name: sub.name.clone(),
                    keywords: sub.keywords.iter().map(|k| k.to_lowercase()).collect(),
                })
            })
            .collect();

        Self {
            slots,
            short_message_len: config.short_message_len,
            link_marker: config.link_marker.clone(),
        }
    }

    /// Highest-scoring (category, subcategory). Pure: the same content always
    /// yields the same result.
    pub fn classify(&self, content: &str) -> Classification<'_> {
        let lower = content.to_lowercase();
        let mut best: Classification<'_> = Classification::UNMATCHED;

        for slot in &self.slots {
            let score = slot
                .keywords
                .iter()
                .filter(|k| lower.contains(k.as_str()))
                .count();
            if score > best.score {
                best = Classification {
                    category: &slot.category,
                    sub_category: &slot.name,
                    score,
                };
            }
        }

        best
    }

    /// Classify and derive the confidence tier.
    ///
    /// A message with no keyword match that is short and has no link is
    /// moved to the "Not Useful" category; its subcategory stays "General".
    pub fn assign(&self, content: &str) -> Assignment<'_> {
        let found = self.classify(content);
        let mut category = found.category;

        if found.score == 0
            && content.chars().count() < self.short_message_len
            && !content.contains(self.link_marker.as_str())
        {
            category = NOT_USEFUL;
        }

        Assignment {
            category,
            sub_category: found.sub_category,
            score: found.score,
            confidence: Confidence::from_score(found.score),
        }
    }

    /// Number of subcategories across all categories.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
