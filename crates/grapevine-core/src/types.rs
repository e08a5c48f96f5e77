//! Core types for grapevine-core.
//!
//! This module defines the fundamental data structures shared across all
//! pipeline layers: the classified [`Message`], its [`Confidence`] tier, and
//! the smart-tag [`Meta`] record with its closed value domains.
//!
//! Field names serialise in camelCase (`subCategory`, `phoneNumber`) because
//! downstream portal pages read them by those names.

use serde::{Deserialize, Serialize};

/// Category assigned when no taxonomy keyword matched.
pub const UNCATEGORIZED: &str = "Uncategorized";
/// Subcategory paired with the sentinel categories.
pub const GENERAL: &str = "General";
/// Category assigned to short, keyword-less messages without a link.
pub const NOT_USEFUL: &str = "Not Useful";
/// Sender recorded when a header line has no `name: ` separator.
pub const SYSTEM_SENDER: &str = "System";
/// Region recorded when no configured region name is mentioned.
pub const UNKNOWN_REGION: &str = "Unknown";

/// A finalised chat message: segmented, filtered, classified and tagged.
///
/// Produced once per message by the pipeline and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Run-unique identifier, see [`crate::pipeline::IdSequence`].
    pub id: String,
    /// Name of the conversation the transcript came from.
    pub group: String,
    /// `DD/MM/YYYY`, exactly as it appeared on the header line.
    pub date: String,
    /// `HH:MM`, exactly as it appeared on the header line.
    pub time: String,
    pub sender: String,
    /// Full body, continuation lines joined with `\n`.
    pub content: String,
    pub category: String,
    pub sub_category: String,
    pub confidence: Confidence,
    pub meta: Meta,
}

impl Message {
    /// Combined `date` + `time` as a comparable instant, or `None` if either
    /// part does not parse (e.g. `31/02/2024`).
    pub fn timestamp(&self) -> Option<chrono::NaiveDateTime> {
        let date = chrono::NaiveDate::parse_from_str(&self.date, "%d/%m/%Y").ok()?;
        let time = chrono::NaiveTime::parse_from_str(&self.time, "%H:%M").ok()?;
        Some(date.and_time(time))
    }
}

/// Coarse bucket derived from the classifier's keyword score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn from_score(score: usize) -> Self {
        match score {
            0 => Confidence::Low,
            1 => Confidence::Medium,
            _ => Confidence::High,
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::Low => write!(f, "Low"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::High => write!(f, "High"),
        }
    }
}

/// Smart tags derived from message text, independent of the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub mode: Mode,
    pub cost: Cost,
    /// Every audience whose keywords matched, in declaration order.
    pub audience: Vec<Audience>,
    pub urgency: bool,
    /// Capitalised region name or `"Unknown"`.
    pub region: String,
    /// Digits (with optional `+91`) stripped of spaces and hyphens.
    pub phone_number: Option<String>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            mode: Mode::Unknown,
            cost: Cost::Unknown,
            audience: Vec::new(),
            urgency: false,
            region: UNKNOWN_REGION.to_string(),
            phone_number: None,
        }
    }
}

/// Whether an event or opportunity happens online, offline, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Online,
    Offline,
    Hybrid,
    Unknown,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Online => write!(f, "Online"),
            Mode::Offline => write!(f, "Offline"),
            Mode::Hybrid => write!(f, "Hybrid"),
            Mode::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cost {
    Free,
    Paid,
    Unknown,
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cost::Free => write!(f, "Free"),
            Cost::Paid => write!(f, "Paid"),
            Cost::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Audience {
    Students,
    Founders,
    Developers,
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Audience::Students => write!(f, "Students"),
            Audience::Founders => write!(f, "Founders"),
            Audience::Developers => write!(f, "Developers"),
        }
    }
}
