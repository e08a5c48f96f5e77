//! Configuration types for grapevine.
//!
//! [`Config::load`] reads `~/.config/grapevine/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//!
//! The taxonomy, smart-tag keyword sets, ignore phrases and region list all
//! live here and are handed to the pipeline components explicitly, so tests
//! can swap in a substitute taxonomy without touching global state.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[classifier]
short_message_len = 50
link_marker       = "http"

[noise]
min_length = 5
ignore_phrases = [
    "good morning", "good afternoon", "good evening", "good night",
    "thank you", "thanks", "welcome",
    "congrats", "congratulations",
    "happy birthday", "happy anniversary",
    "lol", "lmao", "rofl", "haha",
    "forwarded", "forward please",
    "any updates", "how are you",
    "this message was deleted", "media omitted",
    "joined using a group link", "added", "removed", "left",
]

[tags]
urgency = ["deadline", "last date", "apply by", "register by", "closing soon", "hurry"]
regions = [
    "visakhapatnam", "vizag", "hyderabad", "bangalore", "bengaluru",
    "delhi", "ncr", "mumbai", "pune", "chennai", "remote",
]

[tags.modes]
hybrid  = ["hybrid", "both online and offline"]
online  = ["online", "zoom", "virtual", "webinar", "teams", "meet"]
offline = ["venue", "location", "physical", "campus", "hotel", "hall"]

[tags.costs]
free = ["free", "no cost", "complimentary", "free entry"]
paid = ["fee", "ticket", "price", "cost", "rs.", "inr", "$", "paid"]

[tags.audiences]
students   = ["student", "fresher", "graduate", "college"]
founders   = ["founder", "entrepreneur", "startup owner", "ceo"]
developers = ["developer", "coder", "programmer", "engineer"]

[scan]
root      = "chats"
extension = "txt"

[export]
js_variable = "window.whatsappGodData"

[[taxonomy]]
name = "Opportunities"
subcategories = [
    { name = "Internships", keywords = ["internship", "intern", "stipend", "trainee"] },
    { name = "Full-time Jobs", keywords = ["full-time", "full time", "hiring", "vacancy", "job opening", "salary", "ctc", "engineer", "developer", "manager"] },
    { name = "Freelancing", keywords = ["freelance", "freelancer", "contract", "gig", "project basis"] },
    { name = "Volunteers", keywords = ["volunteer", "volunteering", "community service"] },
    { name = "Fellowships", keywords = ["fellowship", "fellow"] },
    { name = "Programs / Cohorts", keywords = ["cohort", "program", "accelerator program", "incubation program"] },
]

[[taxonomy]]
name = "Events"
subcategories = [
    { name = "Hackathons", keywords = ["hackathon", "hack", "coding competition", "build-a-thon"] },
    { name = "Meetups", keywords = ["meetup", "meet-up", "gathering", "networking"] },
    { name = "Workshops", keywords = ["workshop", "masterclass", "training session", "bootcamp"] },
    { name = "Webinars / Online Events", keywords = ["webinar", "online session", "zoom", "google meet", "live stream"] },
    { name = "Summits / Conferences", keywords = ["summit", "conference", "conclave", "symposium"] },
    { name = "Startup Pitches / Demo Days", keywords = ["demo day", "pitch", "pitching", "investor connect"] },
]

[[taxonomy]]
name = "Funding"
subcategories = [
    { name = "Startup Grants", keywords = ["grant", "equity-free", "non-dilutive"] },
    { name = "Govt Schemes", keywords = ["scheme", "government", "subsidy", "msme", "startup india"] },
    { name = "Pitch Competitions", keywords = ["pitch competition", "prize money", "cash prize"] },
    { name = "Scholarships", keywords = ["scholarship", "financial aid"] },
    { name = "Innovation Challenges", keywords = ["challenge", "innovation contest", "grand challenge"] },
]

[[taxonomy]]
name = "Academic / Exams"
subcategories = [
    { name = "Competitions", keywords = ["competition", "contest", "quiz"] },
    { name = "Scholarships (student)", keywords = ["student scholarship", "merit"] },
    { name = "Paper Calls / Journals", keywords = ["call for papers", "journal", "research paper", "publication"] },
    { name = "Bootcamps", keywords = ["bootcamp", "summer school"] },
]

[[taxonomy]]
name = "Resources"
subcategories = [
    { name = "Courses", keywords = ["course", "certification", "learning", "tutorial"] },
    { name = "Tools", keywords = ["tool", "software", "platform", "app"] },
    { name = "Templates", keywords = ["template", "checklist", "framework"] },
    { name = "Announcements", keywords = ["announcement", "update", "news", "launch", "alert"] },
    { name = "Important Links", keywords = ["link", "resource", "guide"] },
]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/grapevine/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Categories in declaration order. Order matters: on a score tie the
    /// earlier subcategory wins.
    #[serde(default)]
    pub taxonomy: Vec<CategoryConfig>,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub noise: NoiseConfig,
    #[serde(default)]
    pub tags: TagConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// One `[[taxonomy]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<SubcategoryConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubcategoryConfig {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// `[classifier]` section: parameters of the "Not Useful" override.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Keyword-less messages strictly shorter than this (in characters) are
    /// reclassified as "Not Useful".
    #[serde(default = "default_short_message_len")]
    pub short_message_len: usize,
    /// Messages containing this marker are never reclassified.
    #[serde(default = "default_link_marker")]
    pub link_marker: String,
}

fn default_short_message_len() -> usize { 50 }
fn default_link_marker() -> String { "http".to_string() }

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            short_message_len: default_short_message_len(),
            link_marker: default_link_marker(),
        }
    }
}

/// `[noise]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct NoiseConfig {
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default)]
    pub ignore_phrases: Vec<String>,
}

fn default_min_length() -> usize { 5 }

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            ignore_phrases: Vec::new(),
        }
    }
}

/// `[tags]` section: keyword sets for the smart-tag extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagConfig {
    #[serde(default)]
    pub modes: ModeKeywords,
    #[serde(default)]
    pub costs: CostKeywords,
    #[serde(default)]
    pub audiences: AudienceKeywords,
    #[serde(default)]
    pub urgency: Vec<String>,
    /// Checked in this order; the first one mentioned wins.
    #[serde(default)]
    pub regions: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModeKeywords {
    #[serde(default)]
    pub hybrid: Vec<String>,
    #[serde(default)]
    pub online: Vec<String>,
    #[serde(default)]
    pub offline: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostKeywords {
    #[serde(default)]
    pub free: Vec<String>,
    #[serde(default)]
    pub paid: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AudienceKeywords {
    #[serde(default)]
    pub students: Vec<String>,
    #[serde(default)]
    pub founders: Vec<String>,
    #[serde(default)]
    pub developers: Vec<String>,
}

/// `[scan]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_scan_root")]
    pub root: PathBuf,
    #[serde(default = "default_scan_extension")]
    pub extension: String,
}

fn default_scan_root() -> PathBuf { PathBuf::from("chats") }
fn default_scan_extension() -> String { "txt".to_string() }

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_scan_root(),
            extension: default_scan_extension(),
        }
    }
}

/// `[export]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_js_variable")]
    pub js_variable: String,
}

fn default_js_variable() -> String { "window.whatsappGodData".to_string() }

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            js_variable: default_js_variable(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration layered on top of the built-in defaults.
    ///
    /// With `explicit = Some(path)` the file must exist. Otherwise the user
    /// file at `~/.config/grapevine/config.toml` is used, and created with the
    /// defaults if it does not exist.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => {
                let path = config_path();
                if !path.exists() {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
                }
                (path, false)
            }
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(required))
            .build()
            .with_context(|| format!("reading config {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("invalid config {}", path.display()))
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self::from_toml(DEFAULT_CONFIG)
            .expect("built-in default config must deserialize correctly")
    }

    /// Parse a TOML document layered over the built-in defaults.
    pub fn from_toml(overrides: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(overrides, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("grapevine")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
