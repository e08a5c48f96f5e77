//! grapevine-feeds — transcript sources for grapevine.
//!
//! A feed yields `(group, text)` pairs for the pipeline. The only feed today
//! is a directory scan over exported `.txt` transcripts.

pub mod file;

pub use file::{discover, load, load_scan, FeedError, Transcript, TranscriptFile};
