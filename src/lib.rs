//! grapevine — turns exported chat transcripts into a categorised feed.
//!
//! The segmentation and classification pipeline lives in `grapevine-core`;
//! transcript discovery in `grapevine-feeds`. This crate adds the HTTP API
//! used by the portal and re-exports both libraries for integration tests.
//!
//! # Architecture
//!
//! ```text
//! Feeds ──► Pipeline ──► sorted messages ──┬──► Export (data.js / .json)
//!                                          └──► Serve (/api/messages)
//! ```

pub mod serve;

pub use grapevine_core;
pub use grapevine_feeds;
