//! grapevine-core — chat transcript segmentation and classification.
//!
//! This crate exposes each pipeline layer as a public module, plus the shared
//! types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! Normalizer ──► Segmenter ──► Noise filter ──► Classifier ──► Tag extractor
//!                                                                   │
//!                                        sorted Vec<Message> ◄──────┘──► Export
//! ```
//!
//! Everything is synchronous and stateless between runs. Configuration is
//! passed in explicitly; no component reads global state.

pub mod classifier;
pub mod config;
pub mod export;
pub mod filter;
pub mod normalizer;
pub mod pipeline;
pub mod segmenter;
pub mod tags;
pub mod types;

pub use pipeline::Pipeline;
pub use types::{Audience, Confidence, Cost, Message, Meta, Mode};
