//! Test builders — ergonomic constructors for transcripts and `Message`s.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use grapevine_core::config::Config;
use grapevine_core::types::{GENERAL, UNCATEGORIZED};
use grapevine_core::{Confidence, Message, Meta, Pipeline};

// ---------------------------------------------------------------------------
// TranscriptBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for raw transcript text in the export line format.
///
/// # Example
///
/// ```rust
/// let text = TranscriptBuilder::new()
///     .message("01/03/2024", "14:05", "Asha", "We are hiring")
///     .line("apply by Friday")
///     .system("01/03/2024", "14:06", "Ravi left")
///     .build();
/// ```
#[derive(Default)]
pub struct TranscriptBuilder {
    lines: Vec<String>,
}

impl TranscriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A header line with a sender.
    pub fn message(mut self, date: &str, time: &str, sender: &str, body: &str) -> Self {
        self.lines.push(format!("{date}, {time} - {sender}: {body}"));
        self
    }

    /// A header line without a sender separator.
    pub fn system(mut self, date: &str, time: &str, body: &str) -> Self {
        self.lines.push(format!("{date}, {time} - {body}"));
        self
    }

    /// A continuation (or stray) line, verbatim.
    pub fn line(mut self, text: &str) -> Self {
        self.lines.push(text.to_string());
        self
    }

    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

// ---------------------------------------------------------------------------
// MessageBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for already-classified [`Message`] fixtures (export and
/// serve tests that do not need the pipeline).
pub struct MessageBuilder {
    msg: Message,
}

impl MessageBuilder {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            msg: Message {
                id: "000000001".to_string(),
                group: "test-group".to_string(),
                date: "01/03/2024".to_string(),
                time: "10:00".to_string(),
                sender: "Tester".to_string(),
                content: content.into(),
                category: UNCATEGORIZED.to_string(),
                sub_category: GENERAL.to_string(),
                confidence: Confidence::Low,
                meta: Meta::default(),
            },
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.msg.id = id.into();
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.msg.group = group.into();
        self
    }

    pub fn at(mut self, date: &str, time: &str) -> Self {
        self.msg.date = date.to_string();
        self.msg.time = time.to_string();
        self
    }

    pub fn category(mut self, category: &str, sub_category: &str) -> Self {
        self.msg.category = category.to_string();
        self.msg.sub_category = sub_category.to_string();
        self
    }

    pub fn confidence(mut self, confidence: Confidence) -> Self {
        self.msg.confidence = confidence;
        self
    }

    pub fn build(self) -> Message {
        self.msg
    }
}

// ---------------------------------------------------------------------------
// Pipeline helpers
// ---------------------------------------------------------------------------

/// Pipeline over the built-in default configuration.
pub fn default_pipeline() -> Pipeline {
    Pipeline::new(&Config::defaults())
}

/// Run the default pipeline over a single group.
pub fn run_one(group: &str, text: &str) -> Vec<Message> {
    default_pipeline().run([(group, text)])
}

/// Run the default pipeline over several groups.
pub fn run_many(groups: &[(&str, &str)]) -> Vec<Message> {
    default_pipeline().run(groups.iter().copied())
}
