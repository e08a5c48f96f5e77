//! Segmenter — groups transcript lines into logical messages.
//!
//! A message starts on a header line of the form
//!
//! ```text
//! DD/MM/YYYY, HH:MM - [sender: ]body
//! ```
//!
//! and continues over every following line until the next header or the end
//! of input. The segmenter is a two-state machine: either no message is open
//! (stray lines are dropped) or exactly one [`Draft`] is open (lines are
//! appended to it). A header line closes the open draft and opens a new one.
//!
//! Segmentation is lazy: [`Segmenter`] is an iterator that yields each draft
//! as soon as its content is complete.

use crate::normalizer::normalize_line;
use crate::types::SYSTEM_SENDER;
use regex::Regex;
use std::sync::LazyLock;

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2}/[0-9]{2}/[0-9]{4}), ([0-9]{2}:[0-9]{2}) - ")
        .expect("header pattern must compile")
});

const SENDER_SEPARATOR: &str = ": ";

/// Parsed pieces of a header line, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'l> {
    pub date: &'l str,
    pub time: &'l str,
    /// `None` when no `: ` follows the timestamp (system notices).
    pub sender: Option<&'l str>,
    pub body: &'l str,
}

/// Parse a normalised line as a message header.
///
/// Returns `None` for continuation lines. The sender is everything up to the
/// first `": "` after the timestamp prefix.
pub fn parse_header(line: &str) -> Option<Header<'_>> {
    let caps = HEADER.captures(line)?;
    let prefix = caps.get(0)?;
    let date = caps.get(1)?.as_str();
    let time = caps.get(2)?.as_str();
    let rest = &line[prefix.end()..];

    let (sender, body) = match rest.find(SENDER_SEPARATOR) {
        Some(idx) => (Some(&rest[..idx]), &rest[idx + SENDER_SEPARATOR.len()..]),
        None => (None, rest),
    };

    Some(Header { date, time, sender, body })
}

/// A message whose content is still being assembled.
///
/// Once yielded by the [`Segmenter`] the content is complete and a draft is
/// only read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub date: String,
    pub time: String,
    pub sender: String,
    pub content: String,
}

impl Draft {
    fn open(header: Header<'_>) -> Self {
        Self {
            date: header.date.to_string(),
            time: header.time.to_string(),
            sender: header.sender.unwrap_or(SYSTEM_SENDER).to_string(),
            content: header.body.to_string(),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.content.push('\n');
        self.content.push_str(line);
    }
}

/// Lazy iterator over the [`Draft`]s of one transcript.
///
/// Finite and not restartable: once the underlying lines run out the last
/// open draft is yielded and every later call returns `None`.
pub struct Segmenter<I: Iterator> {
    lines: std::iter::Fuse<I>,
    current: Option<Draft>,
}

impl<I> Segmenter<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines: lines.fuse(),
            current: None,
        }
    }

    /// True while a draft is open, i.e. at least one header has been seen
    /// and its message has not been yielded yet.
    pub fn has_open_message(&self) -> bool {
        self.current.is_some()
    }
}

impl<'t> Segmenter<std::str::Lines<'t>> {
    /// Segment a whole transcript.
    pub fn from_text(text: &'t str) -> Self {
        Self::new(text.lines())
    }
}

impl<I> Iterator for Segmenter<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Draft;

    fn next(&mut self) -> Option<Draft> {
        for raw in self.lines.by_ref() {
            let line = normalize_line(raw.as_ref());
            match parse_header(&line) {
                Some(header) => {
                    if let Some(done) = self.current.replace(Draft::open(header)) {
                        return Some(done);
                    }
                }
                None => match self.current.as_mut() {
                    Some(open) => open.push_line(&line),
                    None => tracing::trace!(line = %line, "dropping line before first header"),
                },
            }
        }
        self.current.take()
    }
}
