//! Pipeline — segmenter → noise filter → classifier → tag extractor.
//!
//! One [`Pipeline`] serves a whole run: it owns the configured components and
//! the run-wide id sequence. Each group is segmented independently; the
//! combined output is sorted newest first.

use crate::classifier::Classifier;
use crate::config::Config;
use crate::filter::NoiseFilter;
use crate::segmenter::{Draft, Segmenter};
use crate::tags::TagExtractor;
use crate::types::Message;

/// Run-unique message ids: 9-character base-36 counters.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    const WIDTH: usize = 9;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.next += 1;
        to_base36(self.next, Self::WIDTH)
    }
}

fn to_base36(mut n: u64, width: usize) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut out = Vec::with_capacity(width);
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    while out.len() < width {
        out.push(b'0');
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Counters for the most recent [`Pipeline::run`], reset when a run starts.
///
/// `groups` counts transcripts handed to `run`; driving [`Pipeline::group`]
/// directly only moves the per-message counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub groups: usize,
    pub segmented: usize,
    pub filtered: usize,
    pub emitted: usize,
}

/// Batch transform from raw transcripts to classified messages.
#[derive(Debug, Clone)]
pub struct Pipeline {
    noise: NoiseFilter,
    classifier: Classifier,
    tagger: TagExtractor,
    ids: IdSequence,
    stats: RunStats,
}

impl Pipeline {
    pub fn new(config: &Config) -> Self {
        Self::from_parts(
            NoiseFilter::new(&config.noise),
            Classifier::new(&config.taxonomy, &config.classifier),
            TagExtractor::new(&config.tags),
        )
    }

    /// Build from explicitly constructed components, e.g. a test taxonomy.
    pub fn from_parts(noise: NoiseFilter, classifier: Classifier, tagger: TagExtractor) -> Self {
        Self {
            noise,
            classifier,
            tagger,
            ids: IdSequence::new(),
            stats: RunStats::default(),
        }
    }

    /// Counters of the current or most recent run.
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Lazily segment and finalise one group's transcript.
    ///
    /// Messages are yielded in transcript order; noise is skipped.
    pub fn group<'a>(&'a mut self, group: &'a str, text: &'a str) -> impl Iterator<Item = Message> + 'a {
        tracing::debug!(group, bytes = text.len(), "segmenting group");
        Segmenter::from_text(text).filter_map(move |draft| self.finalize(group, draft))
    }

    /// Classify and tag a completed draft, or `None` if it is noise.
    pub fn finalize(&mut self, group: &str, draft: Draft) -> Option<Message> {
        self.stats.segmented += 1;
        if self.noise.is_noise(&draft.content) {
            self.stats.filtered += 1;
            tracing::trace!(group, date = %draft.date, time = %draft.time, "filtered as noise");
            return None;
        }

        let assignment = self.classifier.assign(&draft.content);
        let category = assignment.category.to_string();
        let sub_category = assignment.sub_category.to_string();
        let confidence = assignment.confidence;
        let meta = self.tagger.extract(&draft.content);
        self.stats.emitted += 1;

        Some(Message {
            id: self.ids.next_id(),
            group: group.to_string(),
            date: draft.date,
            time: draft.time,
            sender: draft.sender,
            content: draft.content,
            category,
            sub_category,
            confidence,
            meta,
        })
    }

    /// Process every `(group, transcript)` pair and return all messages,
    /// newest first.
    ///
    /// Each call is an independent run: ids restart at `000000001` and the
    /// counters start from zero.
    pub fn run<I, G, T>(&mut self, transcripts: I) -> Vec<Message>
    where
        I: IntoIterator<Item = (G, T)>,
        G: AsRef<str>,
        T: AsRef<str>,
    {
        self.ids = IdSequence::new();
        self.stats = RunStats::default();

        let mut all = Vec::new();
        for (group, text) in transcripts {
            self.stats.groups += 1;
            all.extend(self.group(group.as_ref(), text.as_ref()));
        }
        sort_newest_first(&mut all);

        let stats = self.stats;
        tracing::debug!(
            groups = stats.groups,
            segmented = stats.segmented,
            filtered = stats.filtered,
            emitted = stats.emitted,
            "pipeline run complete"
        );
        all
    }
}

/// Sort by combined date and time, most recent first.
///
/// Stable: messages sharing a timestamp keep their insertion order. Messages
/// whose date or time does not parse sort after every dated message.
pub fn sort_newest_first(messages: &mut [Message]) {
    messages.sort_by_cached_key(|m| std::cmp::Reverse(m.timestamp()));
}
