//! Domain-specific assertion macros for grapevine harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! message broke *which* classification expectation.

use grapevine_core::Message;

// ---------------------------------------------------------------------------
// Classification assertions
// ---------------------------------------------------------------------------

/// Assert that a `Message` landed in the expected category and subcategory.
///
/// ```rust
/// assert_category!(msg, "Opportunities", "Full-time Jobs");
/// ```
#[macro_export]
macro_rules! assert_category {
    ($msg:expr, $category:expr, $sub:expr) => {{
        let msg: &grapevine_core::Message = &$msg;
        let expected: (&str, &str) = ($category, $sub);
        let actual = (msg.category.as_str(), msg.sub_category.as_str());
        if actual != expected {
            panic!(
                "assert_category! failed:\n  expected: {:?}\n  actual:   {:?}\n  content: {:?}",
                expected, actual, msg.content
            );
        }
    }};
}

/// Assert the confidence tier of a `Message`.
#[macro_export]
macro_rules! assert_confidence {
    ($msg:expr, $confidence:expr) => {{
        let msg: &grapevine_core::Message = &$msg;
        let expected: grapevine_core::Confidence = $confidence;
        if msg.confidence != expected {
            panic!(
                "assert_confidence! failed:\n  expected: {:?}\n  actual:   {:?}\n  content: {:?}",
                expected, msg.confidence, msg.content
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Output invariants
// ---------------------------------------------------------------------------

/// Find the single message whose content contains `needle`.
pub fn find_message<'a>(messages: &'a [Message], needle: &str) -> &'a Message {
    let hits: Vec<_> = messages.iter().filter(|m| m.content.contains(needle)).collect();
    match hits.as_slice() {
        [one] => one,
        [] => panic!(
            "no message contains {needle:?}.\n  contents: {:#?}",
            messages.iter().map(|m| &m.content).collect::<Vec<_>>()
        ),
        many => panic!("{} messages contain {needle:?}", many.len()),
    }
}

/// Assert that no message contains `needle`.
pub fn assert_absent(messages: &[Message], needle: &str) {
    if let Some(m) = messages.iter().find(|m| m.content.contains(needle)) {
        panic!("expected no message containing {needle:?}, found {:?}", m.content);
    }
}

/// Assert that timestamps never increase along the list (newest first).
pub fn assert_newest_first(messages: &[Message]) {
    for pair in messages.windows(2) {
        let (a, b) = (pair[0].timestamp(), pair[1].timestamp());
        assert!(
            a >= b || b.is_none(),
            "out of order: {} {} before {} {}",
            pair[0].date,
            pair[0].time,
            pair[1].date,
            pair[1].time
        );
    }
}

/// Assert the output value domains downstream consumers rely on.
pub fn assert_value_domains(messages: &[Message], taxonomy: &[&str]) {
    for m in messages {
        assert!(
            taxonomy.contains(&m.category.as_str())
                || m.category == "Uncategorized"
                || m.category == "Not Useful",
            "unexpected category {:?}",
            m.category
        );
        assert!(!m.id.is_empty());
        let region_ok = m.meta.region == "Unknown"
            || m.meta.region.chars().next().is_some_and(|c| c.is_uppercase());
        assert!(region_ok, "region not capitalised: {:?}", m.meta.region);
        if let Some(phone) = &m.meta.phone_number {
            assert!(
                phone.chars().all(|c| c.is_ascii_digit() || c == '+'),
                "phone not normalised: {phone:?}"
            );
        }
    }
}
