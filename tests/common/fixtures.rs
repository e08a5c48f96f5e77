//! Static transcript corpora used across harnesses.
//!
//! Each corpus is a `&'static str` in the chat export line format, with the
//! quirks real exports carry: directional marks, system notices, multi-line
//! bodies, and a preamble before the first timestamp.

use std::path::Path;

/// A startup community group: jobs, events, funding and chatter.
pub const STARTUP_CIRCLE: &str = "\
\u{200E}Messages and calls are end-to-end encrypted.
12/01/2024, 09:15 - Meera created group \"Startup Circle\"
12/01/2024, 09:16 - Meera added Ravi
12/01/2024, 09:30 - Meera: Good morning everyone!
12/01/2024, 10:02 - Ravi: We are hiring a full-time backend developer in Hyderabad.
CTC 12-18 LPA. Apply by 20th Jan.
Contact: 98765 43210
13/01/2024, 18:45 - Asha: Hackathon this weekend at T-Hub, free entry for students!
Venue: T-Hub, Hyderabad
Register by Friday: https://example.com/hack
13/01/2024, 18:46 - Ravi: <Media omitted>
14/01/2024, 08:05 - Meera: Startup India seed fund scheme is open. Government grant, equity-free.
14/01/2024, 08:06 - Asha: ok
14/01/2024, 21:10 - Ravi: anyone up for chai later?
";

/// A second group with webinars and remote work, interleaved in time with
/// [`STARTUP_CIRCLE`].
pub const HACKERS_VIZAG: &str = "\
13/01/2024, 07:00 - Kiran: Zoom webinar on Rust for founders and developers, Rs. 199 ticket
13/01/2024, 07:01 - Kiran: This message was deleted
15/01/2024, 11:30 - Divya: Remote internship with stipend for college students, last date 25/01. Call +91 91234-56789
";

/// Header lines only; every one should become exactly one segment.
pub const HEADERS_ONLY: &[&str] = &[
    "01/03/2024, 14:05 - Asha: We are hiring a full-time developer, apply by 10th March!",
    "02/03/2024, 09:00 - Ravi: good morning everyone",
    "03/03/2024, 10:00 - System: ok",
    "04/03/2024, 11:00 - Kiran joined using this group's invite link",
];

/// Write `files` (relative path → contents) under `root`, creating
/// directories as needed.
pub fn write_chat_tree(root: &Path, files: &[(&str, &str)]) -> std::io::Result<()> {
    for (rel, contents) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
    }
    Ok(())
}
