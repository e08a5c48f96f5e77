//! File feed — recursive scan of a transcript directory.
//!
//! ```text
//! chats/
//! ├── Startup Circle.txt          group = "Startup Circle"
//! └── Hackers Vizag/
//!     └── WhatsApp Chat.txt       group = "Hackers Vizag"
//! ```
//!
//! Files directly under the root are named after their file stem; files in
//! subdirectories are named after their parent directory.

use grapevine_core::config::ScanConfig;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("transcript root {0} does not exist")]
    MissingRoot(PathBuf),
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A transcript file found by [`discover`], not yet read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptFile {
    pub group: String,
    pub path: PathBuf,
}

/// A loaded transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub group: String,
    pub path: PathBuf,
    pub text: String,
}

/// Find every file under `root` whose extension matches (case-insensitive),
/// sorted by path.
pub fn discover(root: &Path, extension: &str) -> Result<Vec<TranscriptFile>, FeedError> {
    if !root.is_dir() {
        return Err(FeedError::MissingRoot(root.to_path_buf()));
    }

    let mut paths = Vec::new();
    walk(root, extension, &mut paths)?;
    paths.sort();

    Ok(paths
        .into_iter()
        .map(|path| TranscriptFile {
            group: group_name(root, &path),
            path,
        })
        .collect())
}

fn walk(dir: &Path, extension: &str, out: &mut Vec<PathBuf>) -> Result<(), FeedError> {
    let read_err = |source| FeedError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_dir() {
            walk(&path, extension, out)?;
        } else if has_extension(&path, extension) {
            out.push(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

fn group_name(root: &Path, path: &Path) -> String {
    let parent = path.parent().unwrap_or(root);
    let named = if parent == root { path.file_stem() } else { parent.file_name() };
    named
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Discover and read every transcript. Bytes that are not valid UTF-8 are
/// replaced; files that cannot be read are logged and skipped.
pub fn load(root: &Path, extension: &str) -> Result<Vec<Transcript>, FeedError> {
    let files = discover(root, extension)?;
    tracing::info!(root = %root.display(), count = files.len(), "found transcript files");

    let mut out = Vec::with_capacity(files.len());
    for file in files {
        match std::fs::read(&file.path) {
            Ok(bytes) => {
                tracing::debug!(path = %file.path.display(), group = %file.group, "loaded transcript");
                out.push(Transcript {
                    text: String::from_utf8_lossy(&bytes).into_owned(),
                    group: file.group,
                    path: file.path,
                });
            }
            Err(e) => {
                tracing::warn!(path = %file.path.display(), error = %e, "skipping unreadable transcript");
            }
        }
    }
    Ok(out)
}

/// [`load`] using the `[scan]` config section.
pub fn load_scan(scan: &ScanConfig) -> Result<Vec<Transcript>, FeedError> {
    load(&scan.root, &scan.extension)
}
