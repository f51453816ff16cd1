pub mod category;
pub mod entries;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use serde::Serialize;

/// Canned explanation for one exception class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExceptionRecord {
    /// Two or three sentences written for someone who has never seen the error.
    pub explanation: &'static str,
    /// A single actionable fix.
    pub fix_suggestion: &'static str,
    /// Classification keywords, in display order, no duplicates.
    pub tags: &'static [&'static str],
    pub emoji: &'static str,
}

/// Returned for any class name the catalog does not know.
pub static FALLBACK: ExceptionRecord = ExceptionRecord {
    explanation: "An error occurred that we don't have detailed info about yet. Something unexpected went wrong in your code. Check the error name for clues ❓",
    fix_suggestion: "Read the full error message carefully, search online for the error name, or check the documentation for what you're trying to do",
    tags: &["unknown", "general", "unhandled"],
    emoji: "❓",
};

static INDEX: LazyLock<BTreeMap<&'static str, &'static ExceptionRecord>> = LazyLock::new(|| {
    entries::ENTRIES
        .iter()
        .map(|(name, record)| (*name, record))
        .collect()
});

/// Exact, case-sensitive lookup. Never fails: unknown names get [`FALLBACK`].
pub fn lookup(class_name: &str) -> &'static ExceptionRecord {
    find(class_name).unwrap_or(&FALLBACK)
}

/// Like [`lookup`] but distinguishes a catalog miss.
pub fn find(class_name: &str) -> Option<&'static ExceptionRecord> {
    INDEX.get(class_name).copied()
}

pub fn contains(class_name: &str) -> bool {
    INDEX.contains_key(class_name)
}

/// Every registered class name in ascending lexical order.
pub fn list_all() -> Vec<&'static str> {
    INDEX.keys().copied().collect()
}

/// Class names whose tags contain `tag`, compared case-insensitively, sorted.
pub fn search_by_tag(tag: &str) -> Vec<&'static str> {
    let needle = tag.to_lowercase();
    INDEX
        .iter()
        .filter(|(_, record)| record.tags.iter().any(|t| t.to_lowercase() == needle))
        .map(|(name, _)| *name)
        .collect()
}

/// Sorted union of the tags used by every registered record.
pub fn all_tags() -> Vec<&'static str> {
    INDEX
        .values()
        .flat_map(|record| record.tags.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn total_entries() -> usize {
    INDEX.len()
}
