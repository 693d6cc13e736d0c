//! The skip set: entry names never copied from template to target.

/// Entry names excluded from materialization at any depth.
///
/// - `node_modules` — dependency cache; the install step recreates it.
/// - `.template.json` — per-template private metadata.
///
/// These names must match exactly; there is no glob or substring matching.
pub const SKIP_ENTRIES: &[&str] = &["node_modules", ".template.json"];

/// `true` if a directory entry with this file name must not be copied
/// (and, for directories, not recursed into).
pub fn is_skipped(name: &str) -> bool {
    SKIP_ENTRIES.contains(&name)
}
