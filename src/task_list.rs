//! Task-list checkbox rewriting for markdown source.
//!
//! When the user taps a task-list checkbox the host gets the new state via
//! [`TaskListItemPressEvent`](crate::events::TaskListItemPressEvent). To keep
//! the markdown in sync, the matching `[ ]` / `[x]` marker is rewritten in
//! place; nothing else in the document is touched.

use regex::Regex;
use std::sync::LazyLock;

/// A list bullet (`-`, `*` or `+`) followed by a `[ ]`, `[x]` or `[X]` marker
/// at the start of a line. Group 1 is the indentation and bullet.
static TASK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]*[-*+][ \t]+)\[[ xX]\]")
        .expect("task marker regex is a compile-time constant and must be valid")
});

/// Number of task items in `markdown`.
pub fn task_count(markdown: &str) -> usize {
    TASK_PATTERN.find_iter(markdown).count()
}

/// Rewrite the marker of the `index`-th task item (0-based, document order).
///
/// An index outside the task range returns the input unchanged.
pub fn toggle_task_at_index(markdown: &str, index: usize, checked: bool) -> String {
    let Some(caps) = TASK_PATTERN.captures_iter(markdown).nth(index) else {
        log::debug!("task index {index} out of range; markdown left unchanged");
        return markdown.to_string();
    };
    let (Some(whole), Some(prefix)) = (caps.get(0), caps.get(1)) else {
        return markdown.to_string();
    };

    let marker = if checked { "[x]" } else { "[ ]" };
    let mut out = String::with_capacity(markdown.len());
    out.push_str(&markdown[..whole.start()]);
    out.push_str(prefix.as_str());
    out.push_str(marker);
    out.push_str(&markdown[whole.end()..]);
    out
}
