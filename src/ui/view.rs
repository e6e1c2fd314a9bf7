//! How history entries are shown.
//!
//! Stored expressions are untrusted as far as markup goes, so everything that
//! reaches the list is escaped first.

use std::fmt::Write;

/// Labels longer than this (in characters) are cut short
pub const LABEL_MAX: usize = 25;
const ELLIPSIS: &str = "...";

/// One clickable entry in the history list
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItem {
    pub index: usize,
    /// the escaped, possibly shortened, expression
    pub label: String,
    /// the escaped full expression, shown as a tooltip
    pub title: String,
}

impl HistoryItem {
    pub fn new(index: usize, expression: &str) -> Self {
        Self {
            index,
            label: escape_html(&truncate(expression, LABEL_MAX)),
            title: escape_html(expression),
        }
    }
}

pub fn items(entries: &[String]) -> Vec<HistoryItem> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| HistoryItem::new(i, e))
        .collect()
}

/// Keeps the first `max` characters, marking the cut with an ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((pos, _)) => format!("{}{}", &s[..pos], ELLIPSIS),
        None => s.to_string(),
    }
}

pub fn escape_html(s: &str) -> String {
    let mut buf = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' => buf.push_str("&quot;"),
            '\'' => buf.push_str("&#39;"),
            ch => buf.push(ch),
        }
    }
    buf
}

/// The markup for the history list
pub fn render_html(items: &[HistoryItem]) -> String {
    if items.is_empty() {
        return r#"<p class="history-empty">No history yet</p>"#.to_string();
    }

    let mut buf = String::from(r#"<ul class="history-list" role="list">"#);
    for item in items {
        let _ = write!(
            buf,
            r#"<li><button type="button" class="history-item" data-index="{}" title="{}">{}</button></li>"#,
            item.index, item.title, item.label
        );
    }
    buf.push_str("</ul>");
    buf
}
