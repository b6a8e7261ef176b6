//! Output formatting for CLI display
//!
//! This module provides utilities for formatting search results in the CLI,
//! and the label/value rows shared with the interactive detail view.

use crate::search::{Item, PageState};
use colored::Colorize;
use serde::Serialize;

/// Format one result row
///
/// Quiet mode prints only the id and full-resolution URL, tab separated,
/// for piping into other tools.
#[must_use]
pub fn item_line(index: usize, item: &Item, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", item.id, item.urls.full);
    }

    format!(
        "  {:>3}. {}  {} {}  {} {}",
        index + 1,
        item.title().bold(),
        "♥".red(),
        item.likes,
        "by".dimmed(),
        item.author.name.cyan()
    )
}

/// Header printed above each page of results
#[must_use]
pub fn page_header(query: &str, pages: PageState, total: u64) -> String {
    format!(
        "Page {}/{} · {} result(s) for \"{}\"",
        pages.current_page(),
        pages.total_pages(),
        total,
        query
    )
}

/// Label/value rows describing an item in detail
#[must_use]
pub fn detail_fields(item: &Item) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("Title", item.title().to_string()),
        ("Description", item.description_text().to_string()),
        ("Likes", item.likes.to_string()),
        (
            "Downloads",
            item.downloads
                .map_or_else(|| "n/a".to_string(), |d| d.to_string()),
        ),
        ("Photographer", photographer(item)),
    ];

    if let Some((w, h)) = item.dimensions() {
        fields.push(("Size", format!("{w}×{h}")));
    }
    if let Some(created) = item.created_at {
        fields.push(("Published", created.format("%Y-%m-%d").to_string()));
    }
    if let Some(profile) = &item.author.profile_url {
        fields.push(("Portfolio", profile.clone()));
    }
    fields.push(("Image", item.urls.regular.clone()));
    fields
}

/// Photographer name with `@username` when known
#[must_use]
pub fn photographer(item: &Item) -> String {
    match &item.author.username {
        Some(username) => format!("{} (@{username})", item.author.name),
        None => item.author.name.clone(),
    }
}

/// Machine-readable page of results
#[derive(Debug, Serialize)]
pub struct PageReport<'a> {
    pub query: &'a str,
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
    pub items: &'a [Item],
}

/// Serialize a page of results as a single JSON line
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn page_json(report: &PageReport<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}
