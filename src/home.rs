//! Home page listing of recent posts.
//!
//! Shapes already loaded post records into the cards the home page shows:
//! newest first, limited, with display dates and empty fallbacks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Heading shown above the recent posts.
pub const RECENT_POSTS_TITLE: &str = "Postagens recentes";

/// Number of posts listed on the home page.
pub const RECENT_POSTS_LIMIT: usize = 5;

/// A post record as loaded from content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PostNode {
    pub id: String,
    pub excerpt: Option<String>,
    pub frontmatter: Option<Frontmatter>,
}

/// Post frontmatter. Every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Frontmatter {
    /// ISO 8601 date, e.g. "2024-03-09"
    pub date: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// A card on the home page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PostCard {
    pub id: String,
    /// "DD-MM-YYYY", or the raw value if it is not an ISO date
    pub date: Option<String>,
    pub excerpt: String,
    pub slug: String,
    pub title: String,
    pub tags: Vec<String>,
}

impl From<PostNode> for PostCard {
    fn from(node: PostNode) -> Self {
        let frontmatter = node.frontmatter.unwrap_or_default();
        Self {
            id: node.id,
            date: frontmatter.date.as_deref().map(format_date),
            excerpt: node.excerpt.unwrap_or_default(),
            slug: frontmatter.slug.unwrap_or_default(),
            title: frontmatter.title.unwrap_or_default(),
            tags: frontmatter.tags.unwrap_or_default(),
        }
    }
}

/// Parse post nodes from a JSON array.
pub fn parse_posts(content: &str) -> serde_json::Result<Vec<PostNode>> {
    serde_json::from_str(content)
}

/// The `limit` most recent posts as cards.
pub fn recent_posts(mut nodes: Vec<PostNode>, limit: usize) -> Vec<PostCard> {
    nodes.sort_by(|a, b| {
        let (a, b) = (a.frontmatter.as_ref(), b.frontmatter.as_ref());
        compare_by_date(
            a.and_then(|f| f.date.as_deref()),
            b.and_then(|f| f.date.as_deref()),
            a.and_then(|f| f.title.as_deref()).unwrap_or(""),
            b.and_then(|f| f.title.as_deref()).unwrap_or(""),
        )
    });
    nodes.into_iter().take(limit).map(PostCard::from).collect()
}

/// Order newest first; dated before undated; ties by title.
///
/// Dates compare as calendar dates; the raw strings are compared only when
/// either side does not parse.
fn compare_by_date(a_date: Option<&str>, b_date: Option<&str>, a_title: &str, b_title: &str) -> Ordering {
    match (a_date, b_date) {
        (Some(a), Some(b)) => {
            let by_date = match (parse_date(a), parse_date(b)) {
                (Some(a), Some(b)) => b.cmp(&a),
                _ => b.cmp(a),
            };
            by_date.then_with(|| a_title.cmp(b_title))
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a_title.cmp(b_title),
    }
}

/// Date part of "2024-03-09", "2024-3-9" or "2024-03-09T10:00:00Z".
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let ymd = raw.split_once('T').map_or(raw, |(date, _)| date);
    NaiveDate::parse_from_str(ymd.trim(), "%Y-%m-%d").ok()
}

/// "2024-03-09" or "2024-03-09T10:00:00Z" → "09-03-2024".
fn format_date(raw: &str) -> String {
    parse_date(raw)
        .map(|date| date.format("%d-%m-%Y").to_string())
        .unwrap_or_else(|| raw.to_owned())
}
