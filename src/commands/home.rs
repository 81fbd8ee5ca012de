//! `parlandim home`: print the recent post cards.

use crate::home::{RECENT_POSTS_TITLE, parse_posts, recent_posts};
use crate::log;
use anyhow::{Context, Result};
use std::{fs, path::Path};

pub fn print_home(posts: &Path, limit: usize) -> Result<()> {
    let content = fs::read_to_string(posts)
        .with_context(|| format!("failed to read posts `{}`", posts.display()))?;
    let nodes = parse_posts(&content)
        .with_context(|| format!("invalid posts in `{}`", posts.display()))?;

    let total = nodes.len();
    let cards = recent_posts(nodes, limit);
    log!("home"; "{RECENT_POSTS_TITLE}: {} of {total} posts", cards.len());

    println!("{}", serde_json::to_string_pretty(&cards)?);
    Ok(())
}
