//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parlandim<dev> blog front-end CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: parlandim.toml)
    #[arg(short = 'C', long, default_value = "parlandim.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Page-level SEO overrides
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Page title, rendered as "Parlandim<dev> - <title>"
    #[arg(short, long)]
    pub title: Option<String>,

    /// Page description (falls back to the site description)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Page pathname appended to the site url, e.g. "/posts/hello"
    #[arg(short, long)]
    pub pathname: Option<String>,

    /// Social image path overriding the site image
    #[arg(short, long)]
    pub image: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the document head tags of a page
    Head {
        #[command(flatten)]
        page: PageArgs,

        /// JSON file with site data (`site.siteMetadata`, `file.childImageSharp.fixed.src`),
        /// used instead of the `[site]` config section
        #[arg(long)]
        site_data: Option<PathBuf>,

        /// Trusted raw HTML appended after the generated tags
        #[arg(long = "raw")]
        raw: Vec<String>,
    },

    /// Show or toggle the persisted theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Print the home page's recent post cards as JSON
    Home {
        /// JSON file with an array of post nodes
        #[arg(long)]
        posts: PathBuf,

        /// Number of posts to list
        #[arg(short, long, default_value_t = crate::home::RECENT_POSTS_LIMIT)]
        limit: usize,
    },
}

/// Theme subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ThemeAction {
    /// Print the detected theme and the persisted value
    Show,
    /// Flip the theme and persist the new value
    Toggle,
}
