//! `[site]` section configuration.
//!
//! Site-wide defaults used for SEO metadata.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in parlandim.toml - site-wide SEO defaults.
///
/// Every field may be omitted and then reads as an empty string.
///
/// # Example
/// ```toml
/// [site]
/// title = "Parlandim<dev>"
/// description = "Blog sobre desenvolvimento"
/// site_url = "https://parlandim.dev"
/// twitter_username = "@parlandim"
/// image = "/static/og-image.png"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Default document title, used when a page sets none.
    pub title: String,

    /// Default description for `description`, `og:description` and twitter tags.
    pub description: String,

    /// Absolute base URL, without trailing slash.
    pub site_url: String,

    /// Value of `twitter:creator`.
    pub twitter_username: String,

    /// Path of the social sharing image, joined to `site_url`.
    #[serde(default = "defaults::site::image")]
    #[educe(Default = defaults::site::image())]
    pub image: Option<String>,
}
