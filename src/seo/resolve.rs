//! SEO metadata resolution.
//!
//! Combines site-wide defaults, page overrides and the optional social
//! image asset into a [`ResolvedMetadata`] record.
//!
//! # Precedence
//!
//! ```text
//! title        page.title ? "Parlandim<dev> - {page.title}" : site.title : ""
//! description  page.description : site.description : ""
//! url          construct_url(site.site_url, page.pathname)
//! image        construct_url(site.site_url, page.image_path : file.childImageSharp.fixed.src)
//! ```
//!
//! Resolution is total: anything missing degrades to an empty string.

use super::url::construct_url;
use crate::{config::SiteConfig, log};
use serde::{Deserialize, Serialize};

/// Brand prefix of templated page titles.
pub const BRAND_PREFIX: &str = "Parlandim<dev>";

// ============================================================================
// Site Data
// ============================================================================

/// Site data available to the resolver.
///
/// Mirrors the shape of the site's static data query, where every level
/// may be absent:
///
/// ```json
/// {
///   "site": { "siteMetadata": { "title": "...", "siteUrl": "..." } },
///   "file": { "childImageSharp": { "fixed": { "src": "/static/og.png" } } }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteQuery {
    pub site: Option<SiteNode>,
    pub file: Option<ImageFile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteNode {
    pub site_metadata: Option<SiteMetadata>,
}

/// Site-wide SEO defaults. Missing fields read as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub site_url: Option<String>,
    pub twitter_username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageFile {
    pub child_image_sharp: Option<ImageSharp>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ImageSharp {
    pub fixed: Option<FixedImage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FixedImage {
    pub src: Option<String>,
}

impl SiteQuery {
    /// Build site data from the `[site]` config section.
    pub fn from_config(config: &SiteConfig) -> Self {
        let site = &config.site;
        Self {
            site: Some(SiteNode {
                site_metadata: Some(SiteMetadata {
                    title: Some(site.title.clone()),
                    description: Some(site.description.clone()),
                    site_url: Some(site.site_url.clone()),
                    twitter_username: Some(site.twitter_username.clone()),
                }),
            }),
            file: site.image.as_ref().map(|src| ImageFile {
                child_image_sharp: Some(ImageSharp {
                    fixed: Some(FixedImage {
                        src: Some(src.clone()),
                    }),
                }),
            }),
        }
    }

    /// Parse site data from JSON.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    fn metadata(&self) -> Option<&SiteMetadata> {
        self.site.as_ref()?.site_metadata.as_ref()
    }

    /// Source path of the social image, or `""` if any segment is missing.
    pub fn image_src(&self) -> &str {
        self.file
            .as_ref()
            .and_then(|file| file.child_image_sharp.as_ref())
            .and_then(|sharp| sharp.fixed.as_ref())
            .and_then(|fixed| fixed.src.as_deref())
            .unwrap_or("")
    }
}

/// Site defaults with every missing field flattened to `""`.
struct SiteDefaults<'a> {
    title: &'a str,
    description: &'a str,
    site_url: &'a str,
    twitter_username: &'a str,
}

impl<'a> SiteDefaults<'a> {
    fn from_query(query: &'a SiteQuery) -> Self {
        let meta = query.metadata();
        Self {
            title: or_empty(meta.map(|m| &m.title)),
            description: or_empty(meta.map(|m| &m.description)),
            site_url: or_empty(meta.map(|m| &m.site_url)),
            twitter_username: or_empty(meta.map(|m| &m.twitter_username)),
        }
    }
}

#[inline]
fn or_empty(value: Option<&Option<String>>) -> &str {
    value.and_then(|v| v.as_deref()).unwrap_or("")
}

// ============================================================================
// Page Overrides
// ============================================================================

/// Per-page overrides. `None` (or an empty string) means "use the site default".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PageOverride {
    pub title: Option<String>,
    pub description: Option<String>,
    pub pathname: Option<String>,
    pub image_path: Option<String>,
}

impl PageOverride {
    /// Page override with only a title, as most pages use it.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// `Some(s)` with `s` non-empty.
#[inline]
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// ============================================================================
// Resolution
// ============================================================================

/// Canonical metadata used to populate the document head.
///
/// Every field is a string; empty means "not available".
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMetadata {
    pub title: String,
    pub description: String,
    pub url: String,
    pub twitter_username: String,
    pub image: String,
}

/// Resolve page metadata against the site defaults.
///
/// Never fails. A missing social image is reported as a warning since it
/// usually means a build asset was not generated.
pub fn resolve(site: &SiteQuery, page: &PageOverride) -> ResolvedMetadata {
    let defaults = SiteDefaults::from_query(site);

    let title = match non_empty(&page.title) {
        Some(title) => format!("{BRAND_PREFIX} - {title}"),
        None => defaults.title.to_owned(),
    };

    let description = non_empty(&page.description)
        .unwrap_or(defaults.description)
        .to_owned();

    let image_src = non_empty(&page.image_path).unwrap_or_else(|| site.image_src());
    if image_src.is_empty() {
        log!("warn"; "no social image asset found, image tags will be empty");
    }

    ResolvedMetadata {
        title,
        description,
        url: construct_url(defaults.site_url, page.pathname.as_deref().unwrap_or("")),
        twitter_username: defaults.twitter_username.to_owned(),
        image: construct_url(defaults.site_url, image_src),
    }
}
