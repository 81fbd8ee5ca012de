//! `parlandim head`: print the document head of a page.

use crate::{
    cli::PageArgs,
    config::SiteConfig,
    log,
    seo::{PageOverride, SiteQuery, render_head, resolve},
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Resolve and print the head tags for one page.
///
/// Site data comes from `site_data` (JSON) when given, otherwise from the
/// `[site]` config section.
pub fn print_head(
    config: &SiteConfig,
    page: &PageArgs,
    site_data: Option<&Path>,
    raw: &[String],
) -> Result<()> {
    let site = load_site(config, site_data)?;
    let page = PageOverride {
        title: page.title.clone(),
        description: page.description.clone(),
        pathname: page.pathname.clone(),
        image_path: page.image.clone(),
    };

    let meta = resolve(&site, &page);
    if meta.url.is_empty() {
        log!("seo"; "no url for this page, og:url and twitter:url will be empty");
    }

    print!("{}", render_head(&meta, raw)?);
    Ok(())
}

fn load_site(config: &SiteConfig, site_data: Option<&Path>) -> Result<SiteQuery> {
    let Some(path) = site_data else {
        return Ok(SiteQuery::from_config(config));
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read site data `{}`", path.display()))?;
    SiteQuery::from_json(&content)
        .with_context(|| format!("invalid site data in `{}`", path.display()))
}
