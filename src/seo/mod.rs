//! SEO metadata for the document head.
//!
//! [`resolve`] merges site defaults with page overrides,
//! [`render_head`] turns the result into `<title>`/`<meta>` tags.
//!
//! ```ignore
//! let site = SiteQuery::from_config(&cfg());
//! let meta = resolve(&site, &PageOverride::titled("Home"));
//! let html = render_head(&meta, &[])?;
//! ```

mod head;
mod resolve;
mod url;

pub use head::{HeadTag, MetaKey, head_tags, render_head};
pub use resolve::{BRAND_PREFIX, PageOverride, ResolvedMetadata, SiteQuery, resolve};
pub use url::construct_url;
