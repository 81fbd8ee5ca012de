//! Document head tags for resolved metadata.
//!
//! Produces the `<title>`, description, Twitter card and Open Graph tags
//! in a fixed order. Twitter tags are bound with `name=`, Open Graph tags
//! with `property=`.

use super::resolve::ResolvedMetadata;
use crate::utils::xml::{self, XmlWriter};
use anyhow::Result;

pub const TWITTER_CARD: &str = "summary_large_image";
pub const OG_IMAGE_WIDTH: &str = "1200";
pub const OG_IMAGE_HEIGHT: &str = "630";
pub const OG_TYPE: &str = "website";
pub const OG_LOCALE: &str = "pt_BR";

/// Attribute a `<meta>` tag is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    Name,
    Property,
}

impl MetaKey {
    pub const fn attr(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// A single head tag binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    Meta {
        key: MetaKey,
        name: &'static str,
        content: String,
    },
}

impl HeadTag {
    fn name(name: &'static str, content: &str) -> Self {
        Self::Meta {
            key: MetaKey::Name,
            name,
            content: content.to_owned(),
        }
    }

    fn property(name: &'static str, content: &str) -> Self {
        Self::Meta {
            key: MetaKey::Property,
            name,
            content: content.to_owned(),
        }
    }

    fn write(&self, writer: &mut XmlWriter) -> Result<()> {
        match self {
            Self::Title(title) => xml::write_text_element(writer, "title", title),
            Self::Meta { key, name, content } => xml::write_empty_elem(
                writer,
                "meta",
                &[(key.attr(), *name), ("content", content.as_str())],
            ),
        }
    }
}

/// All head tags for a metadata record, in output order.
pub fn head_tags(meta: &ResolvedMetadata) -> Vec<HeadTag> {
    vec![
        HeadTag::Title(meta.title.clone()),
        HeadTag::name("description", &meta.description),
        HeadTag::name("image", &meta.image),
        // Twitter card
        HeadTag::name("twitter:card", TWITTER_CARD),
        HeadTag::name("twitter:title", &meta.title),
        HeadTag::name("twitter:url", &meta.url),
        HeadTag::name("twitter:description", &meta.description),
        HeadTag::name("twitter:image", &meta.image),
        HeadTag::name("twitter:creator", &meta.twitter_username),
        // Open Graph
        HeadTag::property("og:title", &meta.title),
        HeadTag::property("og:url", &meta.url),
        HeadTag::property("og:description", &meta.description),
        HeadTag::property("og:image", &meta.image),
        HeadTag::property("og:image:width", OG_IMAGE_WIDTH),
        HeadTag::property("og:image:height", OG_IMAGE_HEIGHT),
        HeadTag::property("og:type", OG_TYPE),
        HeadTag::property("og:locale", OG_LOCALE),
        HeadTag::property("og:site_name", &meta.title),
    ]
}

/// Render the head tags as HTML, one tag per line.
///
/// `extra` holds trusted raw HTML appended after the generated tags.
pub fn render_head(meta: &ResolvedMetadata, extra: &[String]) -> Result<String> {
    let mut writer = xml::create_xml_writer();

    for tag in head_tags(meta) {
        tag.write(&mut writer)?;
        xml::write_raw(&mut writer, "\n")?;
    }
    for raw in extra {
        xml::write_raw(&mut writer, raw)?;
        xml::write_raw(&mut writer, "\n")?;
    }

    xml::into_string(writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResolvedMetadata {
        ResolvedMetadata {
            title: "Parlandim<dev> - Home".into(),
            description: "Blog sobre desenvolvimento".into(),
            url: "https://parlandim.dev/".into(),
            twitter_username: "@parlandim".into(),
            image: "https://parlandim.dev/og.png".into(),
        }
    }

    fn content_of<'a>(tags: &'a [HeadTag], wanted: &str) -> Option<&'a str> {
        tags.iter().find_map(|tag| match tag {
            HeadTag::Meta { name, content, .. } if *name == wanted => Some(content.as_str()),
            _ => None,
        })
    }

    #[test]
    fn test_head_tags_bindings() {
        let tags = head_tags(&sample());

        assert_eq!(tags.len(), 18);
        assert_eq!(tags[0], HeadTag::Title("Parlandim<dev> - Home".into()));
        assert_eq!(content_of(&tags, "twitter:card"), Some("summary_large_image"));
        assert_eq!(content_of(&tags, "twitter:creator"), Some("@parlandim"));
        assert_eq!(content_of(&tags, "og:image:width"), Some("1200"));
        assert_eq!(content_of(&tags, "og:image:height"), Some("630"));
        assert_eq!(content_of(&tags, "og:type"), Some("website"));
        assert_eq!(content_of(&tags, "og:locale"), Some("pt_BR"));
        assert_eq!(content_of(&tags, "og:site_name"), Some("Parlandim<dev> - Home"));
        assert_eq!(content_of(&tags, "og:url"), Some("https://parlandim.dev/"));
    }

    #[test]
    fn test_head_tags_key_attributes() {
        for tag in head_tags(&sample()) {
            if let HeadTag::Meta { key, name, .. } = tag {
                let expected = if name.starts_with("og:") {
                    MetaKey::Property
                } else {
                    MetaKey::Name
                };
                assert_eq!(key, expected, "{name}");
            }
        }
    }

    #[test]
    fn test_render_head_escapes_title() {
        let html = render_head(&sample(), &[]).unwrap();

        assert!(html.starts_with("<title>Parlandim&lt;dev&gt; - Home</title>\n"));
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image"/>"#));
        assert!(html.contains(r#"<meta property="og:locale" content="pt_BR"/>"#));
        assert_eq!(html.lines().count(), 18);
    }

    #[test]
    fn test_render_head_empty_metadata() {
        let html = render_head(&ResolvedMetadata::default(), &[]).unwrap();

        assert!(html.starts_with("<title></title>\n"));
        assert!(html.contains(r#"<meta name="image" content=""/>"#));
        // constants survive an empty record
        assert!(html.contains(r#"<meta property="og:image:width" content="1200"/>"#));
    }

    #[test]
    fn test_render_head_appends_raw_elements() {
        let extra = vec![r#"<link rel="canonical" href="https://parlandim.dev/">"#.to_string()];
        let html = render_head(&sample(), &extra).unwrap();

        assert!(html.ends_with("<link rel=\"canonical\" href=\"https://parlandim.dev/\">\n"));
        assert_eq!(html.lines().count(), 19);
    }
}
