//! Minimal HTML element writers on top of `quick-xml`.
//!
//! Text and attribute values are escaped by `quick-xml`; raw fragments are
//! written verbatim and must come from trusted input.

use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{Cursor, Write};

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Create a writer over an in-memory buffer.
#[inline]
pub fn create_xml_writer() -> XmlWriter {
    Writer::new(Cursor::new(Vec::new()))
}

/// Consume the writer and return its content as a string.
pub fn into_string(writer: XmlWriter) -> Result<String> {
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Write a text element: `<tag>text</tag>`.
#[inline]
pub fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write an empty element with attributes: `<tag attr1="val1" ... />`.
#[inline]
pub fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Write a raw HTML fragment without escaping (trusted input).
#[inline]
pub fn write_raw(writer: &mut XmlWriter, raw: &str) -> Result<()> {
    writer.get_mut().write_all(raw.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_text_element_escapes() {
        let mut writer = create_xml_writer();
        write_text_element(&mut writer, "title", "a<b> & c").unwrap();
        assert_eq!(into_string(writer).unwrap(), "<title>a&lt;b&gt; &amp; c</title>");
    }

    #[test]
    fn test_write_empty_elem_attrs_in_order() {
        let mut writer = create_xml_writer();
        write_empty_elem(&mut writer, "meta", &[("name", "image"), ("content", "")]).unwrap();
        assert_eq!(into_string(writer).unwrap(), r#"<meta name="image" content=""/>"#);
    }

    #[test]
    fn test_write_raw_is_verbatim() {
        let mut writer = create_xml_writer();
        write_raw(&mut writer, "<link rel=\"icon\">").unwrap();
        assert_eq!(into_string(writer).unwrap(), "<link rel=\"icon\">");
    }
}
