//! XML reading
//!
//! Builds the [`Element`] tree from source text by driving a quick-xml
//! event reader over an explicit open-element stack. This stage performs
//! no semantic validation: tag vocabulary and attribute checks happen in
//! the serializer. What it does enforce is well-formedness — matched tags,
//! exactly one root element, nothing but whitespace outside it — so the
//! rest of the pipeline can assume a sane tree.
//!
//! Text handling matches the common "first text run" model: an element's
//! `text` is the character data before its first child element. Trailing
//! text after a child is dropped, since no construct in the dialect reads
//! it.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::slate::document::Element;
use crate::slate::error::ConvertError;

/// Parse source text into a document tree.
///
/// Fails with [`ConvertError::MalformedDocument`] carrying the underlying
/// parser diagnostic on any well-formedness violation.
pub fn parse_document(source: &str) -> Result<Element, ConvertError> {
    // A byte-order mark is not content.
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut reader = Reader::from_str(source);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Err(e) => {
                return Err(ConvertError::MalformedDocument(format!(
                    "{} at byte {}",
                    e,
                    reader.buffer_position()
                )))
            }
            Ok(Event::Start(start)) => {
                if stack.is_empty() && root.is_some() {
                    return Err(junk_after_root());
                }
                stack.push(open_element(&start)?);
            }
            Ok(Event::Empty(start)) => {
                if stack.is_empty() && root.is_some() {
                    return Err(junk_after_root());
                }
                let element = open_element(&start)?;
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::End(_)) => {
                // Name mismatches and stray end tags already errored above.
                let Some(element) = stack.pop() else {
                    return Err(ConvertError::MalformedDocument(
                        "unmatched closing tag".to_string(),
                    ));
                };
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::Text(text)) => {
                let text = text.unescape().map_err(|e| {
                    ConvertError::MalformedDocument(e.to_string())
                })?;
                append_text(&mut stack, &root, &text)?;
            }
            Ok(Event::CData(data)) => {
                let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                append_text(&mut stack, &root, &text)?;
            }
            Ok(Event::Comment(_)) | Ok(Event::Decl(_)) | Ok(Event::PI(_))
            | Ok(Event::DocType(_)) => {}
            Ok(Event::Eof) => break,
        }
    }

    if let Some(open) = stack.last() {
        return Err(ConvertError::MalformedDocument(format!(
            "unexpected end of document: <{}> is never closed",
            open.tag
        )));
    }
    root.ok_or_else(|| ConvertError::MalformedDocument("no element found".to_string()))
}

fn junk_after_root() -> ConvertError {
    ConvertError::MalformedDocument("junk after document element".to_string())
}

/// Element for a start or empty tag, with its attributes unescaped in
/// source order.
fn open_element(start: &BytesStart) -> Result<Element, ConvertError> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(tag);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| {
            ConvertError::MalformedDocument(format!("bad attribute: {}", e))
        })?;
        let name = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| ConvertError::MalformedDocument(e.to_string()))?
            .into_owned();
        element.attributes.push((name, value));
    }
    Ok(element)
}

/// Hand a completed element to its parent, or make it the root.
fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

/// Character data goes to the open element's leading text run; outside any
/// element only whitespace is tolerated.
fn append_text(
    stack: &mut [Element],
    root: &Option<Element>,
    text: &str,
) -> Result<(), ConvertError> {
    match stack.last_mut() {
        Some(open) => {
            if open.children.is_empty() {
                match &mut open.text {
                    Some(existing) => existing.push_str(text),
                    None => open.text = Some(text.to_string()),
                }
            }
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None if root.is_none() => Err(ConvertError::MalformedDocument(
            "text before document element".to_string(),
        )),
        None => Err(junk_after_root()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_nested_elements_with_attributes() {
        let root = parse_document(
            r#"<config>
                 <const name="port" value="8080"/>
                 <dictionary><entry name="a" value="1"/></dictionary>
               </config>"#,
        )
        .unwrap();

        assert_eq!(root.tag, "config");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].tag, "const");
        assert_eq!(root.children[0].attribute("name"), Some("port"));
        assert_eq!(root.children[0].attribute("value"), Some("8080"));
        assert_eq!(root.children[1].children[0].tag, "entry");
    }

    #[test]
    fn test_text_is_the_run_before_the_first_child() {
        let root = parse_document("<comment> leading <x/> trailing </comment>").unwrap();
        assert_eq!(root.text.as_deref(), Some(" leading "));
    }

    #[test]
    fn test_entities_and_cdata_are_decoded() {
        let root = parse_document("<comment>a &amp; b</comment>").unwrap();
        assert_eq!(root.text.as_deref(), Some("a & b"));

        let root = parse_document("<comment><![CDATA[1 < 2]]></comment>").unwrap();
        assert_eq!(root.text.as_deref(), Some("1 < 2"));
    }

    #[test]
    fn test_prolog_and_comments_are_skipped() {
        let root = parse_document(
            "<?xml version=\"1.0\"?>\n<!-- authoring note -->\n<config/>",
        )
        .unwrap();
        assert_eq!(root.tag, "config");
    }

    #[test]
    fn test_mismatched_tags_are_malformed() {
        let err = parse_document("<a><b></a></b>").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedDocument(_)));
    }

    #[test]
    fn test_unclosed_element_is_malformed() {
        let err = parse_document("<a><b>").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedDocument(_)));
    }

    #[test]
    fn test_empty_input_is_malformed() {
        let err = parse_document("").unwrap_err();
        assert_eq!(
            err,
            ConvertError::MalformedDocument("no element found".to_string())
        );
    }

    #[test]
    fn test_second_root_element_is_malformed() {
        let err = parse_document("<a/><b/>").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedDocument(_)));
    }

    #[test]
    fn test_text_outside_the_root_is_malformed() {
        assert!(parse_document("junk <a/>").is_err());
        assert!(parse_document("<a/> junk").is_err());
        // Whitespace around the root is fine.
        assert!(parse_document("\n  <a/>\n").is_ok());
    }

    #[test]
    fn test_duplicate_attributes_are_malformed() {
        let err = parse_document(r#"<const name="a" name="b"/>"#).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedDocument(_)));
    }

    #[test]
    fn test_leading_bom_is_tolerated() {
        let root = parse_document("\u{feff}<config/>").unwrap();
        assert_eq!(root.tag, "config");
    }
}
