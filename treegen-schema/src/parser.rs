//! XML catalogue parser.
//!
//! Reads a catalogue document of the form
//!
//! ```xml
//! <catalogue>
//!     <node name="Ident">
//!         <field name="sym" type="Symbol"/>
//!     </node>
//!     <node name="Empty"/>
//! </catalogue>
//! ```
//!
//! into a [`Catalogue`]. Nodes and fields keep document order. Attribute
//! values are unescaped, so a generic type is written `List&lt;Tree&gt;`. An
//! attribute that is present but empty is accepted here and rejected later by
//! validation.

use crate::error::ParseError;
use crate::types::{Catalogue, TreeField, TreeNode};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parses a node catalogue from an XML string.
///
/// # Arguments
/// * `xml` - XML catalogue content
///
/// # Returns
/// Parsed catalogue or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, an element is unknown, or a
/// required attribute is missing.
pub fn parse_catalogue(xml: &str) -> Result<Catalogue, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut catalogue: Option<Catalogue> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "catalogue" if catalogue.is_none() => {
                        catalogue = Some(parse_nodes(&mut reader)?);
                    }
                    "catalogue" => {
                        return Err(ParseError::invalid_structure(
                            "Multiple catalogue elements found",
                        ));
                    }
                    other => return Err(ParseError::unknown_element(other, "document")),
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "catalogue" if catalogue.is_none() => catalogue = Some(Catalogue::new()),
                    "catalogue" => {
                        return Err(ParseError::invalid_structure(
                            "Multiple catalogue elements found",
                        ));
                    }
                    other => return Err(ParseError::unknown_element(other, "document")),
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    catalogue.ok_or_else(|| ParseError::invalid_structure("No catalogue element found"))
}

/// Parses the children of the catalogue element up to its end tag.
fn parse_nodes(reader: &mut Reader<&[u8]>) -> Result<Catalogue, ParseError> {
    let mut catalogue = Catalogue::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name != "node" {
                    return Err(ParseError::unknown_element(name, "catalogue"));
                }
                let mut node = TreeNode::new(required_attr(e, "node", "name")?);
                parse_fields(reader, &mut node)?;
                catalogue.add_node(node);
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name != "node" {
                    return Err(ParseError::unknown_element(name, "catalogue"));
                }
                catalogue.add_node(TreeNode::new(required_attr(e, "node", "name")?));
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::invalid_structure("Unterminated catalogue element"));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(catalogue)
}

/// Parses the field elements of a node up to the node's end tag.
fn parse_fields(reader: &mut Reader<&[u8]>, node: &mut TreeNode) -> Result<(), ParseError> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name != "field" {
                    return Err(ParseError::unknown_element(name, "node"));
                }
                node.add_field(parse_field(e)?);
                skip_element(reader)?;
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name != "field" {
                    return Err(ParseError::unknown_element(name, "node"));
                }
                node.add_field(parse_field(e)?);
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::invalid_structure(format!(
                    "Unterminated node element '{}'",
                    node.name
                )));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Parses a field element's attributes.
fn parse_field(e: &BytesStart<'_>) -> Result<TreeField, ParseError> {
    let name = required_attr(e, "field", "name")?;
    let type_name = required_attr(e, "field", "type")?;
    Ok(TreeField::new(name, type_name))
}

/// Reads a required attribute, allowing an empty value.
fn required_attr(e: &BytesStart<'_>, element: &str, attribute: &str) -> Result<String, ParseError> {
    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        if key == attribute {
            return Ok(attr.unescape_value()?.into_owned());
        }
    }
    Err(ParseError::missing_attr(element, attribute))
}

/// Skips the rest of the current element, including nested content.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}
