
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::errors::SeqFetchError;

/// A value we want out of an XML document, always the first match in document order
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum XmlTarget {
    /// Text content of the first element with this tag
    Text(&'static str),
    /// Value of an attribute on the first element with this tag
    Attribute(&'static str, &'static str)
}

/// Scans an XML document once and returns the first value found for each target, in the same order as `targets`.
/// This is the equivalent of a list of `.//tag` lookups.
/// # Arguments
/// * `xml` - the full document
/// * `targets` - the values to collect
/// # Errors
/// * if the document is not well-formed XML, reported as `MalformedResponse`
pub fn collect_first_values(xml: &str, targets: &[XmlTarget]) -> Result<Vec<Option<String>>, SeqFetchError> {
    let mut values: Vec<Option<String>> = vec![None; targets.len()];
    let mut capturing: Option<usize> = None;

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    loop {
        let event = reader.read_event()
            .map_err(|e| SeqFetchError::MalformedResponse(
                format!("XML error at position {}: {e}", reader.error_position())
            ))?;

        match event {
            Event::Start(element) => {
                // a child element before any text means the pending target has no text of its own
                resolve_empty(&mut capturing, &mut values);
                capturing = scan_element(&element, targets, &mut values, false)?;
            },
            Event::Empty(element) => {
                resolve_empty(&mut capturing, &mut values);
                scan_element(&element, targets, &mut values, true)?;
            },
            Event::Text(text) => {
                if let Some(index) = capturing.take() {
                    let value = text.unescape()
                        .map_err(|e| SeqFetchError::MalformedResponse(format!("bad text for {:?}: {e}", targets[index])))?;
                    values[index] = Some(value.into_owned());
                }
            },
            Event::End(_) => {
                // element closed without text
                resolve_empty(&mut capturing, &mut values);
            },
            Event::Eof => break,
            _ => {}
        }

        if values.iter().all(|v| v.is_some()) {
            break;
        }
    }

    Ok(values)
}

/// The first matching element had no text, which still counts as its value; later matches are ignored
fn resolve_empty(capturing: &mut Option<usize>, values: &mut [Option<String>]) {
    if let Some(index) = capturing.take() {
        values[index] = Some(String::new());
    }
}

/// Checks an opening tag against every unfilled target, fills attribute targets directly.
/// Self-closing matches resolve text targets to an empty string.
/// Returns the index of a text target that should capture the next text event.
fn scan_element(element: &BytesStart, targets: &[XmlTarget], values: &mut [Option<String>], is_empty: bool) -> Result<Option<usize>, SeqFetchError> {
    let name = element.name();
    let mut capture = None;
    for (index, target) in targets.iter().enumerate() {
        if values[index].is_some() {
            continue;
        }

        match *target {
            XmlTarget::Text(tag) => {
                if name.as_ref() == tag.as_bytes() {
                    if is_empty {
                        values[index] = Some(String::new());
                    } else if capture.is_none() {
                        capture = Some(index);
                    }
                }
            },
            XmlTarget::Attribute(tag, attribute) => {
                if name.as_ref() == tag.as_bytes() {
                    let opt_attr = element.try_get_attribute(attribute)
                        .map_err(|e| SeqFetchError::MalformedResponse(format!("bad attributes on <{tag}>: {e}")))?;
                    if let Some(attr) = opt_attr {
                        let value = attr.unescape_value()
                            .map_err(|e| SeqFetchError::MalformedResponse(format!("bad {attribute} on <{tag}>: {e}")))?;
                        values[index] = Some(value.into_owned());
                    }
                }
            }
        }
    }
    Ok(capture)
}
