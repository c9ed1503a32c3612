//! Multistatus response parsing.

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;

use crate::error::{RfcError, RfcResult};

/// Extracts the `address-data` payload of every `propstat` in a multistatus
/// response, in document order.
///
/// ## Summary
/// Yields one string per `propstat`. A `propstat` without `address-data`
/// (e.g. a 404 block for unsupported properties) yields an empty string,
/// which the birthday extractor treats as a card without a birthday. Element
/// names are matched by local name, so any namespace prefix is accepted.
///
/// ## Errors
/// Returns an error if the XML is malformed, the root element is not
/// `multistatus`, or an unknown entity is referenced.
pub fn parse_address_data(xml: &[u8]) -> RfcResult<Vec<String>> {
    let mut reader = Reader::from_reader(xml);

    let mut buf = Vec::new();
    let mut cards: Vec<String> = Vec::new();
    let mut current: Option<String> = None;
    let mut in_address_data = false;
    let mut seen_root = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let local_name = e.local_name();
                if !seen_root {
                    check_root(local_name.as_ref())?;
                    seen_root = true;
                }

                match local_name.as_ref() {
                    b"propstat" => current = Some(String::new()),
                    b"address-data" if current.is_some() => {
                        // Repeated address-data within one propstat: last one wins
                        current = Some(String::new());
                        in_address_data = true;
                    }
                    _ => {}
                }
            }
            Event::Empty(ref e) => {
                let local_name = e.local_name();
                if !seen_root {
                    check_root(local_name.as_ref())?;
                    seen_root = true;
                }

                if local_name.as_ref() == b"propstat" {
                    cards.push(String::new());
                }
            }
            Event::Text(ref e) => {
                if in_address_data && let Some(card) = current.as_mut() {
                    let decoded = reader.decoder().decode(e.as_ref())?;
                    card.push_str(&decoded);
                }
            }
            Event::CData(ref e) => {
                if in_address_data && let Some(card) = current.as_mut() {
                    card.push_str(std::str::from_utf8(e.as_ref())?);
                }
            }
            Event::GeneralRef(ref e) => {
                if in_address_data && let Some(card) = current.as_mut() {
                    if let Some(ch) = e.resolve_char_ref()? {
                        card.push(ch);
                    } else {
                        let name = reader.decoder().decode(e.as_ref())?;
                        let resolved = resolve_predefined_entity(&name).ok_or_else(|| {
                            RfcError::ParseError(format!("unknown entity: &{name};"))
                        })?;
                        card.push_str(resolved);
                    }
                }
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"address-data" => in_address_data = false,
                b"propstat" => {
                    if let Some(card) = current.take() {
                        cards.push(card);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(RfcError::ParseError(
            "missing required element: multistatus".to_string(),
        ));
    }

    tracing::trace!(count = cards.len(), "Parsed address-data from multistatus");

    Ok(cards)
}

fn check_root(local_name: &[u8]) -> RfcResult<()> {
    if local_name == b"multistatus" {
        Ok(())
    } else {
        Err(RfcError::ParseError(format!(
            "unexpected root element: {}",
            String::from_utf8_lossy(local_name)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CARDS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<d:multistatus xmlns:d="DAV:" xmlns:card="urn:ietf:params:xml:ns:carddav">
  <d:response>
    <d:href>/addressbooks/jane/contacts/1.vcf</d:href>
    <d:propstat>
      <d:prop>
        <d:getetag>"1"</d:getetag>
        <card:address-data>BEGIN:VCARD
FN:Jane Doe
BDAY:20030615
END:VCARD</card:address-data>
      </d:prop>
      <d:status>HTTP/1.1 200 OK</d:status>
    </d:propstat>
  </d:response>
  <d:response>
    <d:href>/addressbooks/jane/contacts/2.vcf</d:href>
    <d:propstat>
      <d:prop>
        <card:address-data>BEGIN:VCARD
FN:John Roe
END:VCARD</card:address-data>
      </d:prop>
      <d:status>HTTP/1.1 200 OK</d:status>
    </d:propstat>
  </d:response>
</d:multistatus>"#;

    #[test]
    fn extracts_cards_in_document_order() {
        let cards = parse_address_data(TWO_CARDS.as_bytes()).unwrap();

        assert_eq!(cards.len(), 2);
        assert!(cards[0].contains("FN:Jane Doe"));
        assert!(cards[0].contains("BDAY:20030615"));
        assert!(cards[1].contains("FN:John Roe"));
    }

    #[test]
    fn resolves_entities_and_cdata() {
        let xml = r#"<multistatus xmlns="DAV:"><response><propstat><prop>
<address-data xmlns="urn:ietf:params:xml:ns:carddav">FN:Tom &amp; Jerry&#13;
<![CDATA[BDAY:1940-02-10]]></address-data>
</prop></propstat></response></multistatus>"#;

        let cards = parse_address_data(xml.as_bytes()).unwrap();

        assert_eq!(cards, vec!["FN:Tom & Jerry\r\nBDAY:1940-02-10".to_string()]);
    }

    #[test]
    fn propstat_without_address_data_yields_empty_card() {
        let xml = r#"<D:multistatus xmlns:D="DAV:"><D:response>
<D:propstat><D:prop><D:getetag>"x"</D:getetag></D:prop></D:propstat>
<D:propstat/>
</D:response></D:multistatus>"#;

        let cards = parse_address_data(xml.as_bytes()).unwrap();

        assert_eq!(cards, vec![String::new(), String::new()]);
    }

    #[test]
    fn empty_multistatus_has_no_cards() {
        let cards = parse_address_data(br#"<d:multistatus xmlns:d="DAV:"/>"#).unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn wrong_root_is_rejected() {
        let result = parse_address_data(br#"<d:error xmlns:d="DAV:"><d:forbidden/></d:error>"#);
        assert!(matches!(result, Err(RfcError::ParseError(_))));
    }

    #[test]
    fn missing_root_is_rejected() {
        assert!(parse_address_data(b"").is_err());
    }

    #[test]
    fn malformed_xml_is_rejected() {
        let result = parse_address_data(b"<d:multistatus xmlns:d=\"DAV:\"><d:response></d:multistatus>");
        assert!(result.is_err());
    }
}
