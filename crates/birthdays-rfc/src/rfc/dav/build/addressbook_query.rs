//! `addressbook-query` REPORT body serialization.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::error::RfcResult;
use crate::rfc::dav::{CARDDAV_NAMESPACE, DAV_NAMESPACE};

/// vCard properties requested from the server; everything the birthday
/// extractor looks at.
pub const BIRTHDAY_CARD_PROPERTIES: [&str; 4] = ["UID", "N", "FN", "BDAY"];

/// Builds the body of an `addressbook-query` REPORT asking for the `ETag`
/// and a trimmed-down `address-data` of every card in the collection.
///
/// ## Errors
/// Returns an error if XML writing fails or the output is not valid UTF-8.
pub fn addressbook_query_body() -> RfcResult<String> {
    let mut writer = Writer::new(Vec::new());

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("card:addressbook-query");
    root.push_attribute(("xmlns:d", DAV_NAMESPACE));
    root.push_attribute(("xmlns:card", CARDDAV_NAMESPACE));
    writer.write_event(Event::Start(root))?;

    writer.write_event(Event::Start(BytesStart::new("d:prop")))?;
    writer.write_event(Event::Empty(BytesStart::new("d:getetag")))?;

    writer.write_event(Event::Start(BytesStart::new("card:address-data")))?;
    for name in BIRTHDAY_CARD_PROPERTIES {
        let mut prop = BytesStart::new("card:prop");
        prop.push_attribute(("name", name));
        writer.write_event(Event::Empty(prop))?;
    }
    writer.write_event(Event::End(BytesEnd::new("card:address-data")))?;

    writer.write_event(Event::End(BytesEnd::new("d:prop")))?;
    writer.write_event(Event::End(BytesEnd::new("card:addressbook-query")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}
