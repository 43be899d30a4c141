/// Minimal XML extraction helpers (very minimal parser).
///
/// The registry returns flat, well-formed XML with a fixed schema, so fields
/// are pulled out with targeted string scans rather than a full XML parser.
/// Tag matching is boundary-aware: looking for `Err` will not match
/// `ErrCount`.

/// Locate the next `<tag ...>` element at or after `from`, returning the full
/// element slice (opening tag through matching close, or the self-closing
/// tag) and the offset just past it.
fn next_element<'a>(xml: &'a str, tag: &str, from: usize) -> Option<(&'a str, usize)> {
    let open = format!("<{}", tag);
    let close = format!("</{}>", tag);
    let mut search = from;

    while let Some(rel) = xml[search..].find(&open) {
        let start = search + rel;
        // Reject prefix matches like <ErrCount> when looking for <Err>.
        match xml.as_bytes().get(start + open.len()) {
            Some(b'>') | Some(b' ') | Some(b'/') | Some(b'\t') | Some(b'\r') | Some(b'\n') => {}
            _ => {
                search = start + open.len();
                continue;
            }
        }
        let gt = start + xml[start..].find('>')?;
        if xml[start..gt].ends_with('/') {
            return Some((&xml[start..gt + 1], gt + 1));
        }
        let end = gt + 1 + xml[gt + 1..].find(&close)?;
        return Some((&xml[start..end + close.len()], end + close.len()));
    }
    None
}

/// First `<tag>` element in the document, full slice.
pub fn element<'a>(xml: &'a str, tag: &str) -> Option<&'a str> {
    next_element(xml, tag, 0).map(|(e, _)| e)
}

/// All `<tag>` elements in document order, full slices.
pub fn elements<'a>(xml: &'a str, tag: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut from = 0;
    while let Some((e, next)) = next_element(xml, tag, from) {
        out.push(e);
        from = next;
    }
    out
}

/// Text between the opening and closing tags of an element slice.
pub fn inner(element: &str) -> &str {
    let Some(gt) = element.find('>') else {
        return "";
    };
    if element.ends_with("/>") {
        return "";
    }
    match element.rfind("</") {
        Some(c) if c > gt => &element[gt + 1..c],
        _ => "",
    }
}

/// Trimmed, unescaped text content of the first `<tag>` in `xml`.
pub fn tag_text(xml: &str, tag: &str) -> Option<String> {
    element(xml, tag).map(|e| unescape(inner(e).trim()))
}

/// Attribute value from an element or tag fragment.
pub fn attr(fragment: &str, name: &str) -> Option<String> {
    let needle = format!("{}=\"", name);
    let start = fragment.find(&needle)? + needle.len();
    let end = fragment[start..].find('"')?;
    Some(unescape(&fragment[start..start + end]))
}

/// Decode the five predefined XML entities.
pub fn unescape(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_text_basic() {
        let xml = "<interface-response><RRPCode>200</RRPCode></interface-response>";
        assert_eq!(tag_text(xml, "RRPCode").as_deref(), Some("200"));
        assert_eq!(tag_text(xml, "OrderID"), None);
    }

    #[test]
    fn tag_boundary_not_prefix() {
        let xml = "<ErrCount>2</ErrCount><Err1>first</Err1><Err2>second</Err2>";
        assert_eq!(tag_text(xml, "ErrCount").as_deref(), Some("2"));
        assert_eq!(tag_text(xml, "Err1").as_deref(), Some("first"));
        // `Err` matches nothing even though three tags start with it.
        assert_eq!(tag_text(xml, "Err"), None);
    }

    #[test]
    fn repeated_elements_with_attrs() {
        let xml = r#"<contacts ContactType="Registrant"><FirstName>A</FirstName></contacts>
                     <contacts ContactType="Tech"><FirstName>B</FirstName></contacts>"#;
        let found = elements(xml, "contacts");
        assert_eq!(found.len(), 2);
        assert_eq!(attr(found[0], "ContactType").as_deref(), Some("Registrant"));
        assert_eq!(tag_text(found[1], "FirstName").as_deref(), Some("B"));
    }

    #[test]
    fn self_closing_and_empty() {
        assert_eq!(tag_text("<Value/>", "Value").as_deref(), Some(""));
        assert_eq!(tag_text("<Value></Value>", "Value").as_deref(), Some(""));
    }

    #[test]
    fn entities_decoded() {
        let xml = "<RRPText>Johnson &amp; Sons &lt;test&gt;</RRPText>";
        assert_eq!(
            tag_text(xml, "RRPText").as_deref(),
            Some("Johnson & Sons <test>")
        );
    }

    #[test]
    fn wrapper_with_same_prefix() {
        let xml = "<Attributes><Attribute><ID>5</ID></Attribute></Attributes>";
        let attrs = elements(xml, "Attribute");
        assert_eq!(attrs.len(), 1);
        assert_eq!(tag_text(attrs[0], "ID").as_deref(), Some("5"));
    }
}
