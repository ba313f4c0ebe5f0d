// src/core/html.rs
// Narrow DOM query layer over `scraper`.
// The pipeline only ever asks: class membership, tag name, id prefix,
// first href, ordered children, visible text.

use scraper::{ElementRef, Html, Node};

use crate::error::ScheduleError;
use super::sanitize::normalize_ws;

/// Parse a page that is already in memory.
///
/// html5ever accepts anything, so "malformed" here means there is no markup
/// to speak of: a blank body or plain text without a single tag.
pub fn parse_page(doc: &str) -> Result<Html, ScheduleError> {
    if doc.trim().is_empty() {
        return Err(ScheduleError::MalformedMarkup(s!("empty document")));
    }
    if !doc.contains('<') {
        return Err(ScheduleError::MalformedMarkup(s!("no markup found")));
    }
    Ok(Html::parse_document(doc))
}

/// As `parse_page`, for raw response bytes.
pub fn parse_page_bytes(bytes: &[u8]) -> Result<Html, ScheduleError> {
    let doc = std::str::from_utf8(bytes).map_err(|e| {
        ScheduleError::MalformedMarkup(format!("invalid UTF-8 at byte {}", e.valid_up_to()))
    })?;
    parse_page(doc)
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

pub fn is_tag(el: ElementRef<'_>, tag: &str) -> bool {
    el.value().name().eq_ignore_ascii_case(tag)
}

/// Raw `class` attribute (all tokens, space separated), or "".
pub fn class_attr<'a>(el: ElementRef<'a>) -> &'a str {
    el.value().attr("class").unwrap_or("")
}

/// Immediate element children, in document order.
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children().filter_map(ElementRef::wrap)
}

/// `el` and everything below it, in document order.
pub fn descendant_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.descendants().filter_map(ElementRef::wrap)
}

/// First element (self included) carrying `class`.
pub fn find_by_class<'a>(root: ElementRef<'a>, class: &str) -> Option<ElementRef<'a>> {
    descendant_elements(root).find(|e| has_class(*e, class))
}

/// All strict descendants carrying `class`.
pub fn find_all_by_class<'a>(root: ElementRef<'a>, class: &str) -> Vec<ElementRef<'a>> {
    descendant_elements(root)
        .skip(1)
        .filter(|e| has_class(*e, class))
        .collect()
}

/// First element (self included) whose id starts with any of `prefixes`.
pub fn first_with_id_prefix<'a>(root: ElementRef<'a>, prefixes: &[&str]) -> Option<ElementRef<'a>> {
    descendant_elements(root).find(|e| {
        e.value()
            .id()
            .is_some_and(|id| prefixes.iter().any(|p| id.starts_with(p)))
    })
}

/// First non-empty `href` anywhere under `root`.
pub fn first_href(root: ElementRef<'_>) -> Option<String> {
    descendant_elements(root)
        .filter_map(|e| e.value().attr("href"))
        .map(str::trim)
        .find(|h| !h.is_empty())
        .map(String::from)
}

/// Visible text, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Visible text of `el` with every `<br>` turned into `\n`.
/// Attribute values never leak in; entities are already decoded by the parser.
pub fn text_with_breaks(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in el.descendants() {
        match node.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) if e.name().eq_ignore_ascii_case("br") => out.push('\n'),
            _ => {}
        }
    }
    out
}
