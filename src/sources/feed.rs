//! Minimal RSS 2.0 / Atom entry reader.
//!
//! Only the fields the article source needs are collected. Parsing never
//! fails: a malformed document yields the entries completed before the error.

use quick_xml::events::attributes::Attributes;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub published: String,
    pub updated: String,
    pub summary: String,
    pub content: String,
}

impl FeedEntry {
    pub fn published_or_updated(&self) -> &str {
        if self.published.trim().is_empty() { &self.updated } else { &self.published }
    }

    pub fn summary_or_content(&self) -> &str {
        if self.summary.trim().is_empty() { &self.content } else { &self.summary }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
    Published,
    Updated,
    Summary,
    Content,
}

fn field_for(qname: &str) -> Option<Field> {
    match qname {
        "title" => Some(Field::Title),
        "link" => Some(Field::Link),
        "pubDate" | "published" | "dc:date" => Some(Field::Published),
        "updated" | "atom:updated" => Some(Field::Updated),
        "description" | "summary" => Some(Field::Summary),
        "content" | "content:encoded" => Some(Field::Content),
        _ => None,
    }
}

/// `href` of an Atom link, when it points at the human-readable page.
fn alternate_href(attrs: Attributes) -> Option<String> {
    let mut href = None;
    let mut alternate = true;
    for attr in attrs.flatten() {
        let val = String::from_utf8_lossy(&attr.value).to_string();
        match attr.key.as_ref() {
            b"href" => href = Some(val),
            b"rel" => alternate = val == "alternate",
            _ => {}
        }
    }
    href.filter(|h| alternate && !h.trim().is_empty())
}

struct FeedParser {
    entries: Vec<FeedEntry>,
    current: FeedEntry,
    in_entry: bool,
    // element names opened inside the current entry
    stack: Vec<String>,
    link_from_attr: bool,
}

impl FeedParser {
    fn new() -> Self {
        Self { entries: Vec::new(), current: FeedEntry::default(), in_entry: false, stack: Vec::new(), link_from_attr: false }
    }

    fn handle_start(&mut self, e: &BytesStart<'_>) {
        let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
        if !self.in_entry {
            if name == "item" || name == "entry" {
                self.in_entry = true;
                self.current = FeedEntry::default();
                self.stack.clear();
                self.link_from_attr = false;
            }
            return;
        }
        if self.stack.is_empty() && name == "link" {
            self.take_link_href(e);
        }
        self.stack.push(name);
    }

    fn handle_empty(&mut self, e: &BytesStart<'_>) {
        if self.in_entry && self.stack.is_empty() && e.name().as_ref() == b"link" {
            self.take_link_href(e);
        }
    }

    fn take_link_href(&mut self, e: &BytesStart<'_>) {
        if self.current.link.is_empty() {
            if let Some(href) = alternate_href(e.attributes()) {
                self.current.link = href;
                self.link_from_attr = true;
            }
        }
    }

    fn handle_text(&mut self, text: &str) {
        if !self.in_entry || self.stack.len() != 1 {
            return;
        }
        let Some(field) = field_for(&self.stack[0]) else { return };
        if field == Field::Link && self.link_from_attr {
            return;
        }
        let target = match field {
            Field::Title => &mut self.current.title,
            Field::Link => &mut self.current.link,
            Field::Published => &mut self.current.published,
            Field::Updated => &mut self.current.updated,
            Field::Summary => &mut self.current.summary,
            Field::Content => &mut self.current.content,
        };
        target.push_str(text);
    }

    fn handle_end(&mut self, name: &[u8]) {
        if !self.in_entry {
            return;
        }
        if self.stack.is_empty() {
            if name == b"item" || name == b"entry" {
                let finished = std::mem::take(&mut self.current);
                self.entries.push(trimmed(finished));
                self.in_entry = false;
            }
            return;
        }
        self.stack.pop();
    }
}

fn trimmed(mut e: FeedEntry) -> FeedEntry {
    for f in [&mut e.title, &mut e.link, &mut e.published, &mut e.updated, &mut e.summary, &mut e.content] {
        *f = f.trim().to_string();
    }
    e
}

/// Parse up to `limit` entries in document order.
pub fn parse_entries(xml: &str, limit: usize) -> Vec<FeedEntry> {
    if limit == 0 {
        return Vec::new();
    }
    let mut reader = Reader::from_str(xml);
    let mut parser = FeedParser::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => parser.handle_start(e),
            Ok(Event::Empty(ref e)) => parser.handle_empty(e),
            Ok(Event::Text(ref e)) => {
                let text = match e.unescape() {
                    Ok(t) => t.into_owned(),
                    Err(_) => String::from_utf8_lossy(e).to_string(),
                };
                parser.handle_text(&text);
            }
            Ok(Event::CData(ref e)) => parser.handle_text(&String::from_utf8_lossy(e)),
            Ok(Event::End(ref e)) => parser.handle_end(e.name().as_ref()),
            Ok(Event::Eof) => break,
            Err(e) => {
                tracing::warn!(
                    "malformed feed at byte {}: {}; keeping {} parsed entries",
                    reader.buffer_position(),
                    e,
                    parser.entries.len()
                );
                break;
            }
            _ => {}
        }
        if parser.entries.len() >= limit {
            break;
        }
    }

    parser.entries
}
