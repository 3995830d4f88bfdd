use indexmap::IndexMap;
use intlxml_domain::model::{ATTRIBUTE_KEY, Node, TEXT_KEY};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;

/// Malformed document, with the 1-based position where parsing stopped.
#[derive(Debug, Error)]
#[error("{kind} at line {line}, column {col}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: u32,
    pub col: u32,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
    #[error("document has no root element")]
    NoRoot,
    #[error("unexpected second root element <{0}>")]
    MultipleRoots(String),
    #[error("text outside the root element")]
    TextOutsideRoot,
    #[error("unclosed element <{0}>")]
    Unclosed(String),
}

/// Element under construction.
#[derive(Default)]
struct Frame {
    name: String,
    attributes: IndexMap<String, Node>,
    children: IndexMap<String, Vec<Node>>,
    text: String,
    cdata: bool,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> Result<Self, quick_xml::Error> {
        let mut frame = Frame {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            ..Frame::default()
        };
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            frame.attributes.insert(key, Node::Leaf(value));
        }
        Ok(frame)
    }

    /// Text-only (or empty) elements collapse to a leaf; whitespace-only text next to
    /// attributes or children is dropped unless it came from CDATA.
    fn finish(self) -> (String, Node) {
        if self.attributes.is_empty() && self.children.is_empty() {
            return (self.name, Node::Leaf(self.text));
        }

        let mut entries = IndexMap::new();
        if self.cdata || !self.text.trim().is_empty() {
            entries.insert(TEXT_KEY.to_string(), Node::Leaf(self.text));
        }
        if !self.attributes.is_empty() {
            entries.insert(ATTRIBUTE_KEY.to_string(), Node::Mapping(self.attributes));
        }
        for (tag, nodes) in self.children {
            entries.insert(tag, Node::Sequence(nodes));
        }
        (self.name, Node::Mapping(entries))
    }
}

/// Parse XML text into a document tree rooted at `{ <root tag>: <root element> }`.
///
/// Repeated child tags are grouped into sequences under the tag name, attributes sit under
/// `$`, and mixed text is concatenated under `_`. Comments, processing instructions and the
/// doctype are dropped.
pub fn parse_document(text: &str) -> Result<Node, ParseError> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<(String, Node)> = None;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(err) => return Err(error_at(text, reader.error_position(), err.into())),
        };

        match event {
            Event::Start(start) => {
                check_single_root(text, &reader, &stack, &root, &start)?;
                let frame = Frame::open(&start)
                    .map_err(|e| error_at(text, reader.buffer_position(), e.into()))?;
                stack.push(frame);
            }
            Event::Empty(start) => {
                check_single_root(text, &reader, &stack, &root, &start)?;
                let frame = Frame::open(&start)
                    .map_err(|e| error_at(text, reader.buffer_position(), e.into()))?;
                attach(&mut stack, &mut root, frame.finish());
            }
            Event::End(_) => {
                // End names are checked by the reader; an unmatched end tag is an error there.
                if let Some(frame) = stack.pop() {
                    attach(&mut stack, &mut root, frame.finish());
                }
            }
            Event::Text(t) => match stack.last_mut() {
                Some(frame) => {
                    let unescaped = t
                        .unescape()
                        .map_err(|e| error_at(text, reader.buffer_position(), e.into()))?;
                    frame.text.push_str(&unescaped);
                }
                None => {
                    if t.iter().any(|b| !b.is_ascii_whitespace()) {
                        return Err(error_at(
                            text,
                            reader.buffer_position(),
                            ParseErrorKind::TextOutsideRoot,
                        ));
                    }
                }
            },
            Event::CData(c) => match stack.last_mut() {
                Some(frame) => {
                    frame.text.push_str(&String::from_utf8_lossy(&c));
                    frame.cdata = true;
                }
                None => {
                    return Err(error_at(
                        text,
                        reader.buffer_position(),
                        ParseErrorKind::TextOutsideRoot,
                    ));
                }
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(error_at(
            text,
            reader.buffer_position(),
            ParseErrorKind::Unclosed(open.name),
        ));
    }

    match root {
        Some((name, node)) => Ok(Node::mapping([(name, node)])),
        None => Err(error_at(
            text,
            reader.buffer_position(),
            ParseErrorKind::NoRoot,
        )),
    }
}

fn check_single_root(
    text: &str,
    reader: &Reader<&[u8]>,
    stack: &[Frame],
    root: &Option<(String, Node)>,
    start: &BytesStart<'_>,
) -> Result<(), ParseError> {
    if stack.is_empty() && root.is_some() {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        return Err(error_at(
            text,
            reader.buffer_position(),
            ParseErrorKind::MultipleRoots(name),
        ));
    }
    Ok(())
}

fn attach(stack: &mut [Frame], root: &mut Option<(String, Node)>, (name, node): (String, Node)) {
    match stack.last_mut() {
        Some(parent) => parent.children.entry(name).or_default().push(node),
        None => *root = Some((name, node)),
    }
}

fn error_at(text: &str, position: u64, kind: ParseErrorKind) -> ParseError {
    let (line, col) = line_col(text, position);
    ParseError { kind, line, col }
}

/// 1-based line and column (in characters) of a byte offset.
fn line_col(text: &str, position: u64) -> (u32, u32) {
    let bytes = text.as_bytes();
    let end = usize::try_from(position).unwrap_or(bytes.len()).min(bytes.len());
    let prefix = &bytes[..end];

    let line = prefix.iter().filter(|b| **b == b'\n').count() + 1;
    let line_start = prefix
        .iter()
        .rposition(|b| *b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    let col = prefix[line_start..]
        .iter()
        .filter(|b| (**b & 0xC0) != 0x80)
        .count()
        + 1;

    (saturating_u32(line), saturating_u32(col))
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
