//! Defensive field extraction from ECP XML responses.
//!
//! Every record is filled from a table of [`Field`]s. A missing element or attribute
//! leaves its slot empty and never stops the remaining fields from being read.

use super::{Error, Result};

use roxmltree::{Document, Node};

/// Where a field's value comes from, relative to the node being extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Source {
    /// Text content of the first child element with this name
    Text(&'static str),
    /// Attribute of the node itself
    Attribute(&'static str),
}

/// Maps one XML value onto one string slot of `T`
pub(crate) struct Field<T> {
    source: Source,
    max_len: Option<usize>,
    slot: fn(&mut T) -> &mut String,
}

impl<T> Field<T> {
    pub fn text(name: &'static str, max_len: usize, slot: fn(&mut T) -> &mut String) -> Self {
        Self {
            source: Source::Text(name),
            max_len: Some(max_len),
            slot,
        }
    }

    pub fn attr(name: &'static str, max_len: usize, slot: fn(&mut T) -> &mut String) -> Self {
        Self {
            source: Source::Attribute(name),
            max_len: Some(max_len),
            slot,
        }
    }

    /// Unbounded child text, for flags and numbers that are converted afterwards
    pub fn raw(name: &'static str, slot: fn(&mut T) -> &mut String) -> Self {
        Self {
            source: Source::Text(name),
            max_len: None,
            slot,
        }
    }

    fn read(&self, node: Node) -> Option<String> {
        match self.source {
            Source::Text(name) => node
                .children()
                .find(|child| child.is_element() && child.tag_name().name() == name)
                .map(content),
            Source::Attribute(name) => node.attribute(name).map(str::to_string),
        }
    }
}

/// Fill every slot named in `fields` from `node`.
///
/// Slots are cleared first, so a value absent from the XML ends up empty rather
/// than keeping whatever the target held before.
pub(crate) fn extract<T>(node: Node, target: &mut T, fields: &[Field<T>]) {
    for field in fields {
        let value = field.read(node);
        let slot = (field.slot)(&mut *target);
        slot.clear();

        if let Some(mut value) = value {
            if let Some(max_len) = field.max_len {
                truncate(&mut value, max_len);
            }
            *slot = value;
        }
    }
}

/// Concatenated text of all descendants
pub(crate) fn content(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Cut `value` down to at most `max_len` characters
pub(crate) fn truncate(value: &mut String, max_len: usize) {
    if let Some((idx, _)) = value.char_indices().nth(max_len) {
        value.truncate(idx);
    }
}

/// First child that is an element, skipping whitespace and comments
pub(crate) fn first_element<'a, 'input>(node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.is_element())
}

/// Parse `body` and hand its root element to `f`.
///
/// Fails with [`Error::Xml`] when the body does not parse and with
/// [`Error::EmptyResponse`] when the root has no child elements.
pub(crate) fn with_root<R, F>(body: &[u8], element: &'static str, f: F) -> Result<R>
where
    F: FnOnce(Node) -> R,
{
    let text = String::from_utf8_lossy(body);
    let doc = Document::parse(&text)?;
    let root = doc.root_element();

    if first_element(root).is_none() {
        return Err(Error::EmptyResponse(element));
    }

    Ok(f(root))
}

/// Leading decimal integer of `s` in the manner of `strtoul`: leading whitespace and
/// a `+` are skipped, parsing stops at the first non-digit and overflow saturates.
/// Anything without digits is 0.
pub(crate) fn leading_unsigned(s: &str) -> u64 {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    s.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

/// Signed counterpart of [`leading_unsigned`]
pub(crate) fn leading_signed(s: &str) -> i64 {
    let s = s.trim_start();
    match s.strip_prefix('-') {
        Some(rest) => match leading_unsigned(rest) {
            n if n > i64::MAX as u64 => i64::MIN,
            n => -(n as i64),
        },
        None => leading_unsigned(s).min(i64::MAX as u64) as i64,
    }
}

pub(crate) fn is_true(value: &str) -> bool {
    value == "true"
}
