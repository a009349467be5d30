//! Template-aware YAML pretty-printer for parameterized trees.
//!
//! Placeholder scalars are written verbatim so `{{.NAME}}` survives unquoted, and range
//! templates are unrolled into bare `{{- range ..}}` / `{{- end}}` lines around a single
//! `- {{.}}` item.

use crate::error::ExportError;
use crate::node::{Node, Scalar, ScalarTag, RANGE_CLOSE, RANGE_OPEN_PREFIX};
use std::borrow::Cow;
use std::io::{self, Write};

const INDENT_STEP: usize = 2;

pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn render(&mut self, node: &Node) -> io::Result<()> {
        self.node(node, 0)
    }

    fn node(&mut self, node: &Node, indent: usize) -> io::Result<()> {
        match node {
            Node::Mapping(entries) if !entries.is_empty() => self.mapping(entries, indent),
            Node::Sequence(items) if node.is_template_sequence() => {
                self.template_sequence(items, indent)
            }
            Node::Sequence(items) if !items.is_empty() => self.sequence(items, indent),
            other => {
                self.pad(indent)?;
                writeln!(self.out, "{}", inline_text(other)?)
            }
        }
    }

    fn mapping(&mut self, entries: &[(String, Node)], indent: usize) -> io::Result<()> {
        for (key, value) in entries {
            self.pad(indent)?;
            write!(self.out, "{}:", key_text(key)?)?;
            self.value(value, indent)?;
        }
        Ok(())
    }

    // Writes what follows `key:`; nested collections go one step deeper than `indent`.
    fn value(&mut self, value: &Node, indent: usize) -> io::Result<()> {
        match value {
            Node::Sequence(items) if value.is_template_sequence() => {
                writeln!(self.out)?;
                self.template_sequence(items, indent + INDENT_STEP)
            }
            Node::Sequence(items) if !items.is_empty() => {
                writeln!(self.out)?;
                self.sequence(items, indent + INDENT_STEP)
            }
            Node::Mapping(entries) if !entries.is_empty() => {
                writeln!(self.out)?;
                self.mapping(entries, indent + INDENT_STEP)
            }
            other => writeln!(self.out, " {}", inline_text(other)?),
        }
    }

    fn sequence(&mut self, items: &[Node], indent: usize) -> io::Result<()> {
        for item in items {
            self.pad(indent)?;
            match item {
                Node::Mapping(entries) if !entries.is_empty() => {
                    write!(self.out, "- ")?;
                    self.item_mapping(entries, indent)?;
                }
                Node::Sequence(nested) if !nested.is_empty() => {
                    writeln!(self.out, "-")?;
                    self.node(item, indent + INDENT_STEP)?;
                }
                other => writeln!(self.out, "- {}", inline_text(other)?)?,
            }
        }
        Ok(())
    }

    // First key shares the dash line; the rest align under it.
    fn item_mapping(&mut self, entries: &[(String, Node)], indent: usize) -> io::Result<()> {
        for (index, (key, value)) in entries.iter().enumerate() {
            if index > 0 {
                self.pad(indent + INDENT_STEP)?;
            }
            write!(self.out, "{}:", key_text(key)?)?;
            self.value(value, indent + INDENT_STEP)?;
        }
        Ok(())
    }

    fn template_sequence(&mut self, items: &[Node], indent: usize) -> io::Result<()> {
        for item in items {
            self.pad(indent)?;
            let text = match item {
                Node::Scalar(scalar) => Cow::Borrowed(scalar.value.as_str()),
                other => inline_text(other)?,
            };
            if text.starts_with(RANGE_OPEN_PREFIX) || text.starts_with(RANGE_CLOSE) {
                writeln!(self.out, "{text}")?;
            } else {
                writeln!(self.out, "- {text}")?;
            }
        }
        Ok(())
    }

    fn pad(&mut self, indent: usize) -> io::Result<()> {
        write!(self.out, "{:indent$}", "")
    }
}

pub fn render_to<W: Write>(out: W, node: &Node) -> io::Result<()> {
    Renderer::new(out).render(node)
}

pub fn render(node: &Node) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    render_to(&mut buffer, node)?;
    String::from_utf8(buffer)
        .map_err(|error| ExportError::Render(io::Error::new(io::ErrorKind::InvalidData, error)))
}

fn inline_text(node: &Node) -> io::Result<Cow<'_, str>> {
    match node {
        Node::Null => Ok(Cow::Borrowed("null")),
        Node::Scalar(scalar) => scalar_text(scalar),
        Node::Sequence(_) => Ok(Cow::Borrowed("[]")),
        Node::Mapping(_) => Ok(Cow::Borrowed("{}")),
    }
}

fn scalar_text(scalar: &Scalar) -> io::Result<Cow<'_, str>> {
    if scalar.is_placeholder() || scalar.tag != ScalarTag::Str {
        return Ok(Cow::Borrowed(scalar.value.as_str()));
    }
    quoted_if_needed(scalar.value.as_str())
}

fn key_text(key: &str) -> io::Result<Cow<'_, str>> {
    quoted_if_needed(key)
}

fn quoted_if_needed(text: &str) -> io::Result<Cow<'_, str>> {
    if needs_quotes(text) {
        let json = serde_json::to_string(text).map_err(io::Error::other)?;
        Ok(Cow::Owned(escape_yaml_breaks(json)))
    } else {
        Ok(Cow::Borrowed(text))
    }
}

const RESERVED_WORDS: &[&str] = &[
    "true", "false", "yes", "no", "on", "off", "y", "n", "null", "~", ".inf", "-.inf", ".nan",
];

const INDICATORS: &[char] = &[
    '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@', '`',
];

fn needs_quotes(text: &str) -> bool {
    let Some(first) = text.chars().next() else {
        return true;
    };
    first.is_whitespace()
        || text.ends_with(char::is_whitespace)
        || INDICATORS.contains(&first)
        || RESERVED_WORDS
            .iter()
            .any(|word| word.eq_ignore_ascii_case(text))
        || text.parse::<f64>().is_ok()
        || text.contains(": ")
        || text.contains(" #")
        || text.ends_with(':')
        || has_radix_prefix(text)
        || text.chars().any(|c| c.is_control() || is_unicode_break(c))
}

// YAML reads `0x1F`, `-0o17` and `+0b1` as integers.
fn has_radix_prefix(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    ["0x", "0o", "0b"]
        .iter()
        .any(|prefix| digits.starts_with(prefix))
}

fn is_unicode_break(c: char) -> bool {
    matches!(c, '\u{2028}' | '\u{2029}')
}

// JSON leaves DEL, C1 controls and the unicode line separators raw; YAML needs them escaped.
fn escape_yaml_breaks(json: String) -> String {
    if !json.chars().any(needs_escape) {
        return json;
    }
    let mut escaped = String::with_capacity(json.len() + 8);
    for c in json.chars() {
        if needs_escape(c) {
            escaped.push_str(&format!("\\u{:04X}", u32::from(c)));
        } else {
            escaped.push(c);
        }
    }
    escaped
}

fn needs_escape(c: char) -> bool {
    c == '\u{7f}' || ('\u{80}'..='\u{9f}').contains(&c) || is_unicode_break(c)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
