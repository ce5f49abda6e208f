// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// Renders a document tree back to indented block text.

#[cfg(test)]
mod tests;

use crate::{
    document::{Document, Scalar},
    parser::INDENT_UNIT,
    scalar::{strip_quotes, ScalarClassifier},
};

/// Renders `doc` as block text with no trailing newline.
///
/// Re-parsing the output gives back a structurally equal tree.
pub fn emit_document(doc: &Document) -> String {
    let emitter = Emitter::new();
    let mut lines = Vec::new();
    emitter.emit_node(&mut lines, doc, 0);
    lines.join("\n")
}

struct Emitter {
    classifier: ScalarClassifier,
}

impl Emitter {
    fn new() -> Emitter {
        let classifier = ScalarClassifier::new();
        Emitter { classifier }
    }

    fn emit_node(&self, lines: &mut Vec<String>, doc: &Document, indent: usize) {
        let pad = " ".repeat(indent);
        match doc {
            Document::Mapping(map) => {
                for (key, value) in map {
                    if value.is_container() {
                        lines.push(format!("{}{}:", pad, key));
                        self.emit_node(lines, value, indent + INDENT_UNIT);
                    } else {
                        lines.push(format!("{}{}: {}", pad, key, self.emit_scalar(value)));
                    }
                }
            }
            Document::Sequence(items) => {
                for item in items {
                    if item.is_container() {
                        lines.push(format!("{}-", pad));
                        self.emit_node(lines, item, indent + INDENT_UNIT);
                    } else {
                        lines.push(format!("{}- {}", pad, self.emit_scalar(item)));
                    }
                }
            }
            _ => lines.push(format!("{}{}", pad, self.emit_scalar(doc))),
        }
    }

    fn emit_scalar(&self, doc: &Document) -> String {
        match doc {
            Document::Boolean(true) => "true".to_string(),
            Document::Boolean(false) => "false".to_string(),
            Document::Null => "null".to_string(),
            Document::Integer(value) => value.to_string(),
            Document::String(value) => self.emit_string(value),
            Document::Mapping(_) | Document::Sequence(_) => String::new(),
        }
    }

    // Quotes are stripped without escape processing, so the wrapping quote only has to differ from
    // the quotes inside. A sequence item holding `:` and both quote kinds has no such wrapping; the
    // parser never produces one.
    fn emit_string(&self, value: &str) -> String {
        if !self.needs_quotes(value) {
            return value.to_string();
        }
        if value.contains('"') && !value.contains('\'') {
            format!("'{}'", value)
        } else {
            format!("\"{}\"", value)
        }
    }

    // True when the bare text would read back as something other than this string.
    fn needs_quotes(&self, value: &str) -> bool {
        value.is_empty()
            || value != value.trim()
            || value.contains(':')
            || value.starts_with('-')
            || value.starts_with('#')
            || strip_quotes(value).is_some()
            || self.classifier.classify(value) != Scalar::String(value.to_string())
    }
}
