// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// The two line productions of the block format:
//
//   mapping-entry ::= <key> ":" [ <scalar> ]
//   sequence-item ::= "-" [ " " <rest> ]

use chumsky::prelude::*;

use crate::scalar::strip_whole_quotes;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineContent {
    /// Everything after the dash, with one separating space removed.
    SequenceItem(String),
    /// Key is trimmed. Value is the raw remainder after the first `:`.
    MappingEntry { key: String, value: String },
}

pub struct LineParser {
    parser: Box<dyn Parser<char, LineContent, Error = Simple<char>>>,
}

impl LineParser {
    pub fn new() -> LineParser {
        let parser = gen_line_parser();
        LineParser {
            parser: Box::new(parser),
        }
    }

    /// Parses the stripped content of one line. `None` when neither production matches.
    pub fn parse(&self, content: &str) -> Option<LineContent> {
        self.parser.parse(content).ok()
    }
}

fn gen_line_parser() -> impl Parser<char, LineContent, Error = Simple<char>> {
    let rest = any().repeated().collect::<String>();

    let sequence_item = just('-')
        .ignore_then(just(' ').or_not())
        .ignore_then(rest.clone())
        .map(LineContent::SequenceItem)
        .labelled("sequence item");

    let mapping_entry = filter(|c: &char| *c != ':')
        .repeated()
        .collect::<String>()
        .then_ignore(just(':'))
        .then(rest)
        .map(|(key, value)| LineContent::MappingEntry {
            key: key.trim().to_string(),
            value,
        })
        .labelled("mapping entry");

    sequence_item.or(mapping_entry).then_ignore(end())
}

/// Splits a sequence item remainder into an inline `key: value` pair, if it has that shape.
///
/// A remainder wrapped in one pair of quotes is a scalar, even when it contains `:`.
pub fn split_inline_entry(rest: &str) -> Option<(&str, &str)> {
    if strip_whole_quotes(rest.trim()).is_some() {
        return None;
    }
    let (key, value) = rest.split_once(':')?;
    Some((key.trim(), value))
}
