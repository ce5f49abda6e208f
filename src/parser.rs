// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// Indentation-driven parser for the block subset.
//
// Containers under construction live in an arena and are addressed by index. The indent stack only
// holds indices, so no two frames ever hold a live reference into the same container.

mod line;


use hashlink::LinkedHashMap;
use log::{debug, trace};

use crate::{
    document::{Document, Scalar},
    error::{ParseError, ParseErrorKind},
    scalar::ScalarClassifier,
};

use line::{split_inline_entry, LineContent, LineParser};

pub const INDENT_UNIT: usize = 2;

pub struct Parser {
    line_parser: LineParser,
    classifier: ScalarClassifier,
}

impl Parser {
    pub fn new() -> Parser {
        let line_parser = LineParser::new();
        let classifier = ScalarClassifier::new();
        Parser {
            line_parser,
            classifier,
        }
    }

    pub fn parse(&self, input: &str) -> Result<Document, ParseError> {
        let run = ParserRun::new(self, input);
        run.parse()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

type NodeId = usize;

enum Node {
    Mapping {
        entries: LinkedHashMap<String, NodeId>,
        // Started by an inline `- key: value` sequence item.
        inline_item: bool,
    },
    Sequence(Vec<NodeId>),
    Scalar(Scalar),
}

impl Node {
    fn mapping() -> Node {
        Node::Mapping {
            entries: LinkedHashMap::new(),
            inline_item: false,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ContainerKind {
    Mapping,
    Sequence,
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    level: usize,
    node: NodeId,
}

// A non-blank, non-comment line.
#[derive(Clone, Copy, Debug)]
struct SourceLine<'a> {
    number: usize,
    indent: usize,
    raw: &'a str,
    content: &'a str,
}

impl SourceLine<'_> {
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            line: self.number,
            text: self.raw.trim_end().to_string(),
        }
    }
}

struct ParserRun<'a> {
    line_parser: &'a LineParser,
    classifier: &'a ScalarClassifier,
    lines: Vec<SourceLine<'a>>,
    nodes: Vec<Node>,
    stack: Vec<Frame>,
}

impl<'a> ParserRun<'a> {
    fn new(parser: &'a Parser, input: &'a str) -> ParserRun<'a> {
        let lines = input
            .lines()
            .enumerate()
            .filter(|(_, raw)| {
                let trimmed = raw.trim_start();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
            .map(|(index, raw)| SourceLine {
                number: index + 1,
                indent: raw.len() - raw.trim_start_matches(' ').len(),
                raw,
                content: raw.trim(),
            })
            .collect();

        ParserRun {
            line_parser: &parser.line_parser,
            classifier: &parser.classifier,
            lines,
            nodes: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Document, ParseError> {
        // The root starts as a mapping. A leading `-` line turns it into a sequence.
        let root = self.alloc(Node::mapping());
        self.stack.push(Frame { level: 0, node: root });

        for index in 0..self.lines.len() {
            self.parse_line(index)?;
        }

        debug!("parsed {} content lines into {} nodes", self.lines.len(), self.nodes.len());
        Ok(self.into_document(root))
    }

    fn parse_line(&mut self, index: usize) -> Result<(), ParseError> {
        let line = self.lines[index];

        if line.indent % INDENT_UNIT != 0 || line.raw[line.indent..].starts_with('\t') {
            return Err(line.error(ParseErrorKind::MalformedIndent));
        }

        while line.indent < self.top().level {
            let frame = self.stack.pop();
            trace!("line {}: pop {:?}", line.number, frame);
        }

        let content = self
            .line_parser
            .parse(line.content)
            .ok_or_else(|| line.error(ParseErrorKind::UnsupportedLine))?;

        match content {
            LineContent::SequenceItem(rest) => self.parse_sequence_item(index, &rest),
            LineContent::MappingEntry { key, value } => self.parse_mapping_entry(index, key, &value),
        }
    }

    fn parse_sequence_item(&mut self, index: usize, rest: &str) -> Result<(), ParseError> {
        let line = self.lines[index];
        let sequence = self.active_sequence(line)?;
        let child_level = line.indent + INDENT_UNIT;

        if rest.trim().is_empty() {
            // Placeholder for a block that follows on the next lines.
            let item = self.alloc(Node::mapping());
            self.append_item(sequence, item);
            self.push_frame(child_level, item);
            return Ok(());
        }

        let Some((key, value)) = split_inline_entry(rest) else {
            let scalar = self.alloc(Node::Scalar(self.classifier.classify(rest.trim())));
            self.append_item(sequence, scalar);
            return Ok(());
        };

        // Such a key would read back as a nested item or a comment once emitted on its own line.
        if key.starts_with('-') || key.starts_with('#') {
            return Err(line.error(ParseErrorKind::UnsupportedLine));
        }

        if value.trim().is_empty() {
            let child = self.alloc_container(self.child_kind(index, child_level));
            let mut entries = LinkedHashMap::new();
            entries.insert(key.to_string(), child);
            let item = self.alloc(Node::Mapping {
                entries,
                inline_item: false,
            });
            self.append_item(sequence, item);
            self.push_frame(child_level, child);
            return Ok(());
        }

        let scalar = self.alloc(Node::Scalar(self.classifier.classify(value.trim())));
        let mut entries = LinkedHashMap::new();
        entries.insert(key.to_string(), scalar);
        let item = self.alloc(Node::Mapping {
            entries,
            inline_item: true,
        });
        self.append_item(sequence, item);

        // Following `key: value` lines indented past the dash belong to this same item.
        if self.continues_item(index, child_level) {
            self.push_frame(child_level, item);
        }
        Ok(())
    }

    fn parse_mapping_entry(&mut self, index: usize, key: String, value: &str) -> Result<(), ParseError> {
        let line = self.lines[index];
        let frame = *self.top();

        if value.trim().is_empty() {
            let child_level = line.indent + INDENT_UNIT;
            let child = self.alloc_container(self.child_kind(index, child_level));
            self.insert_entry(frame, line, key, child, false)?;
            self.push_frame(child_level, child);
            return Ok(());
        }

        let scalar = self.alloc(Node::Scalar(self.classifier.classify(value.trim())));
        self.insert_entry(frame, line, key, scalar, true)
    }

    // Returns the sequence receiving a `-` line, converting a still-empty mapping if needed.
    fn active_sequence(&mut self, line: SourceLine) -> Result<NodeId, ParseError> {
        let node = self.top().node;
        let convertible = match &self.nodes[node] {
            Node::Sequence(_) => return Ok(node),
            Node::Mapping { entries, .. } => entries.is_empty(),
            Node::Scalar(_) => false,
        };
        if !convertible {
            return Err(line.error(ParseErrorKind::ListItemMisplaced));
        }

        trace!("line {}: node {} becomes a sequence", line.number, node);
        self.nodes[node] = Node::Sequence(Vec::new());
        Ok(node)
    }

    fn insert_entry(
        &mut self,
        frame: Frame,
        line: SourceLine,
        key: String,
        value: NodeId,
        allow_fold: bool,
    ) -> Result<(), ParseError> {
        let target = match &self.nodes[frame.node] {
            Node::Mapping { .. } => frame.node,
            Node::Sequence(items) => {
                // A `key: value` line level with the dash of an inline item continues that item.
                match items.last() {
                    Some(&last)
                        if allow_fold
                            && line.indent == frame.level
                            && matches!(self.nodes[last], Node::Mapping { inline_item: true, .. }) =>
                    {
                        last
                    }
                    _ => return Err(line.error(ParseErrorKind::EntryMisplaced)),
                }
            }
            Node::Scalar(_) => return Err(line.error(ParseErrorKind::UnsupportedLine)),
        };

        let Node::Mapping { entries, .. } = &mut self.nodes[target] else {
            return Err(line.error(ParseErrorKind::EntryMisplaced));
        };
        if entries.contains_key(&key) {
            return Err(line.error(ParseErrorKind::DuplicateKey));
        }
        entries.insert(key, value);
        Ok(())
    }

    // Decides whether a `key:` with no value opens a sequence or a mapping.
    fn child_kind(&self, index: usize, child_level: usize) -> ContainerKind {
        match self.lines.get(index + 1) {
            Some(next) if next.indent >= child_level && next.content.starts_with('-') => ContainerKind::Sequence,
            _ => ContainerKind::Mapping,
        }
    }

    fn continues_item(&self, index: usize, child_level: usize) -> bool {
        let Some(next) = self.lines.get(index + 1) else {
            return false;
        };
        next.indent >= child_level
            && matches!(self.line_parser.parse(next.content), Some(LineContent::MappingEntry { .. }))
    }

    fn top(&self) -> &Frame {
        // The root frame sits at level 0 and is never popped.
        &self.stack[self.stack.len() - 1]
    }

    fn push_frame(&mut self, level: usize, node: NodeId) {
        let frame = Frame { level, node };
        trace!("push {:?}", frame);
        self.stack.push(frame);
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn alloc_container(&mut self, kind: ContainerKind) -> NodeId {
        match kind {
            ContainerKind::Mapping => self.alloc(Node::mapping()),
            ContainerKind::Sequence => self.alloc(Node::Sequence(Vec::new())),
        }
    }

    fn append_item(&mut self, sequence: NodeId, item: NodeId) {
        if let Node::Sequence(items) = &mut self.nodes[sequence] {
            items.push(item);
        }
    }

    fn into_document(mut self, root: NodeId) -> Document {
        self.take_document(root)
    }

    fn take_document(&mut self, id: NodeId) -> Document {
        let node = std::mem::replace(&mut self.nodes[id], Node::Scalar(Scalar::Null));
        match node {
            Node::Mapping { entries, .. } => {
                let map = entries
                    .into_iter()
                    .map(|(key, child)| (key, self.take_document(child)))
                    .collect();
                Document::Mapping(map)
            }
            Node::Sequence(items) => Document::Sequence(items.into_iter().map(|child| self.take_document(child)).collect()),
            Node::Scalar(scalar) => Document::from(scalar),
        }
    }
}
