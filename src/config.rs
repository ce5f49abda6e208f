// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// File-level entry points used by config registries.


use std::{fs, path::Path};

use log::debug;

use crate::{
    document::Document,
    emitter::emit_document,
    error::{ConfigLoadError, ConfigStoreError, LoadCause, ParseError},
    parser::Parser,
};

/// Reads `path` once and parses it. Any I/O or parse failure is reported against the path.
pub fn load(path: impl AsRef<Path>) -> Result<Document, ConfigLoadError> {
    let path = path.as_ref();
    let load_error = |cause: LoadCause| ConfigLoadError {
        path: path.to_path_buf(),
        cause,
    };

    let text = fs::read_to_string(path).map_err(|err| load_error(err.into()))?;
    debug!("loading config {} ({} bytes)", path.display(), text.len());

    load_str(&text).map_err(|err| load_error(err.into()))
}

pub fn load_str(text: &str) -> Result<Document, ParseError> {
    let parser = Parser::new();
    parser.parse(text)
}

/// Renders `doc` as block text. Performs no I/O.
pub fn dump(doc: &Document) -> String {
    emit_document(doc)
}

/// Writes `dump(doc)` plus a trailing newline to `path`.
pub fn store(path: impl AsRef<Path>, doc: &Document) -> Result<(), ConfigStoreError> {
    let path = path.as_ref();
    let mut text = dump(doc);
    text.push('\n');

    debug!("storing config {} ({} bytes)", path.display(), text.len());
    fs::write(path, text).map_err(|source| ConfigStoreError {
        path: path.to_path_buf(),
        source,
    })
}
