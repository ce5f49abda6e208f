// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum ParseErrorKind {
    #[error("indentation is not a multiple of 2 spaces")]
    MalformedIndent,
    #[error("unsupported line")]
    UnsupportedLine,
    #[error("list item at unexpected position")]
    ListItemMisplaced,
    #[error("mapping entry inside a sequence")]
    EntryMisplaced,
    #[error("duplicate key")]
    DuplicateKey,
}

/// A structural error. Parsing stops at the first one; no partial tree is returned.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("line {line}: {kind}: `{text}`")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based.
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Error)]
pub enum LoadCause {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Error)]
#[error("failed to load config {}: {cause}", .path.display())]
pub struct ConfigLoadError {
    pub path: PathBuf,
    #[source]
    pub cause: LoadCause,
}

#[derive(Debug, Error)]
#[error("failed to store config {}: {source}", .path.display())]
pub struct ConfigStoreError {
    pub path: PathBuf,
    pub source: io::Error,
}
