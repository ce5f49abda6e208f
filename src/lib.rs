// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// Minimal block-style YAML subset for configuration records: 2-space indented mappings and
// sequences holding string, integer, boolean and null leaves.

mod config;
mod document;
mod emitter;
mod error;
mod parser;
mod scalar;

pub use config::{dump, load, load_str, store};
pub use document::{Document, DocumentKind, Mapping, Scalar};
pub use error::{ConfigLoadError, ConfigStoreError, LoadCause, ParseError, ParseErrorKind};
pub use parser::Parser;
pub use scalar::{classify_scalar, ScalarClassifier};
