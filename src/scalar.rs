// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// Classifies a stripped text token into a typed leaf value.

#[cfg(test)]
mod tests;

use chumsky::prelude::*;

use crate::document::Scalar;

pub struct ScalarClassifier {
    parser: Box<dyn Parser<char, Scalar, Error = Simple<char>>>,
}

impl ScalarClassifier {
    pub fn new() -> ScalarClassifier {
        let parser = gen_scalar_parser();
        ScalarClassifier {
            parser: Box::new(parser),
        }
    }

    /// Classifies `span` as a quoted string, integer, boolean or plain string, in that order.
    ///
    /// Never fails: anything that is not recognised is kept verbatim as a string.
    pub fn classify(&self, span: &str) -> Scalar {
        if let Some(inner) = strip_quotes(span) {
            return Scalar::String(inner.to_string());
        }

        match self.parser.parse(span) {
            Ok(scalar) => scalar,
            Err(_) => Scalar::String(span.to_string()),
        }
    }
}

impl Default for ScalarClassifier {
    fn default() -> Self {
        ScalarClassifier::new()
    }
}

/// One-off classification. Callers classifying many spans should hold a [`ScalarClassifier`].
pub fn classify_scalar(span: &str) -> Scalar {
    ScalarClassifier::new().classify(span)
}

/// Returns the contents between a matching pair of `'` or `"` around `span`.
///
/// A lone quote character is not a pair and gives `None`, so it stays a one-character string.
/// Earlier loaders of this format sliced it down to an empty string instead.
pub fn strip_quotes(span: &str) -> Option<&str> {
    for quote in ['"', '\''] {
        if span.len() >= 2 && span.starts_with(quote) && span.ends_with(quote) {
            return Some(&span[1..span.len() - 1]);
        }
    }
    None
}

/// Like [`strip_quotes`], but only when the contents hold no further quote of the same kind.
///
/// `"a: b"` is one quoted scalar; `"name": "agent"` is a quoted key followed by a quoted value.
pub fn strip_whole_quotes(span: &str) -> Option<&str> {
    let inner = strip_quotes(span)?;
    let quote = span.chars().next()?;
    if inner.contains(quote) {
        None
    } else {
        Some(inner)
    }
}

fn gen_scalar_parser() -> impl Parser<char, Scalar, Error = Simple<char>> {
    let integer = just('-')
        .or_not()
        .chain::<char, _, _>(text::digits(10))
        .collect::<String>()
        .try_map(|string: String, span| {
            string
                .parse::<i64>()
                .map(Scalar::Integer)
                .map_err(|err| Simple::custom(span, format!("integer out of range: {}", err)))
        })
        .labelled("integer");

    let boolean = text::ident()
        .try_map(|ident: String, span| match ident.to_ascii_lowercase().as_str() {
            "true" => Ok(Scalar::Boolean(true)),
            "false" => Ok(Scalar::Boolean(false)),
            _ => Err(Simple::custom(span, format!("not a boolean: {}", ident))),
        })
        .labelled("boolean");

    integer.or(boolean).then_ignore(end())
}
