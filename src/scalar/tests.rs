use super::*;

fn string(value: &str) -> Scalar {
    Scalar::String(value.to_string())
}

#[test]
fn booleans_ignore_case() {
    assert_eq!(classify_scalar("true"), Scalar::Boolean(true));
    assert_eq!(classify_scalar("False"), Scalar::Boolean(false));
    assert_eq!(classify_scalar("TRUE"), Scalar::Boolean(true));
    assert_eq!(classify_scalar("truely"), string("truely"));
}

#[test]
fn integers() {
    assert_eq!(classify_scalar("-3"), Scalar::Integer(-3));
    assert_eq!(classify_scalar("42"), Scalar::Integer(42));
    assert_eq!(classify_scalar("007"), Scalar::Integer(7));
    assert_eq!(classify_scalar("-"), string("-"));
    assert_eq!(classify_scalar("1.5"), string("1.5"));
    assert_eq!(classify_scalar("12abc"), string("12abc"));
    assert_eq!(classify_scalar("99999999999999999999"), string("99999999999999999999"));
}

#[test]
fn quoted_strings_are_never_reinterpreted() {
    assert_eq!(classify_scalar("'-3'"), string("-3"));
    assert_eq!(classify_scalar("\"true\""), string("true"));
    assert_eq!(classify_scalar("''"), string(""));
    assert_eq!(classify_scalar("'it\\'s'"), string("it\\'s"));
}

#[test]
fn mismatched_quotes_stay_verbatim() {
    assert_eq!(classify_scalar("'abc\""), string("'abc\""));
    assert_eq!(classify_scalar("\""), string("\""));
    assert_eq!(classify_scalar("'"), string("'"));
}

#[test]
fn plain_strings() {
    assert_eq!(classify_scalar(""), string(""));
    assert_eq!(classify_scalar("hello world"), string("hello world"));
    assert_eq!(classify_scalar("null"), string("null"));
    assert_eq!(classify_scalar("日本語"), string("日本語"));
}

#[test]
fn whole_quotes_reject_inner_quote_of_same_kind() {
    assert_eq!(strip_whole_quotes("\"a: b\""), Some("a: b"));
    assert_eq!(strip_whole_quotes("'a: \"b\"'"), Some("a: \"b\""));
    assert_eq!(strip_whole_quotes("\"name\": \"agent\""), None);
    assert_eq!(strip_whole_quotes("plain"), None);
}

#[test]
fn classifier_is_reusable() {
    let classifier = ScalarClassifier::new();
    assert_eq!(classifier.classify("12"), Scalar::Integer(12));
    assert_eq!(classifier.classify("x"), string("x"));
    assert_eq!(classifier.classify("false"), Scalar::Boolean(false));
}
