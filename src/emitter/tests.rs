use crate::{config::load_str, document::Mapping};

use super::*;

fn round_trip(input: &str) {
    let doc = load_str(input).unwrap();
    let text = emit_document(&doc);
    let reparsed = load_str(&text).unwrap();
    assert_eq!(doc, reparsed, "emitted:\n{}", text);
    assert_eq!(text, emit_document(&reparsed));
}

#[test]
fn emits_block_layout() {
    let doc = load_str("items:\n  - name: a\n    value: 1\n  - name: b\ntags:\n  - x\nflag: true\n").unwrap();
    let expected = "items:\n  -\n    name: a\n    value: 1\n  -\n    name: b\ntags:\n  - x\nflag: true";
    assert_eq!(emit_document(&doc), expected);
}

#[test]
fn emits_null_and_nested_sequences() {
    let doc: Document = [
        ("none", Document::Null),
        ("grid", Document::from(vec![Document::from(vec![Document::Integer(1)])])),
    ]
    .into_iter()
    .collect();
    assert_eq!(emit_document(&doc), "none: null\ngrid:\n  -\n    - 1");
}

#[test]
fn quotes_ambiguous_strings() {
    let mut map = Mapping::new();
    for value in ["42", "-3", "true", "", " padded", "a: b", "-x", "#x", "'q'", "plain text"] {
        map.insert(format!("k{}", map.len()), Document::from(value));
    }
    let doc = Document::Mapping(map);
    let expected = [
        "k0: \"42\"",
        "k1: \"-3\"",
        "k2: \"true\"",
        "k3: \"\"",
        "k4: \" padded\"",
        "k5: \"a: b\"",
        "k6: \"-x\"",
        "k7: \"#x\"",
        "k8: \"'q'\"",
        "k9: plain text",
    ]
    .join("\n");
    assert_eq!(emit_document(&doc), expected);
    assert_eq!(load_str(&expected).unwrap(), doc);
}

#[test]
fn picks_single_quotes_around_double_quotes() {
    let doc: Document = [("k", "say \"hi\": now")].into_iter().collect();
    assert_eq!(emit_document(&doc), "k: 'say \"hi\": now'");
}

#[test]
fn round_trips_parsed_documents() {
    round_trip("items:\n  - name: a\n    value: 1\n  - name: b\n");
    round_trip("- a\n- 2\n-\n  k: v\n-\n  - x\n");
    round_trip("a:\nb: ''\nc: '-3'\nd:\n  - 'a: b'\n  - \"\"\n  - TRUE\n");
    round_trip("- tags:\n    - x\n- meta:\n    k: v\n");
    round_trip("# nothing\n");
    round_trip("- \"name\": \"agent\"\n  \"role\": 'a: b'\n- 'x: \"y\"'\n");
    round_trip("items:\n  - name: '-x'\n    note: '#a'\n");
}

#[test]
fn emitted_text_is_valid_yaml() {
    let doc = load_str("id: agent\nsteps:\n  - name: a\n    retries: 2\n  - b\nsafety:\n  enabled: false\n").unwrap();
    let text = emit_document(&doc);

    let docs = saphyr::YamlLoader::load_from_str(&text).unwrap();
    assert_eq!(docs.len(), 1);
    let yaml = &docs[0];
    assert_eq!(yaml["id"].as_str(), Some("agent"));
    assert_eq!(yaml["steps"][0]["name"].as_str(), Some("a"));
    assert_eq!(yaml["steps"][0]["retries"].as_i64(), Some(2));
    assert_eq!(yaml["steps"][1].as_str(), Some("b"));
    assert_eq!(yaml["safety"]["enabled"].as_bool(), Some(false));
}

#[test]
fn sequence_strings_with_colons_keep_one_kind_of_inner_quote() {
    let doc = Document::Sequence(vec![Document::from("say \"hi\": now"), Document::from("it's: here")]);
    let text = emit_document(&doc);
    assert_eq!(text, "- 'say \"hi\": now'\n- \"it's: here\"");
    assert_eq!(load_str(&text).unwrap(), doc);
}
