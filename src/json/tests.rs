use anyhow::{Context, Result};

use crate::json::{self, ErrorKind};
use crate::{Any, NumberKind};

fn error_kind(input: &str) -> ErrorKind {
    match json::from_slice(input) {
        Ok(doc) => panic!("expected {input:?} to fail, got {doc:?}"),
        Err(error) => *error.kind(),
    }
}

#[test]
fn object() -> Result<()> {
    let doc = json::from_slice(r#" { "a" : 1 , "b" : [ true , false , null ] } "#)?;
    let root = doc.as_ref().as_mapping().context("missing root mapping")?;

    assert_eq!(root.len(), 2);
    assert_eq!(root.get("a").and_then(|v| v.as_u32()), Some(1));

    let b = root.get("b").and_then(|v| v.as_sequence()).context("missing b")?;
    assert_eq!(b.get(0).and_then(|v| v.as_bool()), Some(true));
    assert_eq!(b.get(1).and_then(|v| v.as_bool()), Some(false));
    assert!(b.get(2).context("missing null")?.is_null());
    Ok(())
}

#[test]
fn key_order() -> Result<()> {
    let doc = json::from_slice(r#"{"zebra": 1, "apple": 2, "mango": 3}"#)?;
    let root = doc.as_ref().as_mapping().context("missing root mapping")?;

    let keys = root.iter().map(|(k, _)| k.to_string()).collect::<Vec<_>>();
    assert_eq!(keys, ["zebra", "apple", "mango"]);
    Ok(())
}

#[test]
fn duplicate_keys() -> Result<()> {
    let doc = json::from_slice(r#"{"a": {"x": [1, 2]}, "b": 2, "a": 3}"#)?;
    let root = doc.as_ref().as_mapping().context("missing root mapping")?;

    assert_eq!(root.len(), 2);

    let items = root
        .iter()
        .map(|(k, v)| (k.to_string(), v.as_u32()))
        .collect::<Vec<_>>();

    assert_eq!(items, [("a".to_owned(), Some(3)), ("b".to_owned(), Some(2))]);

    // The replaced subtree is no longer stored.
    assert_eq!(doc.value_count(), 3);
    Ok(())
}

#[test]
fn number_kinds() -> Result<()> {
    let doc = json::from_slice("[0, -12, 1.5, -0.25, 1e10, 2E-3, 3.0e+2]")?;
    let root = doc.as_ref().as_sequence().context("missing root sequence")?;

    let numbers = root
        .iter()
        .map(|v| {
            let n = v.as_number().context("expected number")?;
            Ok((n.as_raw().to_string(), n.kind()))
        })
        .collect::<Result<Vec<_>>>()?;

    let expected = [
        ("0", NumberKind::Integer),
        ("-12", NumberKind::Integer),
        ("1.5", NumberKind::Float),
        ("-0.25", NumberKind::Float),
        ("1e10", NumberKind::Float),
        ("2E-3", NumberKind::Float),
        ("3.0e+2", NumberKind::Float),
    ];

    assert_eq!(numbers.len(), expected.len());

    for ((raw, kind), (expected_raw, expected_kind)) in numbers.iter().zip(expected) {
        assert_eq!(raw, expected_raw);
        assert_eq!(*kind, expected_kind);
    }

    assert_eq!(root.get(1).and_then(|v| v.as_i64()), Some(-12));
    assert_eq!(root.get(4).and_then(|v| v.as_f64()), Some(1e10));
    Ok(())
}

#[test]
fn large_integer() -> Result<()> {
    let doc = json::from_slice("123456789012345678901234567890")?;
    let number = doc.as_ref().as_number().context("expected number")?;

    assert_eq!(number.kind(), NumberKind::Integer);
    assert_eq!(number.as_u64(), None);
    assert_eq!(number.as_raw(), "123456789012345678901234567890");
    Ok(())
}

#[test]
fn escapes() -> Result<()> {
    let input = r#""quote \" backslash \\ slash \/ \b\f\n\r\t unicode \u00e9 \u4E2D""#;
    let doc = json::from_slice(input)?;

    assert_eq!(
        doc.as_ref().as_str(),
        Some("quote \" backslash \\ slash / \u{8}\u{c}\n\r\t unicode é 中")
    );

    Ok(())
}

#[test]
fn surrogate_pair() -> Result<()> {
    let doc = json::from_slice(r#""\ud83d\ude00""#)?;
    assert_eq!(doc.as_ref().as_str(), Some("😀"));
    Ok(())
}

#[test]
fn raw_utf8() -> Result<()> {
    let doc = json::from_slice(r#"{"clé": "wert ü 日本"}"#)?;
    let root = doc.as_ref().as_mapping().context("missing root mapping")?;
    assert_eq!(root.get("clé").and_then(|v| v.as_str()), Some("wert ü 日本"));
    Ok(())
}

#[test]
fn strings_are_interned() -> Result<()> {
    let input = r#"{"k": "k", "list": ["k", "line\nbreak", "line\u000abreak"]}"#;
    let doc = json::from_slice(input)?;
    assert_eq!(doc.data.string_count(), 3);
    Ok(())
}

#[test]
fn scalars_at_root() -> Result<()> {
    assert!(matches!(json::from_slice("null")?.as_ref().as_any(), Any::Null(..)));
    assert_eq!(json::from_slice(" true ")?.as_ref().as_bool(), Some(true));
    assert_eq!(json::from_slice("\"x\"")?.as_ref().as_str(), Some("x"));
    assert_eq!(json::from_slice("\n42\n")?.as_ref().as_u32(), Some(42));
    Ok(())
}

#[test]
fn empty_collections() -> Result<()> {
    let doc = json::from_slice("{}")?;
    assert!(doc.as_ref().as_mapping().context("expected mapping")?.is_empty());

    let doc = json::from_slice("[ ]")?;
    assert!(doc.as_ref().as_sequence().context("expected sequence")?.is_empty());
    Ok(())
}

#[test]
fn malformed() {
    assert_eq!(error_kind(""), ErrorKind::ExpectedValue);
    assert_eq!(error_kind("   "), ErrorKind::ExpectedValue);
    assert_eq!(error_kind("{a: 1}"), ErrorKind::ExpectedObjectKey);
    assert_eq!(error_kind("{'a': 1}"), ErrorKind::ExpectedObjectKey);
    assert_eq!(error_kind(r#"{"a" 1}"#), ErrorKind::ExpectedColon);
    assert_eq!(error_kind(r#"{"a": 1 "b": 2}"#), ErrorKind::ExpectedObjectSeparator);
    assert_eq!(error_kind("[1 2]"), ErrorKind::ExpectedArraySeparator);
    assert_eq!(error_kind("[1, 2,]"), ErrorKind::TrailingComma);
    assert_eq!(error_kind(r#"{"a": 1,}"#), ErrorKind::TrailingComma);
    assert_eq!(error_kind("[1] [2]"), ErrorKind::ExpectedEof);
    assert_eq!(error_kind("nul"), ErrorKind::ExpectedValue);
    assert_eq!(error_kind("True"), ErrorKind::ExpectedValue);
    assert_eq!(error_kind("NaN"), ErrorKind::ExpectedValue);
    assert_eq!(error_kind("Infinity"), ErrorKind::ExpectedValue);
    assert_eq!(error_kind("[1,"), ErrorKind::ExpectedValue);
    assert_eq!(error_kind("[1"), ErrorKind::ExpectedArraySeparator);
    assert_eq!(error_kind("// comment\n1"), ErrorKind::ExpectedValue);
    assert_eq!(error_kind("\u{feff}{}"), ErrorKind::ExpectedValue);
}

#[test]
fn malformed_numbers() {
    assert_eq!(error_kind("-"), ErrorKind::BadNumber);
    assert_eq!(error_kind("1."), ErrorKind::BadNumber);
    assert_eq!(error_kind("1e"), ErrorKind::BadNumber);
    assert_eq!(error_kind("1e+"), ErrorKind::BadNumber);
    assert_eq!(error_kind("-.5"), ErrorKind::BadNumber);
    assert_eq!(error_kind(".5"), ErrorKind::ExpectedValue);
    assert_eq!(error_kind("+1"), ErrorKind::ExpectedValue);
    assert_eq!(error_kind("01"), ErrorKind::ExpectedEof);
    assert_eq!(error_kind("0x10"), ErrorKind::ExpectedEof);
}

#[test]
fn malformed_strings() {
    assert_eq!(error_kind(r#""abc"#), ErrorKind::UnterminatedString);
    assert_eq!(error_kind(r#""ab\"#), ErrorKind::BadEscape);
    assert_eq!(error_kind(r#""a\qb""#), ErrorKind::BadEscape);
    assert_eq!(error_kind(r#""\u12""#), ErrorKind::BadUnicodeEscape);
    assert_eq!(error_kind(r#""\ud83d""#), ErrorKind::LoneSurrogate);
    assert_eq!(error_kind(r#""\ud83dx""#), ErrorKind::LoneSurrogate);
    assert_eq!(error_kind(r#""\ude00""#), ErrorKind::LoneSurrogate);
    assert_eq!(error_kind(r#""\ud83dA""#), ErrorKind::LoneSurrogate);
    assert_eq!(error_kind("\"tab\there\""), ErrorKind::ControlCharacter);
    assert_eq!(error_kind("\"new\nline\""), ErrorKind::ControlCharacter);
    assert_eq!(error_kind("\"esc\\n then \x01\""), ErrorKind::ControlCharacter);
}

#[test]
fn invalid_utf8() {
    let error = json::from_slice(b"[\"\xff\xfe\"]").unwrap_err();
    assert_eq!(*error.kind(), ErrorKind::InvalidUtf8);
    assert_eq!(error.span(), 1..4);
}

#[test]
fn recursion_limit() -> Result<()> {
    let ok = format!("{}{}", "[".repeat(128), "]".repeat(128));
    json::from_slice(ok)?;

    let deep = format!("{}{}", "[".repeat(129), "]".repeat(129));
    assert_eq!(error_kind(&deep), ErrorKind::RecursionLimitExceeded);
    Ok(())
}

#[test]
fn error_location() {
    let input = "{\n  \"a\": [1, 2,],\n  \"b\": 2\n}";
    let error = json::from_slice(input).unwrap_err();

    assert_eq!(*error.kind(), ErrorKind::TrailingComma);

    let location = error.location(input);
    assert_eq!((location.line, location.column), (2, 13));
    assert_eq!(location.to_string(), "2:13");
}
