use anyhow::Result;

use crate::json;
use crate::yaml::{self, scalar};

macro_rules! test {
    ($input:expr, $expected:expr) => {{
        let doc = json::from_slice($input)?;
        assert_eq!(yaml::to_string(&doc), $expected, "input: {}", $input);
    }};
}

fn quoted(input: &str) -> std::string::String {
    let mut output = std::string::String::new();
    scalar::double_quoted(&mut output, input.into()).unwrap();
    output
}

fn float(input: &str) -> std::string::String {
    let mut output = std::string::String::new();
    scalar::float(&mut output, input.into()).unwrap();
    output
}

#[test]
fn mapping_with_sequence() -> Result<()> {
    test!(r#"{"a": 1, "b": [1, 2, 3]}"#, "a: 1\nb:\n- 1\n- 2\n- 3\n");
    Ok(())
}

#[test]
fn empty_collections() -> Result<()> {
    test!("{}", "{}\n");
    test!("[]", "[]\n");
    test!(r#"{"a": {}, "b": []}"#, "a: {}\nb: []\n");
    test!("[{}, []]", "- {}\n- []\n");
    Ok(())
}

#[test]
fn nested_mappings() -> Result<()> {
    test!(r#"{"a": {"b": {"c": 1}, "d": 2}, "e": 3}"#, "a:\n  b:\n    c: 1\n  d: 2\ne: 3\n");
    Ok(())
}

#[test]
fn nested_sequences() -> Result<()> {
    test!("[[1, 2], [3]]", "- - 1\n  - 2\n- - 3\n");
    test!("[[[1]]]", "- - - 1\n");
    Ok(())
}

#[test]
fn mapping_in_sequence() -> Result<()> {
    test!(r#"[{"a": 1, "b": 2}, {"c": 3}]"#, "- a: 1\n  b: 2\n- c: 3\n");
    test!(r#"[{"a": {"b": 1}}]"#, "- a:\n    b: 1\n");
    test!(r#"[{"a": [1, 2], "b": 3}]"#, "- a:\n  - 1\n  - 2\n  b: 3\n");
    Ok(())
}

#[test]
fn sequence_in_nested_mapping() -> Result<()> {
    test!(r#"{"a": {"b": [1, {"c": 2}]}}"#, "a:\n  b:\n  - 1\n  - c: 2\n");
    Ok(())
}

#[test]
fn scalar_root() -> Result<()> {
    test!("null", "null\n");
    test!("true", "true\n");
    test!("42", "42\n");
    test!("1.5", "1.5\n");
    test!(r#""hello""#, "hello\n");
    test!(r#""true""#, "\"true\"\n");
    Ok(())
}

#[test]
fn scalars() -> Result<()> {
    test!(
        r#"{"n": null, "t": true, "f": false, "i": -17, "big": 123456789012345678901234567890}"#,
        "n: null\nt: true\nf: false\ni: -17\nbig: 123456789012345678901234567890\n"
    );
    Ok(())
}

#[test]
fn floats() -> Result<()> {
    test!(
        "[1.0, 1e20, 1.5e-7, 2E3, -0.5, 3.25, 1e2]",
        "- 1.0\n- 1.0e+20\n- 1.5e-7\n- 2000.0\n- -0.5\n- 3.25\n- 100.0\n"
    );
    test!("[-0, -0.0]", "- -0\n- -0.0\n");
    Ok(())
}

#[test]
fn float_rendering() {
    assert_eq!(float("0.1"), "0.1");
    assert_eq!(float("12345678901234567890.0"), "1.2345678901234567e+19");
    assert_eq!(float("not a number"), "not a number");
}

#[test]
fn quoted_strings() -> Result<()> {
    test!(
        r#"["", "true", "Yes", "null", "NULL", "~", "123", "1e5", "0x1f", ".5", "-x", "a: b", " x", "x ", "x #y", "key:", "..."]"#,
        concat!(
            "- \"\"\n",
            "- \"true\"\n",
            "- \"Yes\"\n",
            "- \"null\"\n",
            "- \"NULL\"\n",
            "- \"~\"\n",
            "- \"123\"\n",
            "- \"1e5\"\n",
            "- \"0x1f\"\n",
            "- \".5\"\n",
            "- \"-x\"\n",
            "- \"a: b\"\n",
            "- \" x\"\n",
            "- \"x \"\n",
            "- \"x #y\"\n",
            "- \"key:\"\n",
            "- \"...\"\n",
        )
    );
    Ok(())
}

#[test]
fn plain_strings() -> Result<()> {
    test!(
        r#"["hello world", "é", "日本語", "a:b", "x#y", "http://example.com", "yes please", "-"]"#,
        concat!(
            "- hello world\n",
            "- é\n",
            "- 日本語\n",
            "- a:b\n",
            "- x#y\n",
            "- http://example.com\n",
            "- yes please\n",
            "- \"-\"\n",
        )
    );
    Ok(())
}

#[test]
fn quoted_keys() -> Result<()> {
    test!(r#"{"true": 1, "": 2, "a b": 3, "1": 4}"#, "\"true\": 1\n\"\": 2\na b: 3\n\"1\": 4\n");
    Ok(())
}

#[test]
fn long_keys() -> Result<()> {
    let key = "k".repeat(200);

    test!(
        &format!(r#"{{"{key}": 1, "short": 2}}"#),
        format!("? {key}\n: 1\nshort: 2\n")
    );
    test!(
        &format!(r#"{{"{key}": {{"a": 1}}, "b": [1]}}"#),
        format!("? {key}\n:\n  a: 1\nb:\n- 1\n")
    );
    test!(
        &format!(r#"{{"{key}": [1, 2]}}"#),
        format!("? {key}\n:\n- 1\n- 2\n")
    );
    test!(
        &format!(r#"[{{"{key}": {{}}, "x": 1}}]"#),
        format!("- ? {key}\n  : {{}}\n  x: 1\n")
    );
    test!(
        &format!(r#"[{{"a": 1, "{key}": [1]}}]"#),
        format!("- a: 1\n  ? {key}\n  :\n  - 1\n")
    );
    Ok(())
}

#[test]
fn long_key_threshold() -> Result<()> {
    let key = "k".repeat(128);
    test!(&format!(r#"{{"{key}": 1}}"#), format!("{key}: 1\n"));

    // Quoting counts towards the length of the key.
    let escaped = "\\n".repeat(70);
    test!(&format!(r#"{{"{escaped}": 1}}"#), format!("? \"{escaped}\"\n: 1\n"));
    Ok(())
}

#[test]
fn escapes() -> Result<()> {
    test!(r#""line\nbreak""#, "\"line\\nbreak\"\n");
    test!(r#""tab\there""#, "\"tab\\there\"\n");
    test!(r#""say \"hi\"""#, "say \"hi\"\n");
    test!(r#""\"quoted\"""#, "\"\\\"quoted\\\"\"\n");
    Ok(())
}

#[test]
fn double_quoted_escapes() {
    assert_eq!(quoted("a\"b\\c"), "\"a\\\"b\\\\c\"");
    assert_eq!(quoted("\0\x07\x08\x0b\x0c\r\x1b"), "\"\\0\\a\\b\\v\\f\\r\\e\"");
    assert_eq!(quoted("\x01\x7f"), "\"\\x01\\x7F\"");
    assert_eq!(quoted("\u{85}\u{2028}\u{2029}"), "\"\\N\\L\\P\"");
    assert_eq!(quoted("\u{feff}"), "\"\\uFEFF\"");
    assert_eq!(quoted("é 😀"), "\"é 😀\"");
}

#[test]
fn plain_detection() {
    assert!(scalar::is_plain("hello"));
    assert!(scalar::is_plain("hello-world"));
    assert!(scalar::is_plain("a.b"));
    assert!(!scalar::is_plain(""));
    assert!(!scalar::is_plain("off"));
    assert!(!scalar::is_plain("Y"));
    assert!(!scalar::is_plain("<<"));
    assert!(!scalar::is_plain("-.inf"));
    assert!(!scalar::is_plain(".NaN"));
    assert!(!scalar::is_plain("+1"));
    assert!(!scalar::is_plain("2001-12-14"));
    assert!(!scalar::is_plain("[x]"));
    assert!(!scalar::is_plain("*alias"));
    assert!(!scalar::is_plain("!tag"));
    assert!(!scalar::is_plain("%directive"));
    assert!(!scalar::is_plain("bell\x07"));
}

#[test]
fn to_writer() -> Result<()> {
    let doc = json::from_slice(r#"{"a": [1, 2]}"#)?;

    let mut output = Vec::new();
    yaml::to_writer(&mut output, &doc)?;
    assert_eq!(output, b"a:\n- 1\n- 2\n");

    assert_eq!(doc.to_string(), "a:\n- 1\n- 2\n");
    Ok(())
}
