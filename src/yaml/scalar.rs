use core::fmt::{self, Write};

use bstr::{BStr, ByteSlice};

/// Indicator characters which may not start a plain scalar.
const INDICATORS: &[char] = &[
    '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@', '`',
];

/// Plain scalars which a YAML 1.1 or 1.2 resolver reads as something other
/// than a string. Compared case-insensitively.
const RESERVED: &[&str] = &[
    "null", "~", "true", "false", "yes", "no", "on", "off", "y", "n", "<<", "=",
];

/// Write a string scalar, quoting it if it can't be written plain.
pub(crate) fn string<W>(f: &mut W, string: &BStr) -> fmt::Result
where
    W: ?Sized + Write,
{
    match string.to_str() {
        Ok(s) if is_plain(s) => f.write_str(s),
        _ => double_quoted(f, string),
    }
}

/// Test if the string can be written as a plain scalar and read back as the
/// same string.
pub(crate) fn is_plain(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return false;
    };

    if INDICATORS.contains(&first) || first.is_whitespace() {
        return false;
    }

    if s.ends_with(char::is_whitespace) || s.ends_with(':') {
        return false;
    }

    if RESERVED.iter().any(|r| r.eq_ignore_ascii_case(s)) {
        return false;
    }

    if looks_numeric(s) {
        return false;
    }

    if s.starts_with("...") {
        return false;
    }

    if s.contains(": ") || s.contains(" #") {
        return false;
    }

    s.chars().all(is_printable)
}

/// Test if a resolver might read the string as a number, a date or some other
/// non-string scalar.
fn looks_numeric(s: &str) -> bool {
    let mut chars = s.chars();

    match (chars.next(), chars.next()) {
        (Some('0'..='9'), _) => true,
        (Some('+' | '.'), Some('0'..='9' | '.')) => true,
        _ => s.parse::<f64>().is_ok() || is_special_float(s),
    }
}

fn is_special_float(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    s.eq_ignore_ascii_case(".inf") || s.eq_ignore_ascii_case(".nan")
}

/// Test if the character may appear unescaped in YAML output, excluding
/// tabs and line breaks which always force quoting.
fn is_printable(c: char) -> bool {
    matches!(
        c,
        '\x20'..='\x7e' | '\u{a0}'..='\u{d7ff}' | '\u{e000}'..='\u{fefe}' | '\u{ff00}'..='\u{fffd}'
            | '\u{10000}'..='\u{10ffff}'
    )
}

/// Write a double-quoted string.
pub(crate) fn double_quoted<W>(f: &mut W, string: &BStr) -> fmt::Result
where
    W: ?Sized + Write,
{
    f.write_char('"')?;

    for c in string.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\0' => f.write_str("\\0")?,
            '\x07' => f.write_str("\\a")?,
            '\x08' => f.write_str("\\b")?,
            '\t' => f.write_str("\\t")?,
            '\n' => f.write_str("\\n")?,
            '\x0b' => f.write_str("\\v")?,
            '\x0c' => f.write_str("\\f")?,
            '\r' => f.write_str("\\r")?,
            '\x1b' => f.write_str("\\e")?,
            '\u{85}' => f.write_str("\\N")?,
            '\u{2028}' => f.write_str("\\L")?,
            '\u{2029}' => f.write_str("\\P")?,
            c if c < '\u{a0}' && !is_printable(c) => write!(f, "\\x{:02X}", u32::from(c))?,
            c if is_printable(c) => f.write_char(c)?,
            c => write!(f, "\\u{:04X}", u32::from(c))?,
        }
    }

    f.write_char('"')
}

/// Write a float so that it resolves as a float in both YAML 1.1 and 1.2.
///
/// The text is always rendered with a `.`, and exponents carry an explicit
/// sign. Unparseable input is written as-is.
pub(crate) fn float<W>(f: &mut W, raw: &BStr) -> fmt::Result
where
    W: ?Sized + Write,
{
    let Ok(value) = lexical_core::parse::<f64>(raw) else {
        return write!(f, "{raw}");
    };

    if value.is_nan() {
        return f.write_str(".nan");
    }

    if value.is_infinite() {
        return f.write_str(if value < 0.0 { "-.inf" } else { ".inf" });
    }

    let mut buffer = ryu::Buffer::new();
    let formatted = buffer.format_finite(value);

    let (mantissa, exponent) = match formatted.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (formatted, None),
    };

    f.write_str(mantissa)?;

    if !mantissa.contains('.') {
        f.write_str(".0")?;
    }

    if let Some(exponent) = exponent {
        f.write_char('e')?;

        if !exponent.starts_with('-') {
            f.write_char('+')?;
        }

        f.write_str(exponent)?;
    }

    Ok(())
}
