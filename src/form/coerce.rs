// src/form/coerce.rs
//
// Raw field text is compared against numeric bounds. Browsers submit number
// inputs as text, so the comparison needs a rule for turning text into a number.

/// How raw field text is turned into a number before range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericPolicy {
    /// Loose coercion as done by a browser script comparing a string to a
    /// number. Unparsable text becomes NaN, and NaN never falls outside a range.
    #[default]
    Loose,
    /// The text must parse as a finite number, otherwise the field fails.
    Strict,
}

impl NumericPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "loose" => Some(Self::Loose),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loose => "loose",
            Self::Strict => "strict",
        }
    }
}

/// String-to-number conversion with script-engine semantics.
///
/// - surrounding whitespace is ignored, whitespace-only text is `0`
/// - `Infinity` with an optional sign
/// - `0x`, `0o`, `0b` unsigned integer literals
/// - decimal literals with optional sign, fraction and exponent
///
/// Anything else is NaN.
pub fn loose_number(raw: &str) -> f64 {
    let text = raw.trim_matches(is_script_whitespace);

    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(radix) = radix_prefix(text) {
        return radix_literal(&text[2..], radix);
    }

    let decimal_chars = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !decimal_chars {
        return f64::NAN;
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Plain decimal parse; rejects anything that is not a finite number.
pub fn strict_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Whitespace and line terminators a script engine strips before number
/// conversion. Narrower than `char::is_whitespace`: U+0085 is not included.
fn is_script_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{b}' | '\u{c}' | '\r' | ' ' | '\u{a0}' | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}' | '\u{2029}' | '\u{202f}' | '\u{205f}' | '\u{3000}' | '\u{feff}'
    )
}

fn radix_prefix(text: &str) -> Option<u32> {
    let prefix = text.get(..2)?;
    match prefix {
        "0x" | "0X" => Some(16),
        "0o" | "0O" => Some(8),
        "0b" | "0B" => Some(2),
        _ => None,
    }
}

fn radix_literal(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }

    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}
