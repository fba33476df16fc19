/// Format a finite f64 as its shortest decimal text with a literal
/// trailing ".0" stripped (so 3.0 renders as "3"). Returns None for
/// non-finite input; the caller decides between rejection and
/// substitution.
pub(crate) fn format_f64(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let mut buf = ryu::Buffer::new();
    Some(strip_integral_suffix(buf.format_finite(value)))
}

pub(crate) fn format_f32(value: f32) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let mut buf = ryu::Buffer::new();
    Some(strip_integral_suffix(buf.format_finite(value)))
}

/// Literal text for a float the caller knows is finite.
pub(crate) fn finite_literal(value: f64) -> String {
    match format_f64(value) {
        Some(literal) => literal,
        None => {
            debug_assert!(false, "finite_literal called with non-finite value");
            String::from("0")
        }
    }
}

fn strip_integral_suffix(raw: &str) -> String {
    match raw.strip_suffix(".0") {
        Some(body) => body.to_string(),
        None => raw.to_string(),
    }
}

/// An exact decimal literal carried as text, for values that must not be
/// rounded through a machine float (prices, arbitrary-precision results).
///
/// Construction validates the literal shape: optional sign, digits,
/// optional fraction, optional exponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal(String);

impl Decimal {
    pub fn new(literal: impl Into<String>) -> Option<Self> {
        let literal = literal.into();
        if is_decimal_literal(&literal) {
            Some(Decimal(literal))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Decimal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_decimal_literal(s: &str) -> bool {
    let s = s.strip_prefix(['-', '+']).unwrap_or(s);
    let (mantissa, exponent) = match s.split_once(['e', 'E']) {
        Some((m, e)) => (m, Some(e)),
        None => (s, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (mantissa, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if let Some(frac) = frac_part {
        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    match exponent {
        None => true,
        Some(e) => {
            let e = e.strip_prefix(['-', '+']).unwrap_or(e);
            !e.is_empty() && e.bytes().all(|b| b.is_ascii_digit())
        }
    }
}
