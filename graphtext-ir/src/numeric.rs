//! Numeric interpretation of typed literals
//!
//! Classification follows the literal's datatype IRI. A literal whose
//! lexical form does not parse under its datatype is not a number.

use crate::vocab::xsd;
use crate::Literal;

/// Numeric kind of a literal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// Not a numeric literal
    NotANumber,
    /// xsd:integer and its derived types
    Integer,
    /// xsd:decimal
    Decimal,
    /// xsd:float
    Float,
    /// xsd:double
    Double,
}

/// Parsed numeric literal value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumericValue {
    Integer(i64),
    Decimal(f64),
    Float(f64),
    Double(f64),
}

impl NumericValue {
    /// Parse a literal under its datatype
    pub fn from_literal(lit: &Literal) -> Option<Self> {
        let dt = lit.datatype()?;
        let lexical = lit.value().trim();
        if xsd::INTEGER_FAMILY.contains(&dt) {
            parse_integer(lexical).map(NumericValue::Integer)
        } else if dt == xsd::DECIMAL {
            parse_decimal(lexical).map(NumericValue::Decimal)
        } else if dt == xsd::FLOAT {
            parse_floating(lexical).map(NumericValue::Float)
        } else if dt == xsd::DOUBLE {
            parse_floating(lexical).map(NumericValue::Double)
        } else {
            None
        }
    }

    pub fn kind(&self) -> NumericKind {
        match self {
            NumericValue::Integer(_) => NumericKind::Integer,
            NumericValue::Decimal(_) => NumericKind::Decimal,
            NumericValue::Float(_) => NumericKind::Float,
            NumericValue::Double(_) => NumericKind::Double,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            NumericValue::Integer(i) => i as f64,
            NumericValue::Decimal(v) | NumericValue::Float(v) | NumericValue::Double(v) => v,
        }
    }

    /// Integer conversion
    ///
    /// Integers convert exactly. Fractional kinds truncate toward zero and
    /// convert only when finite and within `i64` range.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            NumericValue::Integer(i) => Some(i),
            NumericValue::Decimal(v) | NumericValue::Float(v) | NumericValue::Double(v) => {
                let t = v.trunc();
                if t.is_finite() && t >= i64::MIN as f64 && t <= i64::MAX as f64 {
                    Some(t as i64)
                } else {
                    None
                }
            }
        }
    }
}

impl Literal {
    /// Numeric kind of this literal
    pub fn numeric_kind(&self) -> NumericKind {
        self.numeric()
            .map(|n| n.kind())
            .unwrap_or(NumericKind::NotANumber)
    }
}

/// Split an optional leading sign. Returns `(negative, rest)`.
fn split_sign(lexical: &str) -> (bool, &str) {
    match lexical.as_bytes().first() {
        Some(b'-') => (true, &lexical[1..]),
        Some(b'+') => (false, &lexical[1..]),
        _ => (false, lexical),
    }
}

/// xsd:integer lexical space. Values beyond `i64` saturate.
fn parse_integer(lexical: &str) -> Option<i64> {
    let (negative, digits) = split_sign(lexical);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match lexical.parse::<i64>() {
        Ok(v) => Some(v),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// xsd:decimal lexical space: digits with at most one `.`, no exponent.
fn parse_decimal(lexical: &str) -> Option<f64> {
    let (_, body) = split_sign(lexical);
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.len() + frac_part.len() == 0 || !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }
    lexical.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// xsd:float / xsd:double lexical space, including `INF`, `-INF` and `NaN`.
fn parse_floating(lexical: &str) -> Option<f64> {
    match lexical {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        other => other.parse::<f64>().ok().filter(|v| v.is_finite()),
    }
}
