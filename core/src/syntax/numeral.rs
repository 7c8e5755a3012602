//! Decoding of numeral literal text into typed values.
//!
//! Recognized forms:
//!
//! - decimal integers with optional `_` separators: `42`, `1_000`
//! - reals without exponent: `0.751`
//! - the keywords `true` / `false` (any case)
//! - based literals: `'h1F`, `8'hFF`, `'sd2`, `4'b1010`, `'7` (decimal when
//!   no radix letter follows the tick)
//!
//! A single leading `-` negates the decoded magnitude.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Radix {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    pub fn from_value(value: u32) -> Option<Self> {
        match value {
            2 => Some(Radix::Binary),
            8 => Some(Radix::Octal),
            10 => Some(Radix::Decimal),
            16 => Some(Radix::Hexadecimal),
            _ => None,
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'b' => Some(Radix::Binary),
            'o' => Some(Radix::Octal),
            'd' => Some(Radix::Decimal),
            'h' => Some(Radix::Hexadecimal),
            _ => None,
        }
    }

    /// The letter used after the tick in a based literal.
    pub fn letter(self) -> char {
        match self {
            Radix::Binary => 'b',
            Radix::Octal => 'o',
            Radix::Decimal => 'd',
            Radix::Hexadecimal => 'h',
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Magnitude {
    Integer(i64),
    Real(f64),
}

/// A decoded numeral.
///
/// `radix` is only meaningful for integer literals. `bit_width` is the
/// declared size of a based literal; it is not checked against the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumeralLiteral {
    pub magnitude: Magnitude,
    pub radix: Radix,
    pub bit_width: Option<u32>,
    pub signed: bool,
}

impl NumeralLiteral {
    pub fn integer(value: i64) -> Self {
        Self {
            magnitude: Magnitude::Integer(value),
            radix: Radix::Decimal,
            bit_width: None,
            signed: false,
        }
    }

    pub fn real(value: f64) -> Self {
        Self {
            magnitude: Magnitude::Real(value),
            radix: Radix::Decimal,
            bit_width: None,
            signed: false,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self.magnitude, Magnitude::Real(_))
    }

    fn negated(self) -> Self {
        let magnitude = match self.magnitude {
            Magnitude::Integer(v) => Magnitude::Integer(v.wrapping_neg()),
            Magnitude::Real(v) => Magnitude::Real(-v),
        };
        Self { magnitude, ..self }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    Empty,
    /// A character that is not a digit of the literal's radix.
    InvalidDigit { digit: char, radix: Radix },
    /// A tick or radix letter with nothing after it.
    MissingDigits,
    InvalidSize,
    /// The value does not fit in a signed 64-bit integer.
    Overflow,
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::Empty => write!(f, "empty literal"),
            NumeralError::InvalidDigit { digit, radix } => {
                write!(f, "'{}' is not a valid base-{} digit", digit, radix)
            }
            NumeralError::MissingDigits => write!(f, "literal has no digits"),
            NumeralError::InvalidSize => write!(f, "invalid literal size"),
            NumeralError::Overflow => write!(f, "literal does not fit in 64 bits"),
        }
    }
}

pub fn parse_numeral(text: &str) -> Result<NumeralLiteral, NumeralError> {
    let text = text.trim();
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, text),
    };
    if body.is_empty() {
        return Err(NumeralError::Empty);
    }

    let literal = if body.eq_ignore_ascii_case("true") {
        NumeralLiteral::integer(1)
    } else if body.eq_ignore_ascii_case("false") {
        NumeralLiteral::integer(0)
    } else if let Some((size, rest)) = body.split_once('\'') {
        parse_based(size, rest)?
    } else if let Some((whole, fraction)) = body.split_once('.') {
        parse_real(whole, fraction)?
    } else {
        NumeralLiteral::integer(parse_digits(body, Radix::Decimal)?)
    };

    Ok(if negative { literal.negated() } else { literal })
}

fn parse_based(size: &str, rest: &str) -> Result<NumeralLiteral, NumeralError> {
    let bit_width = if size.is_empty() {
        None
    } else {
        match parse_digits(size, Radix::Decimal) {
            Ok(width) if width > 0 => {
                Some(u32::try_from(width).map_err(|_| NumeralError::InvalidSize)?)
            }
            _ => return Err(NumeralError::InvalidSize),
        }
    };

    let (signed, rest) = match rest.strip_prefix(['s', 'S']) {
        Some(rest) => (true, rest),
        None => (false, rest),
    };

    let (radix, digits) = match rest.chars().next().and_then(Radix::from_letter) {
        Some(radix) => (radix, &rest[1..]),
        None => (Radix::Decimal, rest),
    };

    Ok(NumeralLiteral {
        magnitude: Magnitude::Integer(parse_digits(digits, radix)?),
        radix,
        bit_width,
        signed,
    })
}

fn parse_real(whole: &str, fraction: &str) -> Result<NumeralLiteral, NumeralError> {
    for half in [whole, fraction] {
        check_decimal_run(half)?;
    }

    let cleaned: String = whole
        .chars()
        .chain(core::iter::once('.'))
        .chain(fraction.chars())
        .filter(|&c| c != '_')
        .collect();
    cleaned
        .parse::<f64>()
        .map(NumeralLiteral::real)
        .map_err(|_| NumeralError::Overflow)
}

fn check_decimal_run(digits: &str) -> Result<(), NumeralError> {
    let radix = Radix::Decimal;
    match digits.chars().find(|&c| !c.is_ascii_digit() && c != '_') {
        Some(digit) => Err(NumeralError::InvalidDigit { digit, radix }),
        None if digits.starts_with('_') => Err(NumeralError::InvalidDigit { digit: '_', radix }),
        None if !digits.chars().any(|c| c.is_ascii_digit()) => Err(NumeralError::MissingDigits),
        None => Ok(()),
    }
}

fn parse_digits(digits: &str, radix: Radix) -> Result<i64, NumeralError> {
    let value = parse_digit_run(digits, radix)?;
    i64::try_from(value).map_err(|_| NumeralError::Overflow)
}

fn parse_digit_run(digits: &str, radix: Radix) -> Result<u64, NumeralError> {
    if digits.starts_with('_') {
        return Err(NumeralError::InvalidDigit { digit: '_', radix });
    }

    let base = u64::from(radix.value());
    let mut value: u64 = 0;
    let mut seen_digit = false;
    for c in digits.chars().filter(|&c| c != '_') {
        let digit = c
            .to_digit(radix.value())
            .ok_or(NumeralError::InvalidDigit { digit: c, radix })?;
        value = value
            .checked_mul(base)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(NumeralError::Overflow)?;
        seen_digit = true;
    }

    if seen_digit {
        Ok(value)
    } else {
        Err(NumeralError::MissingDigits)
    }
}

/// Returns the content of a double-quoted string literal, without quotes.
pub fn parse_string(text: &str) -> Option<&str> {
    let inner = text.trim().strip_prefix('"')?.strip_suffix('"')?;
    (!inner.contains('"')).then_some(inner)
}

/// True for text that carries no symbolic content: nothing at all, a single
/// numeral, or a single string literal.
pub fn is_plain_value(text: &str) -> bool {
    text.trim().is_empty() || parse_numeral(text).is_ok() || parse_string(text).is_some()
}
