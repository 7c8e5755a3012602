pub mod numeral;

pub use numeral::{
    Magnitude, NumeralError, NumeralLiteral, Radix, is_plain_value, parse_numeral, parse_string,
};
