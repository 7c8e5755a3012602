use core::fmt;

use super::{UNRESOLVABLE, Value};

/// Significant digits kept when printing reals. Anything beyond this is
/// floating-point noise (`30 * 0.751` prints as `22.53`).
const REAL_SIGNIFICANT_DIGITS: usize = 15;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Real(v) => format_real(f, *v),
            Value::Text(s) => write!(f, "\"{}\"", s),
            Value::Vector(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "}}")
            }
            Value::Unresolvable => f.write_str(UNRESOLVABLE),
        }
    }
}

fn format_real(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if !value.is_finite() {
        return f.write_str(UNRESOLVABLE);
    }

    let rounded = format!("{:.*e}", REAL_SIGNIFICANT_DIGITS - 1, value)
        .parse::<f64>()
        .unwrap_or(value);
    // Avoid printing "-0.0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    let s = rounded.to_string();
    if s.contains('.') {
        write!(f, "{}", s)
    } else {
        write!(f, "{}.0", s)
    }
}
