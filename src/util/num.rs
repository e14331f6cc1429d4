use crate::error::ParseError;

/// Magnitude suffixes, largest first.
const SUFFIXES: [(char, f64); 3] = [('B', 1e9), ('M', 1e6), ('K', 1e3)];

/// Parses a scalar literal with an optional magnitude suffix.
///
/// Accepts an optional sign and a decimal numeral, optionally followed by a
/// case-insensitive `K` (×1e3), `M` (×1e6) or `B` (×1e9), or by `%` (÷100).
/// Surrounding whitespace is ignored.
///
/// # Errors
/// Returns `ParseError::InvalidNumber` when the text is empty, when what
/// remains after stripping a suffix is not a decimal numeral, or when the
/// value does not fit in an `f64`.
///
/// # Example
/// ```
/// use fermi::util::num::parse_number;
///
/// assert_eq!(parse_number("2.7M").unwrap(), 2_700_000.0);
/// assert_eq!(parse_number("5m").unwrap(), 5_000_000.0);
/// assert_eq!(parse_number("  10K ").unwrap(), 10_000.0);
/// assert_eq!(parse_number("15%").unwrap(), 0.15);
/// assert!(parse_number("invalid").is_err());
/// assert!(parse_number("").is_err());
/// ```
pub fn parse_number(text: &str) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidNumber { literal: text.to_string() };

    let trimmed = text.trim();
    let (numeral, suffix) = match trimmed.char_indices().next_back() {
        Some((at, c)) if c == '%' || c.is_ascii_alphabetic() => {
            (trimmed[..at].trim_end(), Some(c.to_ascii_uppercase()))
        },
        Some(_) => (trimmed, None),
        None => return Err(invalid()),
    };

    if !is_decimal_numeral(numeral) {
        return Err(invalid());
    }
    let value: f64 = numeral.parse().map_err(|_| invalid())?;

    let scaled = match suffix {
        None => value,
        Some('%') => value / 100.0,
        Some(letter) => SUFFIXES.iter()
                                .find(|(suffix, _)| *suffix == letter)
                                .map(|(_, multiplier)| value * multiplier)
                                .ok_or_else(invalid)?,
    };

    // Literals too large for f64 parse to infinity.
    if scaled.is_finite() { Ok(scaled) } else { Err(invalid()) }
}

/// Returns `true` for `[+-]? digits [. digits]` with at least one digit
/// (either side of the point may be empty, but not both).
fn is_decimal_numeral(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    !(whole.is_empty() && fraction.is_empty())
    && whole.chars().all(|c| c.is_ascii_digit())
    && fraction.chars().all(|c| c.is_ascii_digit())
}

/// Formats a scalar with the largest magnitude suffix that keeps it below
/// 1000.
///
/// - Zero renders as `"0"`.
/// - Magnitudes below 1000 carry no suffix; whole numbers render as integers
///   and everything else with two decimals.
/// - Larger magnitudes are scaled into `[1, 1000)` by `K`, `M` or `B` and
///   always render with two decimals. Values of a thousand billion and up
///   stay in `B`.
/// - Negative values keep their sign; the suffix is chosen on the absolute
///   value.
///
/// Two decimals are lossy: a tiny non-zero value such as `0.001`
/// renders as `"0.00"`.
///
/// # Example
/// ```
/// use fermi::util::num::format_number;
///
/// assert_eq!(format_number(2_700_000.0), "2.70M");
/// assert_eq!(format_number(10_000.0), "10.00K");
/// assert_eq!(format_number(1_500_000_000.0), "1.50B");
/// assert_eq!(format_number(100.0), "100");
/// assert_eq!(format_number(2.5), "2.50");
/// assert_eq!(format_number(0.0), "0");
/// assert_eq!(format_number(999.999), "1.00K");
/// assert_eq!(format_number(-5_000_000.0), "-5.00M");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    if round_cents(magnitude) < 1e3 {
        return if value.fract() == 0.0 {
            format!("{value:.0}")
        } else {
            format!("{value:.2}")
        };
    }

    // Rounding to two decimals may push a value to 1000.00 of its suffix;
    // in that case the next larger suffix is used instead.
    let mut chosen = SUFFIXES.len() - 1;
    for (index, (_, multiplier)) in SUFFIXES.iter().enumerate().rev() {
        if magnitude >= *multiplier {
            chosen = index;
        }
    }
    while chosen > 0 && round_cents(magnitude / SUFFIXES[chosen].1) >= 1e3 {
        chosen -= 1;
    }

    let (suffix, multiplier) = SUFFIXES[chosen];
    format!("{:.2}{suffix}", value / multiplier)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Converts a sample count or index to `f64`.
///
/// Counts handled here are sample array lengths, far below `2^53`, so the
/// conversion is exact.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}
