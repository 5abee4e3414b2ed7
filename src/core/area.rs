use crate::domain::model::BoxDimensions;
use crate::utils::error::{AreaError, Result};
use num_bigint::BigInt;
use std::str::FromStr;

/// Surface area of a box: `2 * (x*y + x*h + y*h)`.
pub fn area(h: &BigInt, x: &BigInt, y: &BigInt) -> BigInt {
    (x * y + x * h + y * h) * 2u32
}

pub fn surface_area(dimensions: &BoxDimensions) -> BigInt {
    area(&dimensions.h, &dimensions.x, &dimensions.y)
}

/// Parses one input line as an integer of any size, the way Python's
/// `int()` reads a line.
///
/// Accepts surrounding whitespace, a leading sign, leading zeros and single
/// underscores between digits (`1_000`).
pub fn parse_dimension(line: usize, raw: &str) -> Result<BigInt> {
    let invalid = |reason: &str| AreaError::InputParseError {
        line,
        value: raw.trim_end_matches(['\r', '\n']).to_string(),
        reason: reason.to_string(),
    };

    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix(['+', '-']) {
        Some(rest) => (&trimmed[..1], rest),
        None => ("", trimmed),
    };

    if digits.is_empty() {
        return Err(invalid("no digits"));
    }

    let bytes = digits.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'0'..=b'9' => {}
            b'_' => {
                let between_digits = i > 0
                    && i + 1 < bytes.len()
                    && bytes[i - 1].is_ascii_digit()
                    && bytes[i + 1].is_ascii_digit();
                if !between_digits {
                    return Err(invalid("misplaced underscore"));
                }
            }
            _ => return Err(invalid("invalid digit")),
        }
    }

    let cleaned: String = sign.chars().chain(digits.chars().filter(|&c| c != '_')).collect();
    BigInt::from_str(&cleaned).map_err(|e| invalid(&e.to_string()))
}
