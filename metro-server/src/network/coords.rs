//! Coordinate literal parsing.
//!
//! The network file stores station positions as text pairs like
//! `(28.6, 77.2)`. They are read with a strict numeric-pair parser: two
//! finite decimal numbers, comma separated, wrapped in parentheses.
//! Anything else is rejected.

use crate::domain::Coord;

/// Error returned when a coordinate literal is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate {literal:?}: {reason}")]
pub struct InvalidCoord {
    literal: String,
    reason: &'static str,
}

impl InvalidCoord {
    fn new(literal: &str, reason: &'static str) -> Self {
        Self {
            literal: literal.to_string(),
            reason,
        }
    }
}

/// Parse a `(x, y)` coordinate literal.
///
/// Whitespace around the parentheses and around each number is allowed.
///
/// # Examples
///
/// ```
/// use metro_server::network::parse_coord;
///
/// let c = parse_coord(" (28.6, -77.25) ").unwrap();
/// assert_eq!((c.x, c.y), (28.6, -77.25));
///
/// assert!(parse_coord("28.6, 77.2").is_err());
/// assert!(parse_coord("(1, 2, 3)").is_err());
/// assert!(parse_coord("(__import__('os'), 1)").is_err());
/// ```
pub fn parse_coord(literal: &str) -> Result<Coord, InvalidCoord> {
    let inner = literal
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| InvalidCoord::new(literal, "must be wrapped in parentheses"))?;

    let mut parts = inner.split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InvalidCoord::new(literal, "must contain exactly two numbers"));
    };

    Ok(Coord::new(parse_number(literal, x)?, parse_number(literal, y)?))
}

fn parse_number(literal: &str, part: &str) -> Result<f64, InvalidCoord> {
    let part = part.trim();

    // f64::from_str also accepts "inf" and "NaN"; only plain decimals are coordinates
    if !part
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return Err(InvalidCoord::new(literal, "components must be decimal numbers"));
    }

    let value: f64 = part
        .parse()
        .map_err(|_| InvalidCoord::new(literal, "components must be decimal numbers"))?;

    if !value.is_finite() {
        return Err(InvalidCoord::new(literal, "components must be finite"));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let c = parse_coord("(28.6, 77.2)").unwrap();
        assert_eq!(c, Coord::new(28.6, 77.2));

        let c = parse_coord("(0,0)").unwrap();
        assert_eq!(c, Coord::new(0.0, 0.0));

        let c = parse_coord("  ( -1.5 ,  +2 )  ").unwrap();
        assert_eq!(c, Coord::new(-1.5, 2.0));

        let c = parse_coord("(1e-1, 3)").unwrap();
        assert_eq!(c, Coord::new(0.1, 3.0));
    }

    #[test]
    fn reject_missing_parens() {
        assert!(parse_coord("28.6, 77.2").is_err());
        assert!(parse_coord("(28.6, 77.2").is_err());
        assert!(parse_coord("28.6, 77.2)").is_err());
        assert!(parse_coord("[28.6, 77.2]").is_err());
    }

    #[test]
    fn reject_wrong_arity() {
        assert!(parse_coord("()").is_err());
        assert!(parse_coord("(1)").is_err());
        assert!(parse_coord("(1, 2, 3)").is_err());
    }

    #[test]
    fn reject_non_numeric() {
        assert!(parse_coord("(a, 1)").is_err());
        assert!(parse_coord("(1, )").is_err());
        assert!(parse_coord("(1 + 2, 3)").is_err());
        assert!(parse_coord("(inf, 1)").is_err());
        assert!(parse_coord("(NaN, 1)").is_err());
        assert!(parse_coord("(1e999, 1)").is_err());
    }

    #[test]
    fn error_display() {
        let err = parse_coord("(1)").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid coordinate \"(1)\": must contain exactly two numbers"
        );
    }
}
