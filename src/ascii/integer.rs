use crate::map::MapExt;
use crate::parser::Parser;
use crate::terminal::{CharClass, Primitive};

/// Parser that matches one or more ASCII digits and yields their value
///
/// No sign is accepted. A digit run too large for `i64` is a failure rather
/// than a wrapped or clamped value.
pub fn integer() -> impl Parser<Output = i64> + Clone {
    Primitive::Class(CharClass::new(|c| c.is_ascii_digit(), 1, None))
        .try_map(|digits| digits.parse::<i64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParserExt;

    #[test]
    fn test_integer_with_trailing() {
        let result = integer().run("42abc");
        assert!(result.is_ok());
        assert_eq!(result.value(), Some(&42));
        assert_eq!(result.rest(), "abc");
    }

    #[test]
    fn test_integer_leading_zeros() {
        assert_eq!(integer().run("007").into_value(), Some(7));
    }

    #[test]
    fn test_integer_max() {
        let result = integer().run("9223372036854775807");
        assert!(result.is_complete());
        assert_eq!(result.into_value(), Some(i64::MAX));
    }

    #[test]
    fn test_integer_overflow_fails() {
        let result = integer().run("9223372036854775808");
        assert!(!result.is_ok());
        assert_eq!(result.rest(), "9223372036854775808");
    }

    #[test]
    fn test_integer_no_sign() {
        let result = integer().run("-5");
        assert!(!result.is_ok());
        assert_eq!(result.rest(), "-5");
    }

    #[test]
    fn test_integer_empty_fails() {
        assert!(!integer().run("").is_ok());
    }
}
