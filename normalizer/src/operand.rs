use thiserror::Error;

/// The text after an operand's mode character isn't an integer.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("`{0}` is not a mode character followed by an integer")]
pub struct InvalidOperand(pub String);

/// Reduces an operand's value into the core.
///
/// An operand is an addressing-mode character followed by an integer, e.g. `#-3` or `$5`.
/// The integer is taken modulo `core_size` into `[0, core_size)`, so `#-3` becomes `#7997`
/// for the default core size. Operands which start with a digit have no mode character
/// and are returned unchanged, as is the empty operand of a one-field instruction.
/// Whitespace between the mode character and the number is allowed (`$     3`),
/// which is how pMARS lays out its load files.
///
/// The integer may have any number of digits; it is reduced one digit at a time.
///
/// `core_size` must be positive.
pub fn normalize_operand(operand: &str, core_size: i64) -> Result<String, InvalidOperand> {
    let mut chars = operand.chars();
    let mode = match chars.next() {
        None => return Ok(String::new()),
        Some(c) if c.is_ascii_digit() => return Ok(operand.to_string()),
        Some(c) => c,
    };

    let value = reduce(chars.as_str().trim(), core_size)
        .ok_or_else(|| InvalidOperand(operand.to_string()))?;
    Ok(format!("{}{}", mode, value))
}

/// `numeral mod core_size` in `[0, core_size)`, or `None` if `numeral` isn't a signed decimal integer.
fn reduce(numeral: &str, core_size: i64) -> Option<i64> {
    let (negative, digits) = match numeral.as_bytes().first() {
        Some(b'-') => (true, &numeral[1..]),
        Some(b'+') => (false, &numeral[1..]),
        _ => (false, numeral),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let modulus = i128::from(core_size);
    let magnitude = digits.bytes()
        .fold(0i128, |acc, b| (acc * 10 + i128::from(b - b'0')) % modulus);
    let value = if negative { (modulus - magnitude) % modulus } else { magnitude };
    Some(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::options::CORE_SIZE;

    fn normalize(operand: &str) -> String {
        normalize_operand(operand, CORE_SIZE).unwrap()
    }

    #[test]
    fn negative_values_wrap_into_core() {
        assert_eq!(normalize("#-3"), "#7997");
        assert_eq!(normalize("$-1"), "$7999");
        assert_eq!(normalize("@-8000"), "@0");
        assert_eq!(normalize("<-16001"), "<7999");
    }

    #[test]
    fn large_values_wrap_into_core() {
        assert_eq!(normalize("$8000"), "$0");
        assert_eq!(normalize("*8005"), "*5");
    }

    #[test]
    fn in_range_values_are_kept() {
        assert_eq!(normalize("$0"), "$0");
        assert_eq!(normalize("{7999"), "{7999");
    }

    #[test]
    fn explicit_plus_and_leading_zeros_are_dropped() {
        assert_eq!(normalize("$+12"), "$12");
        assert_eq!(normalize("#007"), "#7");
    }

    #[test]
    fn padding_after_mode_is_removed() {
        assert_eq!(normalize("$     3"), "$3");
        assert_eq!(normalize("#    -2"), "#7998");
    }

    #[test]
    fn bare_numbers_are_untouched() {
        assert_eq!(normalize("12345"), "12345");
        assert_eq!(normalize("0"), "0");
    }

    #[test]
    fn empty_operand_is_untouched() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn other_core_sizes() {
        assert_eq!(normalize_operand("#-1", 55440).unwrap(), "#55439");
        assert_eq!(normalize_operand("$20", 16).unwrap(), "$4");
    }

    #[test]
    fn values_wider_than_64_bits_still_wrap() {
        assert_eq!(normalize("$123456789012345678901234"), "$5234");
        assert_eq!(normalize("#-123456789012345678901234"), "#2766");
        assert_eq!(normalize_operand("@1000000000000000000000000000000", 55440).unwrap(), "@2080");
    }

    #[test]
    fn labels_are_rejected() {
        assert!(normalize_operand("$loop", CORE_SIZE).is_err());
        assert!(normalize_operand("#", CORE_SIZE).is_err());
        assert!(normalize_operand("#-", CORE_SIZE).is_err());
        assert_eq!(
            normalize_operand("$1 2", CORE_SIZE),
            Err(InvalidOperand("$1 2".to_string()))
        );
    }
}
