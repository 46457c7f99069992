use crate::config::grade;
use crate::error::{Error, Result};

/// Parse raw grade input and check it lies within the grade scale.
///
/// Surrounding whitespace is ignored. NaN and infinities parse but are
/// rejected as out of range.
pub fn validate_grade(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| Error::NotANumber(input.to_string()))?;
    validate_range(value)
}

/// Check an already-numeric grade against the grade scale.
pub fn validate_range(value: f64) -> Result<f64> {
    if (grade::MIN..=grade::MAX).contains(&value) {
        Ok(value)
    } else {
        Err(Error::OutOfRange(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_grades() {
        for g in [0.0, 0.5, 59.99, 60.0, 75.25, 100.0] {
            let parsed = validate_grade(&g.to_string()).unwrap();
            assert!((parsed - g).abs() < f64::EPSILON);
        }
        assert_eq!(validate_grade(" 85 ").unwrap(), 85.0);
        assert_eq!(validate_grade("1e2").unwrap(), 100.0);
    }

    #[test]
    fn test_out_of_range() {
        for input in ["-0.01", "-5", "100.5", "250", "inf", "-inf", "NaN"] {
            assert!(
                matches!(validate_grade(input), Err(Error::OutOfRange(_))),
                "{input} should be out of range"
            );
        }
    }

    #[test]
    fn test_not_a_number() {
        for input in ["", "   ", "abc", "7o", "12,5", "--1"] {
            assert!(
                matches!(validate_grade(input), Err(Error::NotANumber(_))),
                "{input:?} should not parse"
            );
        }
    }
}
