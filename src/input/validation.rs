use std::fmt;

/// Outcome of checking one raw numeric candidate against a closed range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validation {
    Accepted(f64),
    Rejected(Rejection),
}

/// Why a candidate was turned away. The retry loop shows the message and
/// prompts again; rejections never travel past the input layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    NotANumber,
    BelowMinimum(f64),
    AboveMaximum(f64),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotANumber => write!(f, "not a number"),
            Rejection::BelowMinimum(min) => write!(f, "must be at least {}", min),
            Rejection::AboveMaximum(max) => write!(f, "must be at most {}", max),
        }
    }
}

/// Check a raw candidate against `min` and an optional `max`, both inclusive.
///
/// Infinities and NaN are treated the same as unparseable text; the tracker
/// has no use for them and they would poison every downstream ratio.
pub fn validate_bounded(raw: &str, min: f64, max: Option<f64>) -> Validation {
    let value: f64 = match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => return Validation::Rejected(Rejection::NotANumber),
    };
    if !value.is_finite() {
        return Validation::Rejected(Rejection::NotANumber);
    }
    if value < min {
        return Validation::Rejected(Rejection::BelowMinimum(min));
    }
    if let Some(max) = max {
        if value > max {
            return Validation::Rejected(Rejection::AboveMaximum(max));
        }
    }
    Validation::Accepted(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_inside_distance_bounds() {
        assert_eq!(
            validate_bounded("4999.99", 1.0, Some(5000.0)),
            Validation::Accepted(4999.99)
        );
        assert_eq!(
            validate_bounded("1.0", 1.0, Some(5000.0)),
            Validation::Accepted(1.0)
        );
        assert_eq!(
            validate_bounded("5000.0", 1.0, Some(5000.0)),
            Validation::Accepted(5000.0)
        );
    }

    #[test]
    fn test_rejects_above_maximum() {
        assert_eq!(
            validate_bounded("5000.01", 1.0, Some(5000.0)),
            Validation::Rejected(Rejection::AboveMaximum(5000.0))
        );
    }

    #[test]
    fn test_rejects_below_minimum() {
        assert_eq!(
            validate_bounded("0.99", 1.0, Some(5000.0)),
            Validation::Rejected(Rejection::BelowMinimum(1.0))
        );
        assert_eq!(
            validate_bounded("-3", 0.0, None),
            Validation::Rejected(Rejection::BelowMinimum(0.0))
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(
            validate_bounded("twelve", 0.0, None),
            Validation::Rejected(Rejection::NotANumber)
        );
        assert_eq!(
            validate_bounded("", 0.0, None),
            Validation::Rejected(Rejection::NotANumber)
        );
        assert_eq!(
            validate_bounded("12,5", 0.0, None),
            Validation::Rejected(Rejection::NotANumber)
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        assert_eq!(
            validate_bounded("inf", 0.0, None),
            Validation::Rejected(Rejection::NotANumber)
        );
        assert_eq!(
            validate_bounded("NaN", 0.0, None),
            Validation::Rejected(Rejection::NotANumber)
        );
    }

    #[test]
    fn test_unbounded_above() {
        // Budget and daily figures have no upper bound
        assert_eq!(
            validate_bounded("987654.25", 0.0, None),
            Validation::Accepted(987654.25)
        );
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            validate_bounded("  42.5 \n", 0.0, None),
            Validation::Accepted(42.5)
        );
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::NotANumber.to_string(), "not a number");
        assert_eq!(
            Rejection::BelowMinimum(1.0).to_string(),
            "must be at least 1"
        );
        assert_eq!(
            Rejection::AboveMaximum(5000.0).to_string(),
            "must be at most 5000"
        );
    }
}
