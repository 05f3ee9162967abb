/// Meaning of a single character in a normalized score string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowValue {
    pub value: u32,
    /// `false` for markers that record an event rather than a shot
    pub counts_as_arrow: bool,
}

impl ArrowValue {
    const fn shot(value: u32) -> Self {
        Self {
            value,
            counts_as_arrow: true,
        }
    }

    const NO_SHOT: Self = Self {
        value: 0,
        counts_as_arrow: false,
    };

    /// Look up an uppercase score character.
    ///
    /// Bonus codes `a`, `b` and `d` are written lowercase by the results
    /// service and appear here in their uppercased form.
    pub fn from_char(c: char) -> Option<Self> {
        let value = match c {
            '0'..='9' => Self::shot(c as u32 - '0' as u32),
            'M' => Self::shot(0),
            'T' | 'X' => Self::shot(10),
            'W' => Self::shot(5),
            'Y' => Self::shot(11),
            'Z' => Self::shot(6),
            'A' => Self::shot(11),
            'B' => Self::shot(12),
            'D' => Self::shot(14),
            'E' | '!' => Self::NO_SHOT,
            _ => return None,
        };
        Some(value)
    }
}

/// Characters that count toward the tens tally
pub fn is_ten(c: char) -> bool {
    matches!(c, 'T' | 'X' | 'Y')
}

/// Characters that count toward the X tally
pub fn is_x(c: char) -> bool {
    matches!(c, 'X' | 'Y')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(ArrowValue::from_char(c), Some(ArrowValue::shot(i as u32)));
        }
    }

    #[test]
    fn test_letter_codes() {
        assert_eq!(ArrowValue::from_char('M').map(|a| a.value), Some(0));
        assert_eq!(ArrowValue::from_char('T').map(|a| a.value), Some(10));
        assert_eq!(ArrowValue::from_char('X').map(|a| a.value), Some(10));
        assert_eq!(ArrowValue::from_char('W').map(|a| a.value), Some(5));
        assert_eq!(ArrowValue::from_char('Y').map(|a| a.value), Some(11));
        assert_eq!(ArrowValue::from_char('Z').map(|a| a.value), Some(6));
        assert_eq!(ArrowValue::from_char('A').map(|a| a.value), Some(11));
        assert_eq!(ArrowValue::from_char('B').map(|a| a.value), Some(12));
        assert_eq!(ArrowValue::from_char('D').map(|a| a.value), Some(14));
    }

    #[test]
    fn test_no_shot_markers() {
        for c in ['E', '!'] {
            let arrow = ArrowValue::from_char(c).unwrap();
            assert_eq!(arrow.value, 0);
            assert!(!arrow.counts_as_arrow);
        }
    }

    #[test]
    fn test_unknown_characters() {
        assert_eq!(ArrowValue::from_char('Q'), None);
        assert_eq!(ArrowValue::from_char('-'), None);
        assert_eq!(ArrowValue::from_char('x'), None);
    }

    #[test]
    fn test_tally_classes() {
        assert!(is_ten('T') && is_ten('X') && is_ten('Y'));
        assert!(!is_ten('9'));
        assert!(is_x('X') && is_x('Y'));
        assert!(!is_x('T'));
    }
}
