use crate::config::DecisionConfig;

/// Credit-worthiness bucket keyed by the last four digits of the personal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditSegment {
    Debt,
    Segment1,
    Segment2,
    Segment3,
}

impl CreditSegment {
    pub const fn from_last_four_digits(digits: u16) -> Self {
        match digits {
            0..=2499 => Self::Debt,
            2500..=4999 => Self::Segment1,
            5000..=7499 => Self::Segment2,
            _ => Self::Segment3,
        }
    }

    /// Segment for a personal code, or `None` when it does not end in four digits.
    pub fn for_personal_code(personal_code: &str) -> Option<Self> {
        let start = personal_code.len().checked_sub(4)?;
        let tail = personal_code.get(start..)?;
        if !tail.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        tail.parse::<u16>().ok().map(Self::from_last_four_digits)
    }

    /// Scaling factor for the loan ceiling; zero for debtors.
    pub const fn credit_modifier(self, config: &DecisionConfig) -> i64 {
        match self {
            Self::Debt => 0,
            Self::Segment1 => config.segment_1_credit_modifier,
            Self::Segment2 => config.segment_2_credit_modifier,
            Self::Segment3 => config.segment_3_credit_modifier,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Debt => "debt",
            Self::Segment1 => "segment_1",
            Self::Segment2 => "segment_2",
            Self::Segment3 => "segment_3",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_edges() {
        let cases = [
            (0, CreditSegment::Debt),
            (2499, CreditSegment::Debt),
            (2500, CreditSegment::Segment1),
            (4999, CreditSegment::Segment1),
            (5000, CreditSegment::Segment2),
            (7499, CreditSegment::Segment2),
            (7500, CreditSegment::Segment3),
            (9999, CreditSegment::Segment3),
        ];
        for (digits, expected) in cases {
            assert_eq!(CreditSegment::from_last_four_digits(digits), expected, "{digits}");
        }
    }

    #[test]
    fn reads_tail_of_personal_code() {
        assert_eq!(
            CreditSegment::for_personal_code("50307170158"),
            Some(CreditSegment::Debt)
        );
        assert_eq!(
            CreditSegment::for_personal_code("38501015521"),
            Some(CreditSegment::Segment2)
        );
        assert_eq!(CreditSegment::for_personal_code("123"), None);
        assert_eq!(CreditSegment::for_personal_code("3850101552x"), None);
        assert_eq!(CreditSegment::for_personal_code("38501015-21"), None);
    }

    #[test]
    fn modifiers_follow_configuration() {
        let config = DecisionConfig::default();
        assert_eq!(CreditSegment::Debt.credit_modifier(&config), 0);
        assert_eq!(CreditSegment::Segment1.credit_modifier(&config), 100);
        assert_eq!(CreditSegment::Segment2.credit_modifier(&config), 300);
        assert_eq!(CreditSegment::Segment3.credit_modifier(&config), 1000);
    }
}
