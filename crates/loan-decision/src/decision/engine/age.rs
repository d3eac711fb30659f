use crate::config::DecisionConfig;
use crate::decision::domain::AgeRestriction;

const RISING_FROM_AGE: u32 = 19;
const FULL_FACTOR_FROM_AGE: u32 = 30;
const FULL_FACTOR_UNTIL_AGE: u32 = 50;
const FALLING_TO_AGE: u32 = 70;

const MIN_FACTOR: f64 = 0.5;
const MAX_FACTOR: f64 = 1.0;

/// Risk multiplier in `[0.5, 1.0]`: rises linearly from 19 to 30, holds at 1.0
/// through 50, then falls linearly towards 70. The configured age bounds decide
/// who is refused outright; the curve breakpoints stay fixed.
pub(crate) fn age_factor(age: u32, config: &DecisionConfig) -> Result<f64, AgeRestriction> {
    if age <= config.minimum_age {
        return Err(AgeRestriction::TooYoung);
    }
    if age >= config.maximum_age {
        return Err(AgeRestriction::TooOld);
    }

    let factor = if age < FULL_FACTOR_FROM_AGE {
        let slope = (MAX_FACTOR - MIN_FACTOR) / f64::from(FULL_FACTOR_FROM_AGE - RISING_FROM_AGE);
        MIN_FACTOR + (f64::from(age) - f64::from(RISING_FROM_AGE)) * slope
    } else if age <= FULL_FACTOR_UNTIL_AGE {
        MAX_FACTOR
    } else {
        let slope = (MAX_FACTOR - MIN_FACTOR) / f64::from(FALLING_TO_AGE - FULL_FACTOR_UNTIL_AGE);
        MAX_FACTOR - f64::from(age - FULL_FACTOR_UNTIL_AGE) * slope
    };

    Ok(factor.clamp(MIN_FACTOR, MAX_FACTOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor(age: u32) -> Result<f64, AgeRestriction> {
        age_factor(age, &DecisionConfig::default())
    }

    #[test]
    fn refuses_ages_on_or_beyond_the_bounds() {
        assert_eq!(factor(17), Err(AgeRestriction::TooYoung));
        assert_eq!(factor(18), Err(AgeRestriction::TooYoung));
        assert_eq!(factor(70), Err(AgeRestriction::TooOld));
        assert_eq!(factor(95), Err(AgeRestriction::TooOld));
    }

    #[test]
    fn follows_piecewise_curve() {
        assert_eq!(factor(19), Ok(0.5));
        assert_eq!(factor(30), Ok(1.0));
        assert_eq!(factor(50), Ok(1.0));
        let at_25 = factor(25).expect("within bounds");
        assert!((at_25 - 0.772_727).abs() < 1e-6, "{at_25}");
        let at_54 = factor(54).expect("within bounds");
        assert!((at_54 - 0.9).abs() < 1e-9, "{at_54}");
        let at_69 = factor(69).expect("within bounds");
        assert!((at_69 - 0.525).abs() < 1e-9, "{at_69}");
    }

    #[test]
    fn widened_bounds_keep_factor_in_range() {
        let config = DecisionConfig {
            minimum_age: 16,
            maximum_age: 80,
            ..DecisionConfig::default()
        };
        assert_eq!(age_factor(17, &config), Ok(0.5));
        assert_eq!(age_factor(75, &config), Ok(0.5));
    }
}
