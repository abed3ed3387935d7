/// Difficulty: the exponent `n` of the target range `[1, 10^n]`.
///
/// Menu choices 1..=3 map to 10, 100 and 1000. Larger exponents are the
/// hidden "insane mode", accepted up to a configured maximum.

use std::num::IntErrorKind;

use crate::error::InputError;

/// Largest exponent whose power of ten fits in a `u64`.
pub const HARD_MAX_EXPONENT: u32 = 18;

/// Number of choices printed in the menu.
pub const MENU_CHOICES: u32 = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Difficulty {
    exponent: u32,
}

impl Difficulty {
    #[allow(dead_code)]
    pub const EASY: Difficulty = Difficulty { exponent: 1 };
    #[allow(dead_code)]
    pub const MEDIUM: Difficulty = Difficulty { exponent: 2 };
    #[allow(dead_code)]
    pub const HARD: Difficulty = Difficulty { exponent: 3 };

    /// Build from an exponent, rejecting 0 and anything above `max_exponent`.
    pub fn from_exponent(exponent: u32, max_exponent: u32) -> Result<Self, InputError> {
        let max = max_exponent.clamp(1, HARD_MAX_EXPONENT);
        if exponent == 0 || exponent > max {
            return Err(InputError::out_of_range(
                &exponent.to_string(),
                1,
                max.min(MENU_CHOICES) as u64,
            ));
        }
        Ok(Difficulty { exponent })
    }

    /// Parse a menu answer such as `"2"`.
    pub fn parse(input: &str, max_exponent: u32) -> Result<Self, InputError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(InputError::Empty);
        }
        let exponent: u32 = text.parse().map_err(|e: std::num::ParseIntError| {
            match e.kind() {
                IntErrorKind::PosOverflow => {
                    InputError::out_of_range(text, 1, max_exponent.clamp(1, MENU_CHOICES) as u64)
                }
                _ => InputError::not_a_number(text),
            }
        })?;
        Self::from_exponent(exponent, max_exponent)
    }

    pub fn exponent(self) -> u32 {
        self.exponent
    }

    /// Inclusive upper bound of the secret number.
    pub fn upper_bound(self) -> u64 {
        10u64.pow(self.exponent)
    }

    pub fn is_insane(self) -> bool {
        self.exponent > MENU_CHOICES
    }

    /// Width in digits of the largest possible guess.
    pub fn max_digits(self) -> usize {
        self.exponent as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices_map_to_powers_of_ten() {
        assert_eq!(Difficulty::parse("1", 3).unwrap().upper_bound(), 10);
        assert_eq!(Difficulty::parse("2", 3).unwrap().upper_bound(), 100);
        assert_eq!(Difficulty::parse(" 3\n", 3).unwrap().upper_bound(), 1000);
    }

    #[test]
    fn zero_and_garbage_rejected() {
        assert!(matches!(Difficulty::parse("0", 3), Err(InputError::OutOfRange { .. })));
        assert!(matches!(Difficulty::parse("two", 3), Err(InputError::NotANumber(_))));
        assert!(matches!(Difficulty::parse("-1", 3), Err(InputError::NotANumber(_))));
        assert!(matches!(
            Difficulty::parse("99999999999", 3),
            Err(InputError::OutOfRange { .. })
        ));
        assert_eq!(Difficulty::parse("   ", 3), Err(InputError::Empty));
    }

    #[test]
    fn insane_mode_is_bounded_by_config() {
        let d = Difficulty::parse("6", 6).unwrap();
        assert!(d.is_insane());
        assert_eq!(d.upper_bound(), 1_000_000);
        assert!(Difficulty::parse("7", 6).is_err());
        assert!(Difficulty::parse("4", 3).is_err());
    }

    #[test]
    fn hard_cap_holds_even_with_huge_config() {
        let top = Difficulty::from_exponent(HARD_MAX_EXPONENT, u32::MAX).unwrap();
        assert_eq!(top.upper_bound(), 1_000_000_000_000_000_000);
        assert!(Difficulty::from_exponent(HARD_MAX_EXPONENT + 1, u32::MAX).is_err());
    }

    #[test]
    fn hint_only_advertises_menu_range() {
        match Difficulty::parse("9", 6) {
            Err(InputError::OutOfRange { min, max, .. }) => assert_eq!((min, max), (1, 3)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn digit_width() {
        assert_eq!(Difficulty::EASY.max_digits(), 2);
        assert_eq!(Difficulty::HARD.max_digits(), 4);
    }
}
