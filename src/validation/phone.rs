//! Bangladeshi mobile number validation.
//!
//! Accepts the three shapes customers actually type at checkout: the local
//! 11-digit form (`01712345678`) and the international form with or without
//! a leading plus (`+8801712345678`, `8801712345678`). Formatting noise
//! (spaces, hyphens, parentheses) is stripped before matching.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anchored full match. The operator digit range 3-9 is deliberately
    // permissive and must not be tightened to the live operator
    // assignment table without product confirmation.
    static ref BD_MOBILE: Regex =
        Regex::new(r"^(?:\+?880|0)1[3-9][0-9]{8}$").unwrap();
}

/// Check whether `raw` is a valid Bangladeshi mobile number.
///
/// Total over all inputs: malformed input yields `false`, never an error.
/// Deterministic, no I/O, no state.
pub fn is_valid_bd_mobile(raw: &str) -> bool {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return false;
    }
    BD_MOBILE.is_match(&normalized)
}

/// Strip whitespace, hyphens, and parentheses. Everything else is kept so
/// stray characters still fail the anchored match.
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_local_form() {
        assert!(is_valid_bd_mobile("01712345678"));
        assert!(is_valid_bd_mobile("01312345678"));
        assert!(is_valid_bd_mobile("01912345678"));
    }

    #[test]
    fn accepts_international_forms() {
        assert!(is_valid_bd_mobile("+8801812345678"));
        assert!(is_valid_bd_mobile("8801912345678"));
    }

    #[test]
    fn accepts_every_operator_digit() {
        for d in 3..=9 {
            let number = format!("01{}12345678", d);
            assert!(is_valid_bd_mobile(&number), "rejected {}", number);
        }
    }

    #[test]
    fn rejects_invalid_operator_digit() {
        assert!(!is_valid_bd_mobile("01212345678"));
        assert!(!is_valid_bd_mobile("01012345678"));
        assert!(!is_valid_bd_mobile("01112345678"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid_bd_mobile("0171234567")); // 10 digits
        assert!(!is_valid_bd_mobile("017123456789")); // 12 digits
        assert!(!is_valid_bd_mobile("+880181234567"));
    }

    #[test]
    fn strips_formatting_before_matching() {
        assert!(is_valid_bd_mobile("017-1234-5678"));
        assert!(is_valid_bd_mobile("(017) 1234 5678"));
        assert!(is_valid_bd_mobile(" +880 17 1234 5678 "));
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(!is_valid_bd_mobile(""));
        assert!(!is_valid_bd_mobile("   "));
        assert!(!is_valid_bd_mobile("not a number"));
        assert!(!is_valid_bd_mobile("01712x45678"));
        assert!(!is_valid_bd_mobile("+1 (415) 555-1212"));
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Bengali numerals are not accepted by the checkout field
        assert!(!is_valid_bd_mobile("০১৭১২৩৪৫৬৭৮"));
    }

    #[test]
    fn is_referentially_transparent() {
        let input = "017-1234-5678";
        assert_eq!(is_valid_bd_mobile(input), is_valid_bd_mobile(input));
    }
}
