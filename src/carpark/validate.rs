//! Registration-number syntax checks. Pure functions, presentation-layer
//! concern: the ledger itself accepts any non-empty registration.

/// Current-style UK plate: two letters, two digits, a space, three letters
/// (e.g. `LM55 TCU`). Expects an already-normalized (uppercased) string.
pub fn is_valid_uk_registration(registration: &str) -> bool {
    let bytes = registration.as_bytes();
    bytes.len() == 8
        && bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_uppercase()
        && bytes[2].is_ascii_digit()
        && bytes[3].is_ascii_digit()
        && bytes[4] == b' '
        && bytes[5].is_ascii_uppercase()
        && bytes[6].is_ascii_uppercase()
        && bytes[7].is_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_current_style_plates() {
        assert!(is_valid_uk_registration("LM55 TCU"));
        assert!(is_valid_uk_registration("AB12 CDE"));
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(!is_valid_uk_registration("lm55 tcu")); // not normalized
        assert!(!is_valid_uk_registration("LM55TCU")); // missing space
        assert!(!is_valid_uk_registration("L555 TCU")); // digit in letter slot
        assert!(!is_valid_uk_registration("LM55 TC")); // too short
        assert!(!is_valid_uk_registration("LM55 TCUU")); // too long
        assert!(!is_valid_uk_registration(""));
    }
}
