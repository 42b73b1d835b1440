//! CNPJ (Brazilian company tax ID) normalization and validation.

/// Strip everything but digits and left-pad with `0` to 14 characters.
/// Inputs with more than 14 digits are kept whole, never truncated.
pub fn normalize_cnpj(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() >= 14 {
        digits
    } else {
        format!("{digits:0>14}")
    }
}

/// Validate a CNPJ using the check-digit algorithm.
///
/// 14 digits where the last two are checksums over the preceding twelve
/// and thirteen, weights cycling 2..=9 from the rightmost digit.
pub fn validate_cnpj(cnpj: &str) -> bool {
    let digits: Vec<u32> = cnpj
        .chars()
        .filter(|c| c.is_ascii_digit())
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != 14 {
        return false;
    }

    // repdigit sequences satisfy the arithmetic but are never issued
    if digits.windows(2).all(|w| w[0] == w[1]) {
        return false;
    }

    check_digit(&digits[..12]) == digits[12] && check_digit(&digits[..13]) == digits[13]
}

fn check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .rev()
        .zip((2..=9).cycle())
        .map(|(d, w)| d * w)
        .sum();

    let rem = sum % 11;
    if rem < 2 { 0 } else { 11 - rem }
}

/// Format a normalized CNPJ as XX.XXX.XXX/XXXX-XX.
pub fn format_cnpj(cnpj: &str) -> String {
    let digits: String = cnpj.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 14 {
        return cnpj.to_string();
    }

    format!(
        "{}.{}.{}/{}-{}",
        &digits[0..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14]
    )
}
