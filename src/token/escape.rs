//! Escape sequence validation for string literal payloads
//!
//! Inside a string literal a backslash must introduce exactly three decimal
//! digits, `\ddd`, naming a character code. Only codes that the escaping
//! convention actually produces are accepted: control characters and space
//! (000-032) and the range from `#` up to and including the backslash itself
//! (035-092).

/// Length of an escape sequence including the backslash.
const ESCAPE_LEN: usize = 4;

/// Whether an escaped character code lies in one of the accepted ranges.
pub fn is_valid_code(code: u32) -> bool {
    code <= 32 || (35..=92).contains(&code)
}

/// Validate every escape sequence in `payload`.
///
/// A payload without backslashes is trivially valid.
pub fn validate(payload: &str) -> bool {
    let bytes = payload.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] != b'\\' {
            pos += 1;
            continue;
        }

        let digits = match bytes.get(pos + 1..pos + ESCAPE_LEN) {
            Some(digits) if digits.iter().all(u8::is_ascii_digit) => digits,
            _ => return false,
        };

        let code = digits
            .iter()
            .fold(0, |acc, d| acc * 10 + u32::from(d - b'0'));

        if !is_valid_code(code) {
            return false;
        }

        pos += ESCAPE_LEN;
    }

    true
}
