//! Syntactic checks for contact fields.
//!
//! Both predicates are deliberately loose: they only look at which characters
//! appear, never at the structure of the value.

/// Number of digits in a phone number.
pub const PHONE_LEN: usize = 10;

/// Returns true when `phone` is exactly ten ASCII digits.
///
/// # Examples
/// ```
/// use agenda::validate::validate_phone;
///
/// assert!(validate_phone("1234567890"));
/// assert!(!validate_phone("123456789"));
/// assert!(!validate_phone("12345-7890"));
/// assert!(!validate_phone(""));
/// ```
pub fn validate_phone(phone: &str) -> bool {
    phone.len() == PHONE_LEN && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true when `email` contains both an `@` and a `.`.
///
/// The scan marks the pair as matched as soon as the second of the two
/// symbols shows up, whichever one came first, so position does not matter.
///
/// # Examples
/// ```
/// use agenda::validate::validate_email;
///
/// assert!(validate_email("juan@correo.com"));
/// assert!(validate_email("a.b@c"));
/// assert!(!validate_email("juan@correo"));
/// assert!(!validate_email("juan.correo"));
/// ```
pub fn validate_email(email: &str) -> bool {
    let mut has_at = false;
    let mut has_dot = false;
    let mut paired = false;

    for ch in email.chars() {
        match ch {
            '@' => {
                has_at = true;
                paired |= has_dot;
            }
            '.' => {
                has_dot = true;
                paired |= has_at;
            }
            _ => {}
        }
    }

    has_at && has_dot && paired
}
