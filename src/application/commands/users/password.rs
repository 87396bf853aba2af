use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::message::{Message, MessageKey};

pub(crate) const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_SIMILARITY: f64 = 0.7;

const COMMON_PASSWORDS: &[&str] = &[
    "123456", "123456789", "12345678", "password", "qwerty", "123123", "12345",
    "1234567890", "1234567", "000000", "111111", "abc123", "password1", "iloveyou",
    "qwerty123", "1q2w3e4r", "qwertyuiop", "654321", "555555", "dragon", "monkey",
    "sunshine", "princess", "letmein", "football", "baseball", "welcome", "admin",
    "admin123", "login", "master", "shadow", "superman", "trustno1", "passw0rd",
    "starwars", "whatever", "michael", "jennifer", "charlie", "donald", "freedom",
    "hello123", "qazwsx", "zaq12wsx", "1qaz2wsx", "asdfghjkl", "zxcvbnm", "computer",
    "internet", "p@ssw0rd", "password123", "changeme", "secret", "access", "batman",
    "welcome1", "mustang", "696969", "121212", "987654321", "11111111", "88888888",
    "123qwe", "q1w2e3r4", "aa123456", "portfolio", "photography", "photographer",
];

/// Password rules applied on change and on account creation:
/// minimum length, not entirely numeric, not a well-known password and not
/// too similar to the user's own attributes.
pub(crate) fn validate_password(password: &str, user_attributes: &[&str]) -> ApplicationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(new_password_error(
            Message::new(MessageKey::PasswordTooShort).with_arg(MIN_PASSWORD_LENGTH),
        ));
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(new_password_error(MessageKey::PasswordEntirelyNumeric.into()));
    }
    let lowered = password.to_lowercase();
    if COMMON_PASSWORDS.contains(&lowered.trim()) {
        return Err(new_password_error(MessageKey::PasswordTooCommon.into()));
    }
    for attribute in user_attributes.iter().filter(|a| !a.trim().is_empty()) {
        let attribute = attribute.to_lowercase();
        let too_similar = std::iter::once(attribute.as_str())
            .chain(attribute.split(|c: char| !c.is_alphanumeric()))
            .filter(|part| !part.is_empty())
            .any(|part| similarity(&lowered, part) >= MAX_SIMILARITY);
        if too_similar {
            return Err(new_password_error(MessageKey::PasswordTooSimilar.into()));
        }
    }
    Ok(())
}

fn new_password_error(message: Message) -> ApplicationError {
    ApplicationError::field("new_password", message)
}

/// Ratcliff/Obershelp similarity: twice the number of matching characters
/// divided by the total length.
fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = (2 * matching_chars(&a, &b)) as f64 / total as f64;
    ratio
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (start_a, start_b, len) = longest_common_run(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..start_a], &b[..start_b])
        + matching_chars(&a[start_a + len..], &b[start_b + len..])
}

fn longest_common_run(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut previous = vec![0_usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        let mut current = vec![0_usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                current[j + 1] = previous[j] + 1;
                if current[j + 1] > best.2 {
                    best = (i + 1 - current[j + 1], j + 1 - current[j + 1], current[j + 1]);
                }
            }
        }
        previous = current;
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(result: ApplicationResult<()>) -> MessageKey {
        result.unwrap_err().message_key().unwrap()
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert_eq!(key(validate_password("Ab1!", &[])), MessageKey::PasswordTooShort);
    }

    #[test]
    fn numeric_passwords_are_rejected() {
        assert_eq!(
            key(validate_password("8675309123", &[])),
            MessageKey::PasswordEntirelyNumeric
        );
    }

    #[test]
    fn common_passwords_are_rejected() {
        assert_eq!(key(validate_password("Password123", &[])), MessageKey::PasswordTooCommon);
    }

    #[test]
    fn passwords_close_to_username_are_rejected() {
        assert_eq!(
            key(validate_password("aliceSmith1", &["alicesmith"])),
            MessageKey::PasswordTooSimilar
        );
        assert!(validate_password("violet-harbor-92", &["alicesmith"]).is_ok());
    }

    #[test]
    fn similarity_matches_sequence_matcher() {
        assert!((similarity("abcd", "bcde") - 0.75).abs() < f64::EPSILON);
        assert!(similarity("abc", "xyz").abs() < f64::EPSILON);
    }
}
