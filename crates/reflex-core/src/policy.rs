//! Credential policy - pure validation over registration and login input.
//!
//! These rules are a compatibility contract: the password alphabet, the
//! minimum length, and the role encodings accepted here must not drift.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use thiserror::Error;

/// Characters that count as "special" in a password, and the only
/// non-alphanumeric characters a password may contain at all.
const PASSWORD_SPECIALS: &str = "@$!%*?&";

const MIN_PASSWORD_LENGTH: usize = 5;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// The role field was present but not one of `true`, `false`, `0`, `1`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("role must be true|false or 0|1")]
pub struct InvalidRole;

/// Syntactic email check: local-part@domain with a dotted domain and no
/// whitespace. No DNS or deliverability lookup.
pub fn email_is_valid(candidate: &str) -> bool {
    EMAIL_REGEX.is_match(candidate)
}

/// Password strength check.
///
/// At least 5 characters, with at least one lowercase letter, one uppercase
/// letter, one digit, and one of `@$!%*?&` - and nothing outside
/// `[A-Za-z0-9@$!%*?&]`.
pub fn password_is_strong(candidate: &str) -> bool {
    candidate.chars().count() >= MIN_PASSWORD_LENGTH
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c))
        && candidate.chars().any(|c| c.is_ascii_lowercase())
        && candidate.chars().any(|c| c.is_ascii_uppercase())
        && candidate.chars().any(|c| c.is_ascii_digit())
        && candidate.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

/// Parse the loosely-typed role field from a request body.
///
/// Accepts JSON booleans and the numbers `0`/`1`. Absent and `null` parse
/// as `None`. Everything else - notably truthy strings like `"8"` - is
/// rejected rather than coerced.
pub fn parse_role(candidate: Option<&Value>) -> Result<Option<bool>, InvalidRole> {
    match candidate {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(0) => Ok(Some(false)),
            Some(1) => Ok(Some(true)),
            _ => Err(InvalidRole),
        },
        Some(_) => Err(InvalidRole),
    }
}

/// Resolve the role stored at registration.
///
/// An omitted or falsy role resolves to elevated (`true`); only an explicit
/// truthy role passes through. Explicit `false` is therefore not
/// representable at registration time.
pub fn effective_role(parsed: Option<bool>) -> bool {
    parsed.filter(|elevated| *elevated).unwrap_or(true)
}

/// Parse a submitted reaction time into whole milliseconds.
///
/// Accepts a JSON number or a numeric string; a `,` decimal separator is
/// normalized to `.` before parsing. Valid iff finite, integral, and > 0.
pub fn parse_reaction_millis(raw: &Value) -> Option<i64> {
    let value = match raw {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.replace(',', ".").parse::<f64>().ok()?,
        _ => return None,
    };

    if !value.is_finite() || value <= 0.0 || value.fract() != 0.0 {
        return None;
    }

    Some(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_plain_addresses() {
        assert!(email_is_valid("test@example.com"));
        assert!(email_is_valid("a@b.com"));
        assert!(email_is_valid("first.last+tag@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!email_is_valid("invalidemail"));
        assert!(!email_is_valid("missing@dot"));
        assert!(!email_is_valid("two words@example.com"));
        assert!(!email_is_valid("@example.com"));
        assert!(!email_is_valid("user@"));
    }

    #[test]
    fn strong_passwords_pass() {
        assert!(password_is_strong("Password123!"));
        // exactly five characters, one of each class
        assert!(password_is_strong("Pa1$b"));
    }

    #[test]
    fn weak_passwords_fail() {
        assert!(!password_is_strong("pass"));
        assert!(!password_is_strong("password"));
        assert!(!password_is_strong("PASSWORD1!"));
        assert!(!password_is_strong("Password!"));
        assert!(!password_is_strong("Password1"));
        // four characters even with every class present
        assert!(!password_is_strong("Pa1$"));
    }

    #[test]
    fn passwords_outside_the_alphabet_fail() {
        assert!(!password_is_strong("Pass word1!"));
        assert!(!password_is_strong("Password1#"));
    }

    #[test]
    fn role_accepts_bools_and_bits() {
        assert_eq!(parse_role(Some(&json!(true))), Ok(Some(true)));
        assert_eq!(parse_role(Some(&json!(false))), Ok(Some(false)));
        assert_eq!(parse_role(Some(&json!(1))), Ok(Some(true)));
        assert_eq!(parse_role(Some(&json!(0))), Ok(Some(false)));
        assert_eq!(parse_role(None), Ok(None));
        assert_eq!(parse_role(Some(&Value::Null)), Ok(None));
    }

    #[test]
    fn role_rejects_everything_else() {
        assert_eq!(parse_role(Some(&json!("8"))), Err(InvalidRole));
        assert_eq!(parse_role(Some(&json!("true"))), Err(InvalidRole));
        assert_eq!(parse_role(Some(&json!(2))), Err(InvalidRole));
        assert_eq!(parse_role(Some(&json!([1]))), Err(InvalidRole));
    }

    #[test]
    fn registration_role_defaults_to_elevated() {
        assert!(effective_role(None));
        assert!(effective_role(Some(false)));
        assert!(effective_role(Some(true)));
    }

    #[test]
    fn reaction_millis_accepts_positive_integers() {
        assert_eq!(parse_reaction_millis(&json!(1500)), Some(1500));
        assert_eq!(parse_reaction_millis(&json!("1500")), Some(1500));
        assert_eq!(parse_reaction_millis(&json!(1.0)), Some(1));
    }

    #[test]
    fn reaction_millis_rejects_the_rest() {
        assert_eq!(parse_reaction_millis(&json!(-100)), None);
        assert_eq!(parse_reaction_millis(&json!(0)), None);
        assert_eq!(parse_reaction_millis(&json!(1.5)), None);
        assert_eq!(parse_reaction_millis(&json!("1,5")), None);
        assert_eq!(parse_reaction_millis(&json!("abc")), None);
        assert_eq!(parse_reaction_millis(&json!(true)), None);
        assert_eq!(parse_reaction_millis(&Value::Null), None);
    }
}
