//! Field-level checks run before any request is issued. Each returns
//! the inline message to render, or `None` when the field is valid.

use std::sync::LazyLock;

use regex::Regex;

use crate::http::types::Category;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn email(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("Email is required".to_string())
    } else if !EMAIL_RE.is_match(value.trim()) {
        Some("Invalid email format".to_string())
    } else {
        None
    }
}

pub fn password(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Password is required".to_string())
    } else if value.len() < MIN_PASSWORD_LEN {
        Some(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ))
    } else {
        None
    }
}

pub fn confirm_password(password: &str, confirmation: &str) -> Option<String> {
    if confirmation.is_empty() {
        Some("Confirm Password is required".to_string())
    } else if confirmation != password {
        Some("Passwords must match".to_string())
    } else {
        None
    }
}

pub fn name(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("Name is required".to_string())
    } else {
        None
    }
}

pub fn category(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Category is required".to_string())
    } else if value.parse::<Category>().is_err() {
        Some("Select a valid category".to_string())
    } else {
        None
    }
}

/// Validates the raw amount input and hands back the parsed value so
/// the caller builds the payload from the same parse.
pub fn amount(value: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Amount is required".to_string());
    }
    match trimmed.parse::<f64>() {
        Err(_) => Err("Amount must be a number".to_string()),
        Ok(parsed) if !parsed.is_finite() => Err("Amount must be a number".to_string()),
        Ok(parsed) if parsed <= 0.0 => Err("Amount must be positive".to_string()),
        Ok(parsed) => Ok(parsed),
    }
}

pub fn date(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("Date is required".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in ["", "plain", "a@b", "@b.co", "a@.co", "a b@c.co", "a@b c.co"] {
            assert!(email(bad).is_some(), "accepted {bad:?}");
        }
        for good in ["a@b.co", "user.name@example.com", "x+y@sub.domain.org"] {
            assert!(email(good).is_none(), "rejected {good:?}");
        }
    }

    #[test]
    fn password_requires_six_characters() {
        assert_eq!(password("").unwrap(), "Password is required");
        assert!(password("12345").is_some());
        assert!(password("123456").is_none());
    }

    #[test]
    fn confirmation_must_equal_password() {
        assert!(confirm_password("secret1", "secret1").is_none());
        assert_eq!(
            confirm_password("secret1", "secret2").unwrap(),
            "Passwords must match"
        );
        assert!(confirm_password("secret1", "").is_some());
    }

    #[test]
    fn amount_must_be_positive_and_numeric() {
        assert!(amount("").is_err());
        assert!(amount("abc").is_err());
        assert!(amount("0").is_err());
        assert!(amount("-5").is_err());
        assert!(amount("NaN").is_err());
        assert!(amount("inf").is_err());
        assert_eq!(amount("25.50").unwrap(), 25.5);
        assert_eq!(amount(" 10 ").unwrap(), 10.0);
    }

    #[test]
    fn category_must_come_from_the_fixed_set() {
        // a missing and an invalid selection read differently
        assert_eq!(category("").unwrap(), "Category is required");
        assert_eq!(category("Rent").unwrap(), "Select a valid category");
        assert!(category("Food").is_none());
        assert!(category("College Fees").is_none());
    }

    #[test]
    fn name_and_date_are_required() {
        assert!(name("  ").is_some());
        assert!(name("Ana").is_none());
        assert!(date("").is_some());
        assert!(date("2024-03-05").is_none());
    }
}
