//! Built-in validators
//!
//! Every validator follows the registry contract: it receives the rendered
//! field value and the rule parameter and returns an empty string when the
//! value is valid.
//!
//! `min` and `max` compare the value's length in bytes (not characters)
//! against an integer parameter, so `"é"` has length 2. A parameter that does
//! not parse as an integer counts as zero, so `min(abc)` never fails while
//! `max(abc)` fails for any non-empty value. A parameter outside the `i64`
//! range is unparsable too: `min(99999999999999999999)` counts as zero rather
//! than being clamped to the largest length.

use crate::Registry;
use once_cell::sync::Lazy;
use regex::Regex;

// Common regex patterns
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

static ALPHANUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Register every built-in validator
pub fn register_builtins(registry: &Registry) {
    registry.register("required", required);
    registry.register("min", min);
    registry.register("max", max);
    registry.register("email", email);
    registry.register("url", url);
    registry.register("uuid", uuid);
    registry.register("alpha", alpha);
    registry.register("alphanumeric", alphanumeric);
    registry.register("numeric", numeric);
}

fn length_param(param: &str) -> i64 {
    param.parse().unwrap_or(0)
}

fn byte_len(value: &str) -> i64 {
    i64::try_from(value.len()).unwrap_or(i64::MAX)
}

fn matches(regex: &Regex, value: &str, message: &str) -> String {
    if regex.is_match(value) {
        String::new()
    } else {
        message.to_string()
    }
}

/// Fails on an empty value
pub fn required(value: &str, _param: &str) -> String {
    if value.is_empty() {
        "required".to_string()
    } else {
        String::new()
    }
}

/// Fails when the value has fewer characters than the parameter
pub fn min(value: &str, param: &str) -> String {
    if byte_len(value) < length_param(param) {
        format!("min length is {}", param)
    } else {
        String::new()
    }
}

/// Fails when the value has more characters than the parameter
pub fn max(value: &str, param: &str) -> String {
    if byte_len(value) > length_param(param) {
        format!("max length is {}", param)
    } else {
        String::new()
    }
}

/// Validates email format
pub fn email(value: &str, _param: &str) -> String {
    matches(&EMAIL_REGEX, value, "invalid email")
}

/// Validates URL format
pub fn url(value: &str, _param: &str) -> String {
    matches(&URL_REGEX, value, "invalid url")
}

/// Validates UUID format
pub fn uuid(value: &str, _param: &str) -> String {
    matches(&UUID_REGEX, value, "invalid uuid")
}

/// Validates alphabetic characters only
pub fn alpha(value: &str, _param: &str) -> String {
    matches(&ALPHA_REGEX, value, "must contain only letters")
}

/// Validates alphanumeric characters only
pub fn alphanumeric(value: &str, _param: &str) -> String {
    matches(
        &ALPHANUMERIC_REGEX,
        value,
        "must contain only letters and numbers",
    )
}

/// Validates numeric characters only
pub fn numeric(value: &str, _param: &str) -> String {
    matches(&NUMERIC_REGEX, value, "must contain only numbers")
}
