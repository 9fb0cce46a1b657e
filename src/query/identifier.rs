//! Identifier validation.
//!
//! Accepts a strict subset of legal SQL identifiers: an ASCII letter or
//! underscore followed by ASCII letters, digits or underscores. Delimited
//! identifiers containing other characters are rejected.

use once_cell::sync::Lazy;
use regex::Regex;

static VALID_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is a valid regex")
});

/// Returns true if the given string is suitable as an identifier.
pub fn valid_identifier_name(name: &str) -> bool {
    VALID_IDENTIFIER.is_match(name)
}
