//! French phone number canonicalization and matching.
//!
//! Every phone number that enters a [`Fiche`](crate::Fiche) goes through
//! [`canonicalize`]. The canonical form is E.164: `+33` followed by the
//! nine-digit national significant number, e.g. `+33612345678`.
//!
//! Failure is a normal outcome here, not an error: `canonicalize` returns
//! `None` for anything that is not a plausible French number and never
//! panics, whatever the input.
//!
//! ```
//! use fichepack::phone::{canonicalize, match_key};
//!
//! assert_eq!(canonicalize("06 12 34 56 78").as_deref(), Some("+33612345678"));
//! assert_eq!(canonicalize("+33 (0)1 40 00 00 00").as_deref(), Some("+33140000000"));
//! assert_eq!(canonicalize("+44 20 7946 0958"), None);
//!
//! assert_eq!(match_key("0612345678"), match_key("+33612345678"));
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Country calling code for France.
pub const COUNTRY_CODE: &str = "33";

/// Length of a French national significant number.
pub const NATIONAL_LEN: usize = 9;

/// Number of trailing digits compared by [`match_key`].
pub const MATCH_DIGITS: usize = 9;

/// A French phone number embedded in free text: `+33` or `0`, a digit 1–9,
/// then four digit pairs with optional space/dot/dash separators.
///
/// Digit boundaries are checked in [`find_phone`]; letters may touch a match.
static FRENCH_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+33[\s.\-]?(?:\(0\)[\s.\-]?)?|0)[1-9](?:[\s.\-]?[0-9]{2}){4}").unwrap()
});

/// Canonicalizes a candidate phone string into `+33XXXXXXXXX`.
///
/// Accepted shapes (separators `space . - / ( )` are ignored):
/// - `+33 6 12 34 56 78`, `+33 (0)6 12 34 56 78`
/// - `0033 6 12 34 56 78`, `33612345678`
/// - `06 12 34 56 78`
/// - `612345678` (bare national number, as numeric JSON values arrive)
///
/// Anything containing letters, another country code, or the wrong number
/// of digits yields `None`.
pub fn canonicalize(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (international, body) = match trimmed.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let mut digits = String::with_capacity(body.len());
    for ch in body.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if !is_separator(ch) {
            return None;
        }
    }

    let national = if international {
        let rest = digits.strip_prefix(COUNTRY_CODE)?;
        strip_trunk_prefix(rest)
    } else if let Some(rest) = digits.strip_prefix("00") {
        strip_trunk_prefix(rest.strip_prefix(COUNTRY_CODE)?)
    } else if digits.len() == NATIONAL_LEN + 2 && digits.starts_with(COUNTRY_CODE) {
        &digits[COUNTRY_CODE.len()..]
    } else if digits.len() == NATIONAL_LEN + 1 {
        digits.strip_prefix('0')?
    } else {
        &digits
    };

    if !is_national_number(national) {
        return None;
    }

    Some(format!("+{COUNTRY_CODE}{national}"))
}

/// Returns `true` if the input canonicalizes.
pub fn is_plausible(input: &str) -> bool {
    canonicalize(input).is_some()
}

/// Returns the last `n` ASCII digits of `value`, or all of them if there are
/// fewer than `n`.
///
/// ```
/// use fichepack::phone::tail_digits;
///
/// assert_eq!(tail_digits("+33 6 12 34 56 78", 9), "612345678");
/// assert_eq!(tail_digits("12-34", 9), "1234");
/// assert_eq!(tail_digits("n/a", 9), "");
/// ```
pub fn tail_digits(value: &str, n: usize) -> String {
    let digits: Vec<char> = value.chars().filter(char::is_ascii_digit).collect();
    let start = digits.len().saturating_sub(n);
    digits[start..].iter().collect()
}

/// Computes the comparison key used by lookups.
///
/// The value is canonicalized when possible (raw otherwise) and reduced to
/// its last [`MATCH_DIGITS`] digits. Two numbers match when their keys are
/// equal and non-empty.
pub fn match_key(value: &str) -> String {
    match canonicalize(value) {
        Some(canonical) => tail_digits(&canonical, MATCH_DIGITS),
        None => tail_digits(value, MATCH_DIGITS),
    }
}

/// Finds the first French-phone-shaped substring in free text.
///
/// ```
/// use fichepack::phone::find_phone;
///
/// assert_eq!(find_phone("joignable au 07.11.22.33.44 le soir"), Some("07.11.22.33.44"));
/// assert_eq!(find_phone("Tel0612345678"), Some("0612345678"));
/// assert_eq!(find_phone("ref 123456"), None);
/// ```
///
/// A match glued to another digit is part of a longer number and is skipped.
pub fn find_phone(text: &str) -> Option<&str> {
    let mut start = 0;
    while let Some(m) = FRENCH_PHONE.find_at(text, start) {
        let digit_before = text[..m.start()].chars().next_back().is_some_and(|c| c.is_ascii_digit());
        let digit_after = text[m.end()..].chars().next().is_some_and(|c| c.is_ascii_digit());
        if !digit_before && !digit_after {
            return Some(m.as_str());
        }
        start = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '.' | '-' | '/' | '(' | ')')
}

/// `+33 0 6 12 ...` and `+33 (0)6 12 ...` carry a redundant trunk zero.
fn strip_trunk_prefix(rest: &str) -> &str {
    if rest.len() == NATIONAL_LEN + 1 {
        rest.strip_prefix('0').unwrap_or(rest)
    } else {
        rest
    }
}

fn is_national_number(national: &str) -> bool {
    national.len() == NATIONAL_LEN
        && national.bytes().all(|b| b.is_ascii_digit())
        && !national.starts_with('0')
}
