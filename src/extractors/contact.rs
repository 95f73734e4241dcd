// src/extractors/contact.rs

use once_cell::sync::Lazy;
use regex::{Match, Regex};

use crate::extractors::models::ContactInfo;
use crate::extractors::sections::classify_header;

pub const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

// Optional "+CC", an area/leading group (parenthesised or not), then two digit groups.
// Separators never cross a line break.
pub const PHONE_PATTERN: &str =
    r"(?:\+\d{1,3}[ \t.-]?)?(?:\(\d{2,4}\)|\d{2,4})[ \t.-]?\d{3,4}[ \t.-]?\d{3,4}";

const PHONE_MIN_DIGITS: usize = 7;
const PHONE_MAX_DIGITS: usize = 15; // E.164

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(EMAIL_PATTERN).expect("Failed to compile EMAIL_RE")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(PHONE_PATTERN).expect("Failed to compile PHONE_RE")
});

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)https?://|www\.|linkedin\.com|github\.com/").expect("Failed to compile URL_RE")
});

/// Scans the text for an email address, a phone number and a name candidate.
pub fn extract_contact(text: &str) -> ContactInfo {
    let email = EMAIL_RE.find(text).map(|m| m.as_str().to_string());
    let phone = find_phone(text).map(|m| m.as_str().trim().to_string());
    let name = find_name(text);

    tracing::debug!("Contact pass: name={:?} email={:?} phone={:?}", name, email, phone);
    ContactInfo { name, email, phone }
}

/// First phone-shaped match with a plausible digit count that is not cut
/// out of a longer digit run or made only of years.
fn find_phone(text: &str) -> Option<Match<'_>> {
    PHONE_RE.find_iter(text).find(|m| {
        let digits = m.as_str().chars().filter(char::is_ascii_digit).count();
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
            && !before.is_some_and(|c| c.is_ascii_digit())
            && !after.is_some_and(|c| c.is_ascii_digit())
            && !is_year_run(m.as_str())
    })
}

// "2019-2020 2021"
fn is_year_run(candidate: &str) -> bool {
    candidate
        .split(|c: char| !c.is_ascii_digit())
        .filter(|group| !group.is_empty())
        .all(|group| group.len() == 4 && (group.starts_with("19") || group.starts_with("20")))
}

/// First non-empty line that isn't contact data, a link or a section header.
fn find_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find(|line| {
            line.chars().any(char::is_alphabetic)
                && !EMAIL_RE.is_match(line)
                && find_phone(line).is_none()
                && !URL_RE.is_match(line)
                && classify_header(line).is_none()
        })
        .map(str::to_string)
}
