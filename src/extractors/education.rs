// src/extractors/education.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::models::EducationEntry;
use crate::extractors::sections::{sections_of, strip_bullet, SectionKind};

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)(?:^|[^a-z0-9])(?:",
        r"bachelors?|masters?|ph\.?d|doctor(?:ate)?|associates?|diploma",
        r"|b\.?tech|m\.?tech|b\.?sc|m\.?sc|b\.e\.|m\.e\.|bca|mca|mba",
        r"|b\.s\.|m\.s\.|b\.a\.|m\.a\.|b\.arch|m\.arch|b\.com|m\.com",
        r")(?:$|[^a-z0-9])",
    ))
    .expect("Failed to compile DEGREE_RE")
});

static YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:19|20)\d{2}\b").expect("Failed to compile YEAR_RE")
});

// Lines after a degree line searched for institution and year.
const LOOKAHEAD_LINES: usize = 2;

/// Builds one entry per degree line found in an education section.
pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let mut entries = Vec::new();

    for section in sections_of(text, SectionKind::Education) {
        let lines: Vec<&str> = section
            .lines
            .iter()
            .map(|line| strip_bullet(line))
            .filter(|line| !line.is_empty())
            .collect();

        for (i, line) in lines.iter().enumerate() {
            if !DEGREE_RE.is_match(line) {
                continue;
            }

            // Stop looking ahead at the next degree line
            let following: Vec<&str> = lines[i + 1..]
                .iter()
                .take(LOOKAHEAD_LINES)
                .take_while(|l| !DEGREE_RE.is_match(l))
                .copied()
                .collect();

            let institution = following
                .iter()
                .find(|l| !is_year_only(l))
                .map(|l| l.to_string())
                .unwrap_or_default();

            let year = std::iter::once(*line)
                .chain(following.iter().copied())
                .find_map(last_year)
                .unwrap_or_default();

            entries.push(EducationEntry {
                degree: line.to_string(),
                institution,
                year,
            });
        }
    }

    tracing::debug!("Education pass: {} entries", entries.len());
    entries
}

/// The last year on a line: the graduation year in "2012 - 2016".
fn last_year(line: &str) -> Option<String> {
    YEAR_RE.find_iter(line).last().map(|m| m.as_str().to_string())
}

fn is_year_only(line: &str) -> bool {
    YEAR_RE.is_match(line)
        && YEAR_RE
            .replace_all(line, "")
            .chars()
            .all(|c| !c.is_alphabetic())
}
