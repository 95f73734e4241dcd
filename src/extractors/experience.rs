// src/extractors/experience.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::models::ExperienceEntry;
use crate::extractors::sections::{is_bullet, sections_of, SectionKind};

// One end of a date range: "Jan 2020", "Sept. 2019", "03/2021" or "2018".
macro_rules! date_point {
    () => {
        r"(?:(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+\d{4}|\d{1,2}/\d{4}|\d{4})"
    };
}

pub const DATE_RANGE_PATTERN: &str = concat!(
    r"(?i)\b",
    date_point!(),
    r"\s*(?:-|–|—|to|until)\s*(?:",
    date_point!(),
    r"|present|current|now|today)\b",
);

static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DATE_RANGE_PATTERN).expect("Failed to compile DATE_RANGE_RE")
});

// Checked in order; the first delimiter present splits title from company.
const HEADING_DELIMITERS: &[&str] = &[" at ", " @ ", " | ", " — ", " – ", " - ", ","];

const RESIDUAL_TRIM: &[char] = &['|', ',', '-', '–', '—', '(', ')', '[', ']'];

/// Groups the lines of every experience section into entries. A line with
/// a date range closes an entry; the heading lines collected since the
/// previous entry supply title and company.
pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();

    for section in sections_of(text, SectionKind::Experience) {
        let mut headings: Vec<&str> = Vec::new();
        // Index into `headings` where the current run began after a header,
        // blank line or bullet block. None once a date line closed an entry.
        let mut run_start = Some(0);

        for line in section.lines {
            if line.is_empty() || is_bullet(line) {
                run_start = Some(headings.len());
                continue;
            }
            if let Some(m) = DATE_RANGE_RE.find(line) {
                let residual = residual_heading(line, m.start(), m.end());
                let paired = run_start.is_some_and(|start| headings.len() == start + 2);
                let (title, company) = heading_parts(&headings, paired, &residual);
                tracing::trace!("Experience entry: '{}' / '{}' / '{}'", title, company, m.as_str());
                entries.push(ExperienceEntry {
                    title,
                    company,
                    duration: m.as_str().to_string(),
                });
                headings.clear();
                run_start = None;
            } else {
                headings.push(line);
            }
        }
    }

    tracing::debug!("Experience pass: {} entries", entries.len());
    entries
}

/// Text left on a date line once the date is removed, e.g. "Acme Corp" in
/// "Acme Corp | 2019 - Present". Text on both sides is joined with " | ".
fn residual_heading(line: &str, start: usize, end: usize) -> String {
    [&line[..start], &line[end..]]
        .iter()
        .map(|part| part.trim_matches(|c: char| c.is_whitespace() || RESIDUAL_TRIM.contains(&c)))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Splits a heading such as "Senior Engineer at Acme Corp" into title and company.
pub fn split_heading(line: &str) -> Option<(String, String)> {
    HEADING_DELIMITERS.iter().find_map(|delimiter| {
        let (title, company) = line.split_once(*delimiter)?;
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some((title.to_string(), company.trim().to_string()))
    })
}

/// Title and company for one entry. `paired` is set when the last two
/// headings are exactly the lines following a boundary, so they read as
/// title then company.
fn heading_parts(headings: &[&str], paired: bool, residual: &str) -> (String, String) {
    match headings {
        [.., last] => match split_heading(last) {
            Some(parts) => parts,
            None => match headings {
                [.., title, company] if paired => (title.to_string(), company.to_string()),
                _ => (last.to_string(), String::new()),
            },
        },
        [] if !residual.is_empty() => {
            split_heading(residual).unwrap_or_else(|| (residual.to_string(), String::new()))
        }
        [] => (String::new(), String::new()),
    }
}
