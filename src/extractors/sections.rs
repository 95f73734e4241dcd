// src/extractors/sections.rs

use once_cell::sync::Lazy;

/// The resume sections the extractors care about. Every other known
/// heading is `Other` and only serves to close the previous section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Experience,
    Education,
    Skills,
    Projects,
    Other,
}

const EXPERIENCE_HEADERS: &[&str] = &[
    "experience",
    "work experience",
    "professional experience",
    "relevant experience",
    "employment",
    "employment history",
    "work history",
    "career history",
];

const EDUCATION_HEADERS: &[&str] = &[
    "education",
    "academic background",
    "academics",
    "qualifications",
];

const SKILLS_HEADERS: &[&str] = &[
    "skills",
    "technical skills",
    "core competencies",
    "key skills",
];

const PROJECT_HEADERS: &[&str] = &[
    "projects",
    "personal projects",
    "academic projects",
    "project experience",
];

const OTHER_HEADERS: &[&str] = &[
    "summary",
    "professional summary",
    "objective",
    "career objective",
    "profile",
    "about me",
    "contact",
    "contact information",
    "certifications",
    "awards",
    "honors",
    "achievements",
    "languages",
    "interests",
    "hobbies",
    "references",
    "publications",
    "volunteer experience",
];

/// Multi-line regex matching any header line, used to annotate debug output.
pub static HEADER_LINE_PATTERN: Lazy<String> = Lazy::new(|| {
    let alternatives = [
        EXPERIENCE_HEADERS,
        EDUCATION_HEADERS,
        SKILLS_HEADERS,
        PROJECT_HEADERS,
        OTHER_HEADERS,
    ]
    .concat()
    .iter()
    .map(|h| regex::escape(h).replace(' ', r"[ \t]+"))
    .collect::<Vec<_>>()
    .join("|");
    format!(r"(?im)^[ \t]*(?:{})[ \t]*:?[ \t]*$", alternatives)
});

/// A run of lines under one recognised header, header line excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub kind: SectionKind,
    pub lines: Vec<&'a str>,
}

/// Classifies a line that consists solely of a heading (optionally followed by a colon).
pub fn classify_header(line: &str) -> Option<SectionKind> {
    let trimmed = line.trim().trim_end_matches(':').trim();
    if trimmed.is_empty() || trimmed.len() > 40 {
        return None;
    }
    let normalized = trimmed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let table = [
        (EXPERIENCE_HEADERS, SectionKind::Experience),
        (EDUCATION_HEADERS, SectionKind::Education),
        (SKILLS_HEADERS, SectionKind::Skills),
        (PROJECT_HEADERS, SectionKind::Projects),
        (OTHER_HEADERS, SectionKind::Other),
    ];
    table
        .iter()
        .find(|(headers, _)| headers.contains(&normalized.as_str()))
        .map(|(_, kind)| *kind)
}

/// Splits text into header-delimited sections. Lines before the first
/// header belong to no section and are dropped. Lines are trimmed; blank
/// lines are kept as empty strings.
pub fn split_sections(text: &str) -> Vec<Section<'_>> {
    let mut sections: Vec<Section> = Vec::new();

    for line in text.lines() {
        if let Some(kind) = classify_header(line) {
            tracing::trace!("Section header {:?}: '{}'", kind, line.trim());
            sections.push(Section { kind, lines: Vec::new() });
            continue;
        }
        if let Some(current) = sections.last_mut() {
            current.lines.push(line.trim());
        }
    }

    sections
}

/// Returns every section of the given kind, in document order.
pub fn sections_of(text: &str, kind: SectionKind) -> Vec<Section<'_>> {
    split_sections(text)
        .into_iter()
        .filter(|s| s.kind == kind)
        .collect()
}

const BULLET_MARKERS: &[char] = &['•', '-', '*', '▪', '◦', '·', '‣', '●', '○'];

pub fn is_bullet(line: &str) -> bool {
    line.trim_start().starts_with(BULLET_MARKERS)
}

pub fn strip_bullet(line: &str) -> &str {
    line.trim().trim_start_matches(BULLET_MARKERS).trim()
}
