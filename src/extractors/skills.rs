// src/extractors/skills.rs

use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

use crate::extractors::models::SkillSet;

/// Built-in reference list, used when no skills file is configured.
pub const DEFAULT_SKILLS: &[&str] = &[
    "Python", "Java", "C++", "JavaScript", "HTML", "CSS", "SQL", "MongoDB",
    "AWS", "Docker", "Kubernetes", "Machine Learning", "Deep Learning",
    "TensorFlow", "PyTorch", "scikit-learn", "Pandas", "NumPy", "Django",
    "Flask", "React", "Angular", "Vue", "Node.js", "Git", "GitHub", "GitLab",
    "Jenkins", "CI/CD", "REST API", "GraphQL", "PostgreSQL", "MySQL", "NoSQL",
    "Data Analysis", "Data Visualization", "Tableau", "Power BI", "Excel",
];

#[derive(Debug, Clone)]
struct CatalogEntry {
    name: String,
    matcher: Regex,
}

/// The reference skill list. Immutable once built; each entry's matcher is
/// compiled up front so the catalog can be shared across extractions.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    entries: Vec<CatalogEntry>,
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }
}

impl SkillCatalog {
    /// Builds a catalog from skill names. Names are trimmed and deduplicated
    /// case-insensitively; the first spelling wins.
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let entries = skills
            .into_iter()
            .filter_map(|skill| {
                let name = skill.as_ref().trim();
                if name.is_empty() || !seen.insert(name.to_lowercase()) {
                    return None;
                }
                match Regex::new(&skill_pattern(name)) {
                    Ok(matcher) => Some(CatalogEntry { name: name.to_string(), matcher }),
                    Err(e) => {
                        tracing::warn!("Skipping skill '{}': {}", name, e);
                        None
                    }
                }
            })
            .collect();
        Self { entries }
    }

    /// Parses a skills file: one skill per line, blank lines and `#` comments ignored.
    pub fn parse(contents: &str) -> Self {
        Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::parse(&contents);
        tracing::info!("Loaded {} skills from {}", catalog.len(), path.as_ref().display());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Every catalog skill that occurs in `text` as a whole word, case-insensitively.
    pub fn find_in(&self, text: &str) -> SkillSet {
        self.entries
            .iter()
            .filter(|entry| {
                entry
                    .matcher
                    .find_iter(text)
                    .any(|m| is_whole_word(text, m.start(), m.end()))
            })
            .map(|entry| entry.name.clone())
            .collect()
    }
}

/// Case-insensitive literal pattern; inner whitespace matches any whitespace
/// run so skills broken across lines still count.
fn skill_pattern(name: &str) -> String {
    let words = name
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    format!("(?i){}", words)
}

// `+` and `#` count as word characters so "C" does not match inside "C++" or "C#".
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '+' || c == '#'
}

fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Membership test of every catalog skill against the text.
pub fn extract_skills(text: &str, catalog: &SkillCatalog) -> SkillSet {
    let found = catalog.find_in(text);
    tracing::debug!("Skills pass: {} of {} catalog skills found", found.len(), catalog.len());
    found
}
