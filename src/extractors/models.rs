// src/extractors/models.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::extractors::matching::SkillMatch;

/// Characters of raw text kept on each record for reference.
const PREVIEW_CHARS: usize = 1000;

/// Skill names as spelled in the catalog. Ordered so output is stable.
pub type SkillSet = BTreeSet<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String, // Verbatim date span, e.g. "Jan 2020 - Mar 2022"
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
}

/// Everything the heuristics could find in one resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub contact: ContactInfo,
    pub skills: SkillSet,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
}

/// One processed upload, as displayed and exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub source: String,
    pub parsed: ParsedResume,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_match: Option<SkillMatch>,
    pub raw_text_preview: String,
}

impl ResumeRecord {
    pub fn new(
        source: impl Into<String>,
        text: &str,
        parsed: ParsedResume,
        skill_match: Option<SkillMatch>,
    ) -> Self {
        Self {
            source: source.into(),
            parsed,
            skill_match,
            raw_text_preview: preview(text),
        }
    }

    pub fn match_percentage(&self) -> f64 {
        self.skill_match.as_ref().map_or(0.0, |m| m.match_percentage)
    }
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_on_char_boundaries() {
        let long = "é".repeat(PREVIEW_CHARS + 5);
        let record = ResumeRecord::new("cv.pdf", &long, ParsedResume::default(), None);
        assert_eq!(record.raw_text_preview.chars().count(), PREVIEW_CHARS + 3);
        assert!(record.raw_text_preview.ends_with("..."));

        let short = ResumeRecord::new("cv.pdf", "short text", ParsedResume::default(), None);
        assert_eq!(short.raw_text_preview, "short text");
        assert_eq!(short.match_percentage(), 0.0);
    }
}
