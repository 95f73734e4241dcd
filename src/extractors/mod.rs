// src/extractors/mod.rs
pub mod contact;
pub mod education;
pub mod experience;
pub mod matching;
pub mod models;
pub mod projects;
pub mod sections;
pub mod skills;

// Re-export key extraction types for convenience
pub use contact::extract_contact;
pub use education::extract_education;
pub use experience::extract_experience;
pub use matching::match_skills;
pub use models::{ParsedResume, ResumeRecord};
pub use projects::extract_projects;
pub use skills::{extract_skills, SkillCatalog};

/// Runs every heuristic pass over one resume's text. Pure and infallible:
/// anything that can't be recognised is left empty.
pub fn extract(text: &str, catalog: &SkillCatalog) -> ParsedResume {
    ParsedResume {
        contact: extract_contact(text),
        skills: extract_skills(text, catalog),
        experience: extract_experience(text),
        education: extract_education(text),
        projects: extract_projects(text),
    }
}

/// Regex patterns and highlight classes for the `--debug` HTML annotation.
pub fn debug_patterns() -> Vec<(&'static str, &'static str)> {
    vec![
        (contact::EMAIL_PATTERN, "email"),
        (contact::PHONE_PATTERN, "phone"),
        (sections::HEADER_LINE_PATTERN.as_str(), "header"),
        (experience::DATE_RANGE_PATTERN, "date"),
    ]
}

/// Extractor bound to one skill catalog.
pub struct ResumeExtractor {
    catalog: SkillCatalog,
}

impl ResumeExtractor {
    pub fn new(catalog: SkillCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn extract(&self, text: &str) -> ParsedResume {
        extract(text, &self.catalog)
    }

    /// Extracts the resume and, when a job description is given, scores it.
    pub fn process(
        &self,
        source: &str,
        text: &str,
        job_description: Option<&str>,
    ) -> ResumeRecord {
        let parsed = self.extract(text);
        let skill_match =
            job_description.map(|jd| match_skills(&parsed.skills, jd, &self.catalog));
        tracing::info!(
            "Parsed {}: name={:?}, {} skills, {} experience, {} education, {} projects",
            source,
            parsed.contact.name,
            parsed.skills.len(),
            parsed.experience.len(),
            parsed.education.len(),
            parsed.projects.len()
        );
        ResumeRecord::new(source, text, parsed, skill_match)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{ContactInfo, ExperienceEntry};

    const SAMPLE: &str = "\
John Smith
john.smith@email.com
(555) 123-4567

Skills: Python, SQL, Leadership

Experience
Senior Engineer at Acme Corp
Jan 2020 - Mar 2022
";

    fn reference_catalog() -> SkillCatalog {
        SkillCatalog::new(["Python", "SQL", "Java"])
    }

    #[test]
    fn end_to_end_scenario() {
        let parsed = extract(SAMPLE, &reference_catalog());
        assert_eq!(
            parsed.contact,
            ContactInfo {
                name: Some("John Smith".into()),
                email: Some("john.smith@email.com".into()),
                phone: Some("(555) 123-4567".into()),
            }
        );
        assert_eq!(
            parsed.skills.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["Python", "SQL"]
        );
        assert_eq!(
            parsed.experience,
            vec![ExperienceEntry {
                title: "Senior Engineer".into(),
                company: "Acme Corp".into(),
                duration: "Jan 2020 - Mar 2022".into(),
            }]
        );
        assert!(parsed.education.is_empty());
        assert!(parsed.projects.is_empty());
    }

    #[test]
    fn empty_input_gives_empty_resume() {
        assert_eq!(extract("", &reference_catalog()), ParsedResume::default());
    }

    #[test]
    fn extraction_is_idempotent() {
        let extractor = ResumeExtractor::new(reference_catalog());
        assert_eq!(extractor.extract(SAMPLE), extractor.extract(SAMPLE));
        assert_eq!(extractor.catalog().len(), 3);
    }

    #[test]
    fn arbitrary_unicode_never_panics() {
        let noisy = "💼 Ex­perience\n\u{200b}\nÉquipe — Société Générale\n2019–présent\n\u{feff}Skills: Pythön";
        let parsed = extract(noisy, &SkillCatalog::default());
        assert!(parsed.skills.is_empty());
    }

    #[test]
    fn process_attaches_match_only_with_job_description() {
        let extractor = ResumeExtractor::new(reference_catalog());
        let plain = extractor.process("cv.pdf", SAMPLE, None);
        assert!(plain.skill_match.is_none());

        let scored = extractor.process("cv.pdf", SAMPLE, Some("Java and Python"));
        assert_eq!(scored.match_percentage(), 50.0);
        assert_eq!(scored.source, "cv.pdf");
    }

    #[test]
    fn debug_patterns_compile() {
        for (pattern, _) in debug_patterns() {
            assert!(regex::Regex::new(pattern).is_ok(), "bad pattern {}", pattern);
        }
    }
}
