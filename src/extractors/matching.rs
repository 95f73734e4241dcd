// src/extractors/matching.rs

use serde::{Deserialize, Serialize};

use crate::extractors::models::SkillSet;
use crate::extractors::skills::{extract_skills, SkillCatalog};

/// How well a resume covers the catalog skills a job description asks for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub match_percentage: f64,
    pub matched_skills: SkillSet,
    pub missing_skills: SkillSet,
}

pub fn match_skills(
    resume_skills: &SkillSet,
    job_description: &str,
    catalog: &SkillCatalog,
) -> SkillMatch {
    if job_description.trim().is_empty() {
        return SkillMatch::default();
    }

    let job_skills = extract_skills(job_description, catalog);
    if job_skills.is_empty() {
        tracing::debug!("Job description mentions no catalog skills");
        return SkillMatch::default();
    }

    let matched_skills: SkillSet = job_skills.intersection(resume_skills).cloned().collect();
    let missing_skills: SkillSet = job_skills.difference(resume_skills).cloned().collect();
    let ratio = matched_skills.len() as f64 / job_skills.len() as f64;

    SkillMatch {
        match_percentage: (ratio * 10_000.0).round() / 100.0,
        matched_skills,
        missing_skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> SkillSet {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn partial_match_rounds_to_two_decimals() {
        let catalog = SkillCatalog::new(["Python", "SQL", "Java", "Docker"]);
        let result =
            match_skills(&skills(&["Python", "Docker"]), "Needs python, sql and java.", &catalog);
        assert_eq!(result.match_percentage, 33.33);
        assert_eq!(result.matched_skills, skills(&["Python"]));
        assert_eq!(result.missing_skills, skills(&["Java", "SQL"]));
    }

    #[test]
    fn full_match() {
        let catalog = SkillCatalog::new(["Python", "SQL"]);
        let result = match_skills(&skills(&["Python", "SQL"]), "Python and SQL", &catalog);
        assert_eq!(result.match_percentage, 100.0);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn empty_or_skill_free_description_scores_zero() {
        let catalog = SkillCatalog::default();
        assert_eq!(match_skills(&skills(&["Python"]), "   ", &catalog), SkillMatch::default());
        assert_eq!(
            match_skills(&skills(&["Python"]), "We value kindness", &catalog),
            SkillMatch::default()
        );
    }
}
