// src/extractors/projects.rs

use crate::extractors::models::ProjectEntry;
use crate::extractors::sections::{is_bullet, sections_of, strip_bullet, SectionKind};

/// Pairs each project name line in a projects section with the line after it.
pub fn extract_projects(text: &str) -> Vec<ProjectEntry> {
    let mut projects = Vec::new();

    for section in sections_of(text, SectionKind::Projects) {
        let lines: Vec<&str> = section.lines.into_iter().filter(|l| !l.is_empty()).collect();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];
            if is_project_name(line) {
                let description = lines.get(i + 1).map(|l| strip_bullet(l)).unwrap_or_default();
                projects.push(ProjectEntry {
                    name: line.to_string(),
                    description: description.to_string(),
                });
                i += 2;
            } else {
                i += 1;
            }
        }
    }

    tracing::debug!("Projects pass: {} entries", projects.len());
    projects
}

fn is_project_name(line: &str) -> bool {
    !is_bullet(line)
        && !line.ends_with(':')
        && line.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_description_pairs() {
        let text = "\
Projects
Resume Parser
• Extracts fields from PDF resumes
Chess Engine
Bitboard move generation in Rust

Experience
Engineer at X";
        assert_eq!(
            extract_projects(text),
            vec![
                ProjectEntry {
                    name: "Resume Parser".into(),
                    description: "Extracts fields from PDF resumes".into(),
                },
                ProjectEntry {
                    name: "Chess Engine".into(),
                    description: "Bitboard move generation in Rust".into(),
                },
            ]
        );
    }

    #[test]
    fn skips_labels_and_stray_bullets() {
        let text = "Personal Projects\nTech used:\n- orphan bullet\nWeather Bot";
        assert_eq!(
            extract_projects(text),
            vec![ProjectEntry { name: "Weather Bot".into(), description: String::new() }]
        );
    }

    #[test]
    fn no_projects_section() {
        assert!(extract_projects("Resume Parser\nA tool").is_empty());
    }
}
