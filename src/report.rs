// src/report.rs
use crate::extractors::models::ResumeRecord;

const MISSING: &str = "N/A";

fn or_missing(value: &str) -> &str {
    if value.trim().is_empty() { MISSING } else { value }
}

/// Renders one processed resume for the terminal.
pub fn render_summary(record: &ResumeRecord) -> String {
    let parsed = &record.parsed;
    let contact = &parsed.contact;
    let name = contact.name.as_deref().unwrap_or("Unknown");
    let mut out = format!("=== {} ({}) ===\n", name, record.source);

    let contact_line: Vec<String> = [("Email", &contact.email), ("Phone", &contact.phone)]
        .iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| format!("{}: {}", label, v)))
        .collect();
    if !contact_line.is_empty() {
        out.push_str(&format!("{}\n", contact_line.join(" | ")));
    }

    if let Some(skill_match) = &record.skill_match {
        out.push_str(&format!("Match score: {:.2}%\n", skill_match.match_percentage));
        if !skill_match.matched_skills.is_empty() {
            out.push_str(&format!("  Matched: {}\n", join(skill_match.matched_skills.iter())));
        }
        if !skill_match.missing_skills.is_empty() {
            out.push_str(&format!("  Missing: {}\n", join(skill_match.missing_skills.iter())));
        }
    }

    if parsed.skills.is_empty() {
        out.push_str("Skills: none found\n");
    } else {
        out.push_str(&format!("Skills: {}\n", join(parsed.skills.iter())));
    }

    if parsed.experience.is_empty() {
        out.push_str("Experience: none found\n");
    } else {
        out.push_str("Experience:\n");
        for entry in &parsed.experience {
            out.push_str(&format!(
                "  - {} | {} | {}\n",
                or_missing(&entry.title),
                or_missing(&entry.company),
                or_missing(&entry.duration)
            ));
        }
    }

    if !parsed.education.is_empty() {
        out.push_str("Education:\n");
        for entry in &parsed.education {
            out.push_str(&format!(
                "  - {} | {} | {}\n",
                or_missing(&entry.degree),
                or_missing(&entry.institution),
                or_missing(&entry.year)
            ));
        }
    }

    if !parsed.projects.is_empty() {
        out.push_str("Projects:\n");
        for project in &parsed.projects {
            out.push_str(&format!("  - {}: {}\n", project.name, or_missing(&project.description)));
        }
    }

    out
}

fn join<'a>(items: impl Iterator<Item = &'a String>) -> String {
    items.map(String::as_str).collect::<Vec<_>>().join(", ")
}
