// src/storage/mod.rs
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use serde::Serialize;
use crate::extractors::models::{ExperienceEntry, ResumeRecord};
use crate::utils::error::StorageError;

const CSV_HEADER: [&str; 9] = [
    "source",
    "name",
    "email",
    "phone",
    "skills",
    "match_percentage",
    "title",
    "company",
    "duration",
];

#[derive(Serialize)]
struct JsonExport<'a> {
    generated_at: String,
    resume_count: usize,
    resumes: &'a [ResumeRecord],
}

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns (creating it if needed) a subdirectory of the output directory
    pub fn subdir(&self, name: &str) -> Result<PathBuf, StorageError> {
        let dir = self.base_dir.join(name);
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }

    /// Saves all records as one CSV file, one row per experience entry
    pub fn save_csv(&self, records: &[ResumeRecord]) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("resumes_{}.csv", timestamp()));
        let file = fs::File::create(&file_path)?;

        write_csv(file, records)?;

        tracing::info!("Saved {} resume(s) to {}", records.len(), file_path.display());
        Ok(file_path)
    }

    /// Saves all records, with an export timestamp, as pretty-printed JSON
    pub fn save_json(&self, records: &[ResumeRecord]) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("resumes_{}.json", timestamp()));

        let export = JsonExport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            resume_count: records.len(),
            resumes: records,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        let mut file = fs::File::create(&file_path)?;
        file.write_all(json.as_bytes())?;

        tracing::info!("Saved {} resume(s) to {}", records.len(), file_path.display());
        Ok(file_path)
    }
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Writes the CSV export to any writer. Contact fields and skills repeat on
/// every row; a resume without experience still gets one row.
pub fn write_csv<W: Write>(writer: W, records: &[ResumeRecord]) -> Result<(), StorageError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    let no_experience = [ExperienceEntry::default()];

    for record in records {
        let contact = &record.parsed.contact;
        let skills = record.parsed.skills.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
        let match_percentage = record
            .skill_match
            .as_ref()
            .map(|m| format!("{:.2}", m.match_percentage))
            .unwrap_or_default();

        let entries = if record.parsed.experience.is_empty() {
            &no_experience[..]
        } else {
            &record.parsed.experience[..]
        };

        for entry in entries {
            wtr.write_record([
                record.source.as_str(),
                contact.name.as_deref().unwrap_or_default(),
                contact.email.as_deref().unwrap_or_default(),
                contact.phone.as_deref().unwrap_or_default(),
                skills.as_str(),
                match_percentage.as_str(),
                entry.title.as_str(),
                entry.company.as_str(),
                entry.duration.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
