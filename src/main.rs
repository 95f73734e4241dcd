// src/main.rs
mod utils;
mod document;
mod extractors;
mod report;
mod storage;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use utils::AppError;
use extractors::{ResumeExtractor, ResumeRecord, SkillCatalog};
use storage::StorageManager;

/// Environment fallback for `--skills-file`
const SKILLS_FILE_ENV: &str = "RESUME_SKILLS_FILE";

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ExportFormat {
    Csv,
    Json,
    Both,
}

/// Command Line Interface for the resume field extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Resume files to parse (PDF, DOCX or TXT)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Job description text to score each resume against (optional)
    #[arg(short, long, conflicts_with = "job_description_file")]
    job_description: Option<String>,

    /// File containing the job description (optional)
    #[arg(long)]
    job_description_file: Option<PathBuf>,

    /// Reference skill list, one skill per line (default: built-in list)
    #[arg(short, long)]
    skills_file: Option<PathBuf>,

    /// Output directory for exports
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,

    /// Reject uploads larger than this many bytes
    #[arg(long, default_value_t = document::DEFAULT_MAX_FILE_SIZE)]
    max_file_size: u64,

    /// Debug mode - save annotated HTML of each resume's text
    #[arg(short, long)]
    debug: bool,

    /// Don't print per-resume summaries
    #[arg(short, long)]
    quiet: bool,
}

/// Resolves the skill catalog from the CLI flag, then the environment, then the built-in list.
fn load_catalog(skills_file: Option<PathBuf>) -> Result<SkillCatalog, AppError> {
    let path = match skills_file {
        Some(path) => Some(path),
        None => std::env::var_os(SKILLS_FILE_ENV).map(PathBuf::from),
    };

    let Some(path) = path else {
        tracing::debug!("Using built-in skill list");
        return Ok(SkillCatalog::default());
    };

    let catalog = SkillCatalog::from_file(&path).map_err(|e| {
        AppError::Config(format!("Cannot read skills file {}: {}", path.display(), e))
    })?;
    if catalog.is_empty() {
        return Err(AppError::Config(format!("Skills file {} contains no skills", path.display())));
    }
    Ok(catalog)
}

fn load_job_description(args: &Args) -> Result<Option<String>, AppError> {
    let description = match (&args.job_description, &args.job_description_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Cannot read job description {}: {}", path.display(), e))
        })?),
        (None, None) => None,
    };
    Ok(description.filter(|text| !text.trim().is_empty()))
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Parse CLI Arguments
    let args = Args::parse();

    // 2. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging(args.quiet);
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Configuration
    let extractor = ResumeExtractor::new(load_catalog(args.skills_file.clone())?);
    tracing::info!("Skill catalog has {} entries", extractor.catalog().len());
    tracing::debug!("Skills: {:?}", extractor.catalog().names().collect::<Vec<_>>());
    let job_description = load_job_description(&args)?;

    // 4. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;
    tracing::info!("Writing exports to {}", storage.base_dir().display());
    let debug_dir = if args.debug { Some(storage.subdir("debug")?) } else { None };

    // 5. Process each upload
    let mut records: Vec<ResumeRecord> = Vec::new();
    let mut failure_count = 0;

    for path in &args.files {
        let loaded = match document::load_document(path, args.max_file_size).await {
            Ok(loaded) => {
                tracing::debug!("Loaded {} as {}", loaded.source, loaded.kind);
                loaded
            }
            Err(e) => {
                tracing::error!("Failed to load {}: {}", path.display(), e);
                failure_count += 1;
                continue;
            }
        };

        if let Some(dir) = &debug_dir {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| loaded.source.clone());
            let debug_path = dir.join(format!("{}_annotated.html", stem));
            let patterns = extractors::debug_patterns();
            if let Err(e) =
                utils::html_debug::create_debug_html(&loaded.text, &debug_path, &patterns)
            {
                tracing::warn!("Failed to create debug HTML: {}", e);
            }
        }

        records.push(extractor.process(&loaded.source, &loaded.text, job_description.as_deref()));
    }

    tracing::info!("Processing finished. Success: {}, Failures: {}", records.len(), failure_count);

    if records.is_empty() {
        return Err(AppError::Processing(format!(
            "Failed to parse any of the {} resume file(s)",
            failure_count
        )));
    }

    // Best match first when scoring against a job description
    if job_description.is_some() {
        records.sort_by(|a, b| b.match_percentage().total_cmp(&a.match_percentage()));
    }

    // 6. Display
    if !args.quiet {
        for record in &records {
            println!("{}", report::render_summary(record));
        }
    }

    // 7. Export
    if matches!(args.format, ExportFormat::Csv | ExportFormat::Both) {
        let path = storage.save_csv(&records)?;
        tracing::info!("CSV export: {}", path.display());
    }
    if matches!(args.format, ExportFormat::Json | ExportFormat::Both) {
        let path = storage.save_json(&records)?;
        tracing::info!("JSON export: {}", path.display());
    }

    Ok(())
}
