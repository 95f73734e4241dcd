// src/utils/html_debug.rs
use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::utils::error::AppError;

/// Escapes the characters that would otherwise be read as markup.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders resume text as an HTML page with the given byte ranges highlighted.
/// Overlapping ranges are dropped in favour of the one that starts first.
pub fn render_debug_html(text: &str, highlights: &[(usize, usize, &str)]) -> String {
    let mut debug_html =
        String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n");

    // CSS for highlight colors
    debug_html.push_str("body { font-family: monospace; white-space: pre-wrap; }\n");
    debug_html.push_str(".highlight-email { background-color: #FFFF00; }\n");
    debug_html.push_str(".highlight-phone { background-color: #FFA500; }\n");
    debug_html.push_str(".highlight-header { background-color: #90EE90; }\n");
    debug_html.push_str(".highlight-date { background-color: #ADD8E6; }\n");
    debug_html.push_str(".highlight-custom { background-color: #FFC0CB; }\n");
    debug_html.push_str("</style>\n</head>\n<body>\n");

    let mut last_pos = 0;
    let mut sorted_highlights = highlights.to_vec();
    sorted_highlights.sort_by_key(|h| (h.0, std::cmp::Reverse(h.1)));

    for (start, end, highlight_type) in sorted_highlights {
        if start < last_pos || end > text.len() || start >= end {
            continue;
        }
        debug_html.push_str(&escape_html(&text[last_pos..start]));

        let css_class = match highlight_type {
            "email" => "highlight-email",
            "phone" => "highlight-phone",
            "header" => "highlight-header",
            "date" => "highlight-date",
            _ => "highlight-custom",
        };

        debug_html.push_str(&format!("<span class=\"{}\" title=\"Position: {}-{}, Type: {}\">",
            css_class, start, end, highlight_type));
        debug_html.push_str(&escape_html(&text[start..end]));
        debug_html.push_str("</span>");

        last_pos = end;
    }

    if last_pos < text.len() {
        debug_html.push_str(&escape_html(&text[last_pos..]));
    }

    debug_html.push_str("\n</body>\n</html>");
    debug_html
}

/// Saves resume text to an HTML file with debug highlights
pub fn save_debug_html(
    text: &str,
    filename: &Path,
    highlights: &[(usize, usize, &str)],
) -> Result<(), AppError> {
    let mut file = File::create(filename)?;
    file.write_all(render_debug_html(text, highlights).as_bytes())?;

    tracing::info!("Saved debug HTML to {}", filename.display());
    Ok(())
}

/// Creates a debug version of the resume text with regex pattern matches highlighted
pub fn create_debug_html(
    text: &str,
    filename: &Path,
    patterns: &[(&str, &str)],
) -> Result<(), AppError> {
    use regex::Regex;

    let mut highlights = Vec::new();

    for (pattern, highlight_type) in patterns {
        let re = Regex::new(pattern).map_err(|e| {
            AppError::Config(format!("Invalid regex pattern '{}': {}", pattern, e))
        })?;

        for mat in re.find_iter(text) {
            highlights.push((mat.start(), mat.end(), *highlight_type));
        }
    }

    save_debug_html(text, filename, &highlights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_outside_and_inside_highlights() {
        let text = "<b>Jane</b> jane@x.io";
        let html = render_debug_html(text, &[(12, 21, "email")]);
        assert!(html.contains("&lt;b&gt;Jane&lt;/b&gt; "));
        assert!(html.contains(
            "<span class=\"highlight-email\" title=\"Position: 12-21, Type: email\">jane@x.io</span>"
        ));
    }

    #[test]
    fn overlapping_highlights_keep_the_first() {
        let text = "Jan 2020 - Mar 2022";
        let html = render_debug_html(text, &[(0, 19, "date"), (4, 8, "phone")]);
        assert_eq!(html.matches("<span").count(), 1);
        assert!(html.contains("highlight-date"));
    }

    #[test]
    fn create_debug_html_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("annotated.html");
        let patterns = [(r"\(\d{3}\) \d{3}-\d{4}", "phone")];
        create_debug_html("call (555) 123-4567", &path, &patterns).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("highlight-phone"));
    }

    #[test]
    fn invalid_pattern_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.html");
        let err = create_debug_html("text", &path, &[("(unclosed", "custom")]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
