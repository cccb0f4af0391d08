use crate::document::{TargetDocument, INDEX_HTML};
use crate::error::CheckError;
use log::debug;

/// Vocabulary a portfolio page is expected to use
pub const PORTFOLIO_KEYWORDS: [&str; 4] = ["portfolio", "skills", "projects", "experience"];

/// How many of the keywords have to appear
pub const MIN_KEYWORDS: usize = 2;

/// Content must be strictly longer than this many characters, markup included
pub const MIN_CONTENT_CHARS: usize = 1000;

/// Tags the structure check looks for, in the order they are reported
const REQUIRED_TAGS: [&str; 3] = ["title", "body", "head"];

pub type CheckResult = Result<(), CheckError>;

pub fn check_file_exists() -> CheckResult {
    file_exists(&TargetDocument::locate())
}

pub fn check_structure() -> CheckResult {
    structure(&TargetDocument::locate())
}

pub fn check_content() -> CheckResult {
    content(&TargetDocument::locate())
}

pub fn check_well_formed() -> CheckResult {
    well_formed(&TargetDocument::locate())
}

pub fn file_exists(document: &TargetDocument) -> CheckResult {
    if !document.exists() {
        return Err(CheckError::assertion(format!("{} file not found", INDEX_HTML)));
    }
    Ok(())
}

pub fn structure(document: &TargetDocument) -> CheckResult {
    let markup = document.parse()?;

    for tag in REQUIRED_TAGS {
        if markup.find(tag).is_none() {
            return Err(CheckError::assertion(format!("HTML {} tag missing", tag)));
        }
    }

    Ok(())
}

pub fn content(document: &TargetDocument) -> CheckResult {
    let text = document.read()?;

    let found = find_keywords(&text);
    debug!("found portfolio keywords: {:?}", found);
    if found.len() < MIN_KEYWORDS {
        return Err(CheckError::assertion(format!(
            "Portfolio content missing. Found: {}",
            format_keywords(&found)
        )));
    }

    // Measured on the raw text, not the lower-cased copy
    if text.chars().count() <= MIN_CONTENT_CHARS {
        return Err(CheckError::assertion(
            "HTML content too short for a portfolio",
        ));
    }

    Ok(())
}

pub fn well_formed(document: &TargetDocument) -> CheckResult {
    let markup = document.parse()?;

    if markup.find("html").is_none() {
        return Err(CheckError::assertion("HTML root element missing"));
    }

    // Any closing tag anywhere is enough
    if !markup.serialize().contains("</") {
        return Err(CheckError::assertion("No closing tags found"));
    }

    Ok(())
}

/// Keywords contained in `text`, case-insensitively, in keyword order
pub fn find_keywords(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    PORTFOLIO_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lowered.contains(keyword))
        .collect()
}

/// Renders keywords as `['portfolio', 'skills']`
fn format_keywords(keywords: &[&str]) -> String {
    let quoted: Vec<String> = keywords
        .iter()
        .map(|keyword| format!("'{}'", keyword))
        .collect();
    format!("[{}]", quoted.join(", "))
}
