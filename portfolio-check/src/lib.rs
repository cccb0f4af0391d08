pub mod checks;
pub mod document;
pub mod error;
pub mod markup;
pub mod runner;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::checks::{
    check_content, check_file_exists, check_structure, check_well_formed, find_keywords,
    CheckResult, MIN_CONTENT_CHARS, MIN_KEYWORDS, PORTFOLIO_KEYWORDS,
};
pub use crate::document::{TargetDocument, INDEX_HTML};
pub use crate::error::CheckError;
pub use crate::markup::{ElementRef, Markup};
pub use crate::runner::{run_all, run_checks, Check, CheckReport, Outcome, Report};
pub use crate::summary::PageSummary;
