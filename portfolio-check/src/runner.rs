use crate::checks::{self, CheckResult};
use crate::document::TargetDocument;
use crate::error::CheckError;
use crate::summary::PageSummary;
use clap::ValueEnum;
use log::{debug, info};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Check {
    /// The page exists
    FileExists,
    /// title, head and body are present
    Structure,
    /// Portfolio keywords and enough content
    Content,
    /// A root element and closing tags
    WellFormed,
}

impl Check {
    pub const ALL: [Check; 4] = [
        Check::FileExists,
        Check::Structure,
        Check::Content,
        Check::WellFormed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Check::FileExists => "file-exists",
            Check::Structure => "structure",
            Check::Content => "content",
            Check::WellFormed => "well-formed",
        }
    }

    /// Whether the check needs the page's content
    pub fn reads_document(self) -> bool {
        !matches!(self, Check::FileExists)
    }

    pub fn run(self, document: &TargetDocument) -> CheckResult {
        match self {
            Check::FileExists => checks::file_exists(document),
            Check::Structure => checks::structure(document),
            Check::Content => checks::content(document),
            Check::WellFormed => checks::well_formed(document),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed { message: String },
    Errored { message: String },
    Skipped { reason: String },
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

impl From<CheckResult> for Outcome {
    fn from(result: CheckResult) -> Self {
        match result {
            Ok(()) => Outcome::Passed,
            Err(CheckError::Assertion { message }) => Outcome::Failed { message },
            Err(error) => Outcome::Errored {
                message: error.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub check: Check,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub document: String,
    pub results: Vec<CheckReport>,
    pub summary: Option<PageSummary>,
}

impl Report {
    /// True when every check ran and passed
    pub fn passed(&self) -> bool {
        self.results.iter().all(|result| result.outcome.is_passed())
    }

    pub fn outcome(&self, check: Check) -> Option<&Outcome> {
        self.results
            .iter()
            .find(|result| result.check == check)
            .map(|result| &result.outcome)
    }
}

/// Run `selected` against the document in the given order.
///
/// When the page is missing, checks that read it are skipped rather than
/// reported as errors; the existence check still runs and fails.
pub fn run_checks(document: &TargetDocument, selected: &[Check]) -> Report {
    let present = document.exists();

    let results = selected
        .iter()
        .map(|&check| {
            let outcome = if check.reads_document() && !present {
                Outcome::Skipped {
                    reason: format!("{} does not exist", document.path().display()),
                }
            } else {
                Outcome::from(check.run(document))
            };
            info!("{}: {:?}", check.name(), outcome);
            CheckReport { check, outcome }
        })
        .collect();

    let summary = if present {
        match document.read() {
            Ok(html) => Some(PageSummary::extract(&html)),
            Err(e) => {
                debug!("no summary: {}", e);
                None
            }
        }
    } else {
        None
    };

    Report {
        document: document.path().display().to_string(),
        results,
        summary,
    }
}

pub fn run_all(document: &TargetDocument) -> Report {
    run_checks(document, &Check::ALL)
}
