use super::fixtures;
use super::{missing_index, padded, write_index};
use crate::checks::{content, file_exists, structure, well_formed, CheckResult};
use crate::document::TargetDocument;
use crate::error::CheckError;
use std::io;

fn assertion_message(result: Result<(), CheckError>) -> String {
    match result {
        Err(CheckError::Assertion { message }) => message,
        other => panic!("expected an assertion failure, got {:?}", other),
    }
}

// Full sample page passes every check
#[test]
fn test_sample_portfolio_passes() {
    let html = fixtures::load_html_fixture("portfolio");
    let (_dir, document) = write_index(&html);

    assert!(file_exists(&document).is_ok());
    assert!(structure(&document).is_ok());
    assert!(content(&document).is_ok());
    assert!(well_formed(&document).is_ok());
}

#[test]
fn test_missing_file() {
    let (_dir, document) = missing_index();

    let message = assertion_message(file_exists(&document));
    assert!(message.contains("index.html file not found"));
}

#[test]
fn test_reading_missing_file_is_an_error_not_an_assertion() {
    let (_dir, document) = missing_index();

    match structure(&document) {
        Err(CheckError::Unreadable { source, .. }) => {
            assert_eq!(source.kind(), io::ErrorKind::NotFound)
        }
        other => panic!("expected an unreadable error, got {:?}", other),
    }
    assert!(!content(&document).unwrap_err().is_assertion());
}

#[test]
fn test_invalid_utf8_is_an_error() {
    let (_dir, document) = write_index(b"<h\xff\xfe");

    let err = well_formed(&document).unwrap_err();
    assert!(!err.is_assertion());
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn test_minimal_structure_passes() {
    let (_dir, document) =
        write_index("<html><head><title>T</title></head><body></body></html>");
    assert!(structure(&document).is_ok());
}

#[test]
fn test_missing_body() {
    let html = fixtures::load_html_fixture("missing_body");
    let (_dir, document) = write_index(&html);

    let message = assertion_message(structure(&document));
    assert!(message.contains("body"));
    assert_eq!(message, "HTML body tag missing");
}

#[test]
fn test_missing_title_is_reported_first() {
    let (_dir, document) = write_index("<p>nothing structural here</p>");
    assert_eq!(
        assertion_message(structure(&document)),
        "HTML title tag missing"
    );
}

#[test]
fn test_missing_head() {
    let (_dir, document) =
        write_index("<html><title>T</title><body><p>hi</p></body></html>");
    assert_eq!(
        assertion_message(structure(&document)),
        "HTML head tag missing"
    );
}

#[test]
fn test_structure_tolerates_broken_markup() {
    let (_dir, document) = write_index(
        "<HTML><Head><title>T</title><body><div><p>unclosed <b>tags</i></div></span>",
    );
    assert!(structure(&document).is_ok());
    assert!(well_formed(&document).is_ok());
}

#[test]
fn test_two_keywords_and_enough_content_pass() {
    let (_dir, document) = write_index(padded("<p>My PORTFOLIO and Skills</p>", 1500));
    assert!(content(&document).is_ok());
}

#[test]
fn test_one_keyword_lists_what_was_found() {
    let (_dir, document) = write_index(padded("<p>Portfolio</p>", 1500));

    let message = assertion_message(content(&document));
    assert_eq!(message, "Portfolio content missing. Found: ['portfolio']");
}

#[test]
fn test_no_keywords_lists_empty() {
    let (_dir, document) = write_index(padded("<p>hello</p>", 1500));

    let message = assertion_message(content(&document));
    assert!(message.ends_with("Found: []"));
}

#[test]
fn test_short_content_fails_even_with_all_keywords() {
    let (_dir, document) = write_index(padded(
        "portfolio skills projects experience",
        999,
    ));

    let message = assertion_message(content(&document));
    assert_eq!(message, "HTML content too short for a portfolio");
}

#[test]
fn test_content_length_boundary() {
    let (_dir, at_limit) = write_index(padded("portfolio skills", 1000));
    assert!(content(&at_limit).is_err());

    let (_dir2, over_limit) = write_index(padded("portfolio skills", 1001));
    assert!(content(&over_limit).is_ok());
}

#[test]
fn test_content_length_counts_characters() {
    // 'é' is two bytes but one character
    let prefix = format!("portfolio skills {}", "é".repeat(600));
    let (_dir, document) = write_index(padded(&prefix, 1000));
    assert!(content(&document).is_err());
}

#[test]
fn test_empty_file_is_not_well_formed() {
    let (_dir, document) = write_index("");

    let message = assertion_message(well_formed(&document));
    assert_eq!(message, "HTML root element missing");
}

#[test]
fn test_page_without_root_is_not_well_formed() {
    let html = fixtures::load_html_fixture("fragment");
    let (_dir, document) = write_index(&html);

    assert_eq!(
        assertion_message(well_formed(&document)),
        "HTML root element missing"
    );
}

#[test]
fn test_unclosed_root_is_closed_when_serialized() {
    let (_dir, document) = write_index("<html><body>never closed");
    assert!(well_formed(&document).is_ok());
}

#[test]
fn test_checks_are_repeatable() {
    let (_dir, document) = write_index(padded("<p>Portfolio</p>", 1500));

    let checks: [fn(&TargetDocument) -> CheckResult; 3] = [structure, content, well_formed];
    for check in checks {
        let first = check(&document).map_err(|e| e.to_string());
        let second = check(&document).map_err(|e| e.to_string());
        assert_eq!(first, second);
    }
}
