use crate::checks::find_keywords;
use scraper::{Html, Selector};
use serde::Serialize;

/// What the page looks like to a reader, reported next to the verdicts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub title: Option<String>,
    pub headings: Vec<String>,
    pub keywords: Vec<String>,
    pub characters: usize,
}

impl PageSummary {
    pub fn extract(html: &str) -> Self {
        let document = Html::parse_document(html);

        let title_selector = selector("title");
        let title = document
            .select(&title_selector)
            .next()
            .map(|element| collapse_whitespace(&element.text().collect::<String>()))
            .filter(|title| !title.is_empty());

        let heading_selector = selector("h1, h2");
        let headings = document
            .select(&heading_selector)
            .map(|element| collapse_whitespace(&element.text().collect::<String>()))
            .filter(|heading| !heading.is_empty())
            .collect();

        PageSummary {
            title,
            headings,
            keywords: find_keywords(html)
                .into_iter()
                .map(str::to_string)
                .collect(),
            characters: html.chars().count(),
        }
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("selector literal is valid CSS")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
