use scraper::{ElementRef, Html, Selector};

use crate::types::{ExtractedCard, UNKNOWN_COMPANY, UNKNOWN_TITLE};

pub trait CardExtractor: Send + Sync {
    fn extract(&self, html: &str) -> Vec<ExtractedCard>;
}

/// Reads job cards the way the listing page lays them out:
/// - every `.job-card` element is one card, in document order
/// - title from the first `<h3>`
/// - company from the first `<p><strong>`
/// - location from the first `<p>`, details from the second `<p>`.
#[derive(Debug, Default)]
pub struct JobCardExtractor;

impl CardExtractor for JobCardExtractor {
    fn extract(&self, html: &str) -> Vec<ExtractedCard> {
        let doc = Html::parse_document(html);
        let (Ok(card_sel), Ok(title_sel), Ok(company_sel), Ok(para_sel)) = (
            Selector::parse(".job-card"),
            Selector::parse("h3"),
            Selector::parse("p strong"),
            Selector::parse("p"),
        ) else {
            return Vec::new();
        };

        doc.select(&card_sel)
            .map(|card| {
                let mut paragraphs = card.select(&para_sel);
                let location = paragraphs.next().map(collapsed_text).unwrap_or_default();
                let details = paragraphs.next().map(collapsed_text).unwrap_or_default();

                ExtractedCard {
                    title: first_text(card, &title_sel)
                        .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
                    company: first_text(card, &company_sel)
                        .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
                    location,
                    details,
                }
            })
            .collect()
    }
}

fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope
        .select(sel)
        .next()
        .map(collapsed_text)
        .filter(|text| !text.is_empty())
}

fn collapsed_text(node: ElementRef<'_>) -> String {
    node.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
