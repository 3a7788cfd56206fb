use crate::domain::ports::RawFragment;
use crate::utils::error::{Result, TallyError};
use scraper::{Html, Selector};

pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| TallyError::SelectorError {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Text of every element matching `selector`, trimmed, in document order.
/// Elements with no text are dropped.
pub fn extract_fragments(html: &str, selector: &str) -> Result<Vec<RawFragment>> {
    let selector = parse_selector(selector)?;
    let document = Html::parse_document(html);

    let fragments = document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    Ok(fragments)
}
