use crate::config::{DetailSchema, expand_key};
use crate::error::{Result, ScrapeError};
use crate::parsers::html::{
    attr_matches, cells_with_headers, descendants, document_elements, has_class, stripped_text,
};
use crate::results::{ElectionSummary, PartyResult};
use scraper::{ElementRef, Html};

/// Everything read from one municipality's detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPage {
    pub summary: ElectionSummary,
    pub parties: Vec<PartyResult>,
}

pub fn parse(html: &str, schema: &DetailSchema, url: &str) -> Result<DetailPage> {
    let doc = Html::parse_document(html);
    Ok(DetailPage {
        summary: parse_summary(&doc, schema, url)?,
        parties: parse_parties(&doc, schema, url)?,
    })
}

/// Reads registered voters, returned envelopes and valid votes from the summary table
pub fn parse_summary(doc: &Html, schema: &DetailSchema, url: &str) -> Result<ElectionSummary> {
    let table = document_elements(doc, "table")
        .into_iter()
        .find(|table| table.value().id() == Some(schema.summary_table_id.as_str()))
        .ok_or_else(|| {
            ScrapeError::missing(format!("summary table '{}'", schema.summary_table_id), url)
        })?;

    Ok(ElectionSummary {
        registered: summary_cell(table, schema, &schema.registered_key, url)?,
        envelopes_returned: summary_cell(table, schema, &schema.envelopes_key, url)?,
        valid_votes: summary_cell(table, schema, &schema.valid_key, url)?,
    })
}

fn summary_cell(table: ElementRef, schema: &DetailSchema, key: &str, url: &str) -> Result<String> {
    descendants(table, "td")
        .into_iter()
        .find(|td| {
            has_class(td, &schema.summary_cell_class)
                && attr_matches(td, "headers", key)
                && td.value().attr("data-rel") == Some(schema.column_group.as_str())
        })
        .map(|td| stripped_text(&td))
        .ok_or_else(|| ScrapeError::missing(format!("summary cell '{key}'"), url))
}

/// Reads party names and vote counts from every party container, in document order.
///
/// Names and votes of container `t` (1-based) are paired by position. Vote cells
/// beyond the last name are ignored; a name without a vote cell is an error.
pub fn parse_parties(doc: &Html, schema: &DetailSchema, url: &str) -> Result<Vec<PartyResult>> {
    let containers: Vec<ElementRef> = document_elements(doc, "div")
        .into_iter()
        .filter(|div| has_class(div, &schema.party_container_class))
        .collect();

    let mut parties = Vec::new();
    for (i, container) in containers.into_iter().enumerate() {
        let index = i + 1;
        let names = cell_texts(container, &expand_key(&schema.party_name_key, index));
        let votes = cell_texts(container, &expand_key(&schema.party_votes_key, index));

        if votes.len() < names.len() {
            return Err(ScrapeError::MismatchedPartyColumns {
                container: index,
                names: names.len(),
                votes: votes.len(),
                url: url.to_string(),
            });
        }
        if votes.len() > names.len() {
            ::log::debug!(
                "Container {} on {}: ignoring {} extra vote cells",
                index,
                url,
                votes.len() - names.len()
            );
        }

        parties.extend(
            names
                .into_iter()
                .zip(votes)
                .map(|(party_name, vote_count)| PartyResult {
                    party_name,
                    vote_count,
                }),
        );
    }

    ::log::debug!("Found {} party results on {}", parties.len(), url);
    Ok(parties)
}

fn cell_texts(container: ElementRef, key: &str) -> Vec<String> {
    cells_with_headers(container, key)
        .iter()
        .map(stripped_text)
        .collect()
}
