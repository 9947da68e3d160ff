use crate::config::{IndexSchema, expand_key};
use crate::error::{Result, ScrapeError};
use crate::parsers::html::{
    attr_matches, cells_with_headers, descendants, document_elements, has_class, stripped_text,
};
use crate::results::MunicipalityRef;
use scraper::{ElementRef, Html};

/// Extracts municipality references from an index page.
///
/// Containers are located by the first schema class that matches any `div`.
/// Within container `d` (1-based) a row qualifies when it has both a code cell
/// and a name cell for `d` and no hidden cell. A qualifying row whose code cell
/// has no link is an error.
pub fn parse(html: &str, schema: &IndexSchema, url: &str) -> Result<Vec<MunicipalityRef>> {
    let doc = Html::parse_document(html);
    let containers = find_containers(&doc, schema);

    let mut refs = Vec::new();
    for (i, container) in containers.into_iter().enumerate() {
        let index = i + 1;
        let code_key = expand_key(&schema.code_key, index);
        let name_key = expand_key(&schema.name_key, index);

        let rows: Vec<ElementRef> = descendants(container, "tr")
            .into_iter()
            .filter(|row| is_municipality_row(*row, &code_key, &name_key, &schema.hidden_class))
            .collect();
        ::log::debug!("Container {} has {} municipality rows", index, rows.len());

        for row in rows {
            refs.push(municipality_ref(row, &code_key, &name_key, url)?);
        }
    }

    ::log::info!("Found {} municipalities on {}", refs.len(), url);
    Ok(refs)
}

/// Containers of the first class (in schema order) present on the page
fn find_containers<'a>(doc: &'a Html, schema: &IndexSchema) -> Vec<ElementRef<'a>> {
    let divs = document_elements(doc, "div");

    for class in &schema.container_classes {
        let containers: Vec<ElementRef> = divs
            .iter()
            .copied()
            .filter(|div| has_class(div, class))
            .collect();
        if !containers.is_empty() {
            ::log::debug!(
                "Using {} containers with class '{}'",
                containers.len(),
                class
            );
            return containers;
        }
    }

    ::log::debug!("No containers with any of {:?}", schema.container_classes);
    Vec::new()
}

fn is_municipality_row(
    row: ElementRef,
    code_key: &str,
    name_key: &str,
    hidden_class: &str,
) -> bool {
    let cells = descendants(row, "td");
    cells.iter().any(|td| attr_matches(td, "headers", code_key))
        && cells.iter().any(|td| attr_matches(td, "headers", name_key))
        && !cells.iter().any(|td| has_class(td, hidden_class))
}

fn municipality_ref(
    row: ElementRef,
    code_key: &str,
    name_key: &str,
    url: &str,
) -> Result<MunicipalityRef> {
    let code_cell = first_cell(row, code_key, url)?;
    let name_cell = first_cell(row, name_key, url)?;
    let code = stripped_text(&code_cell);

    let anchor = descendants(code_cell, "a").into_iter().next().ok_or_else(|| {
        ScrapeError::missing(format!("link in code cell of municipality '{code}'"), url)
    })?;
    let href = anchor.value().attr("href").ok_or_else(|| {
        ScrapeError::missing(format!("href of link for municipality '{code}'"), url)
    })?;

    Ok(MunicipalityRef {
        code,
        name: stripped_text(&name_cell),
        detail_link: href.to_string(),
    })
}

fn first_cell<'a>(row: ElementRef<'a>, key: &str, url: &str) -> Result<ElementRef<'a>> {
    cells_with_headers(row, key)
        .into_iter()
        .next()
        .ok_or_else(|| ScrapeError::missing(format!("cell '{key}'"), url))
}
