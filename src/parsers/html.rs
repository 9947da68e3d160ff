use scraper::{ElementRef, Html, Selector};

/// Checks an attribute value against a key the way HTML token lists match:
/// either one of its whitespace-separated tokens equals the key, or all of them
/// joined by single spaces do.
pub fn token_match(value: &str, key: &str) -> bool {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    tokens.contains(&key) || tokens.join(" ") == key
}

/// Whether `element` carries attribute `attr` matching `key` as a token list
pub fn attr_matches(element: &ElementRef, attr: &str, key: &str) -> bool {
    element
        .value()
        .attr(attr)
        .is_some_and(|value| token_match(value, key))
}

pub fn has_class(element: &ElementRef, class: &str) -> bool {
    attr_matches(element, "class", class)
}

/// Text of all descendant text nodes, each trimmed, empty ones dropped, joined without separator
pub fn stripped_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// All descendant elements with the given tag name, in document order
pub fn descendants<'a>(element: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(tag) {
        Ok(selector) => element.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// All elements in the document with the given tag name, in document order
pub fn document_elements<'a>(doc: &'a Html, tag: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(tag) {
        Ok(selector) => doc.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// Descendant `td` cells whose `headers` attribute matches `key`
pub fn cells_with_headers<'a>(element: ElementRef<'a>, key: &str) -> Vec<ElementRef<'a>> {
    descendants(element, "td")
        .into_iter()
        .filter(|td| attr_matches(td, "headers", key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_match() {
        assert!(token_match("t1sa1 t1sb1", "t1sa1 t1sb1"));
        assert!(token_match("t1sa1 t1sb1", "t1sb1"));
        assert!(token_match("cislo", "cislo"));
        assert!(!token_match("t1sa1 t1sb2", "t1sa1 t1sb1"));
        assert!(!token_match("t11sa1", "t1sa1"));
        assert!(!token_match("", "sa2"));
    }

    #[test]
    fn test_token_match_normalises_whitespace() {
        assert!(token_match("t1sa1  t1sb1", "t1sa1 t1sb1"));
        assert!(token_match(" t1sa1\tt1sb1\n", "t1sa1 t1sb1"));
        assert!(!token_match("t1sa1  t1sb1", "t1sa1  t1sb1"));
    }

    #[test]
    fn test_cells_with_irregular_header_spacing() {
        let doc = Html::parse_document(
            r#"<table><tr><td headers="t1sa1   t1sb1">7</td></tr></table>"#,
        );
        let table = document_elements(&doc, "table")[0];
        let cells = cells_with_headers(table, "t1sa1 t1sb1");
        assert_eq!(cells.len(), 1);
        assert_eq!(stripped_text(&cells[0]), "7");
    }

    #[test]
    fn test_stripped_text() {
        let doc = Html::parse_fragment("<table><tr><td>  12 <b> 345 </b>\n </td></tr></table>");
        let td = document_elements(&doc, "td")[0];
        assert_eq!(stripped_text(&td), "12345");
    }

    #[test]
    fn test_stripped_text_keeps_inner_spaces() {
        let doc = Html::parse_fragment("<p> Občanská demokratická strana </p>");
        let p = document_elements(&doc, "p")[0];
        assert_eq!(stripped_text(&p), "Občanská demokratická strana");
    }

    #[test]
    fn test_cells_with_headers() {
        let doc = Html::parse_document(
            r#"<table><tr>
                <td headers="t1sa1 t1sb1">1</td>
                <td headers="t1sa1 t1sb2">A</td>
                <td headers="t1sa1 t1sb1">2</td>
            </tr></table>"#,
        );
        let table = document_elements(&doc, "table")[0];
        let cells = cells_with_headers(table, "t1sa1 t1sb1");
        assert_eq!(cells.len(), 2);
        assert_eq!(stripped_text(&cells[1]), "2");
        assert!(!has_class(&table, "x"));
    }
}
