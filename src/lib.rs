pub mod config;
pub mod console;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod output;
pub mod parsers;
pub mod results;
pub mod validate;

// Re-export commonly used types for convenience
pub use config::PageSchema;
pub use crawlers::{PageSource, StaticSource, WebSource};
pub use error::{Result, ScrapeError};
pub use results::{
    ElectionRecord, ElectionSummary, MunicipalityEntry, MunicipalityRef, PartyResult,
};

use filter::UrlResolver;
use parsers::{DetailPage, Parser};

/// Collects election results of every municipality listed on an index page
pub struct Scraper<S> {
    source: S,
    schema: PageSchema,
}

impl<S: PageSource> Scraper<S> {
    /// Create a scraper reading pages from `source` with the default page template
    pub fn new(source: S) -> Self {
        Self {
            source,
            schema: PageSchema::default(),
        }
    }

    /// Use a different page template
    pub fn with_schema(mut self, schema: PageSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Load the page template from a JSON file
    pub fn with_schema_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let schema = PageSchema::from_file(path)?;
        Ok(self.with_schema(schema))
    }

    pub fn schema(&self) -> &PageSchema {
        &self.schema
    }

    /// Fetch the index page and list the municipalities on it.
    ///
    /// An index without any municipality is an error.
    pub async fn discover(&self, index_url: &str) -> Result<Vec<MunicipalityRef>> {
        let html = self.source.fetch(index_url).await?;
        let refs = Parser::new(&self.schema).parse_index(&html, index_url)?;

        if refs.is_empty() {
            return Err(ScrapeError::NoMunicipalities {
                url: index_url.to_string(),
            });
        }
        Ok(refs)
    }

    /// Fetch one municipality's detail page and read its results
    pub async fn extract(&self, entry: &MunicipalityEntry) -> Result<DetailPage> {
        let html = self.source.fetch(&entry.detail_url).await?;
        Parser::new(&self.schema).parse_detail(&html, &entry.detail_url)
    }

    /// Discover, resolve and extract every municipality, one page at a time, in index order
    pub async fn collect(&self, index_url: &str) -> Result<Vec<ElectionRecord>> {
        ::log::info!("Collecting election results from {}", index_url);
        let resolver = UrlResolver::for_index(index_url)?;

        let refs = self.discover(index_url).await?;
        let entries = resolver.resolve_all(&refs)?;

        let mut records = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            ::log::info!("[{}/{}] {} {}", i + 1, entries.len(), entry.code, entry.name);
            let page = self.extract(entry).await?;
            records.push(ElectionRecord::merge(entry, &page.summary, &page.parties));
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_URL: &str = "https://volby.cz/pls/ps2017nss/ps32?xjazyk=CZ&xkraj=12&xnumnuts=7103";

    const INDEX_PAGE: &str = r#"<html><body><div class="t1"><table>
        <tr><td headers="t1sa1 t1sb1"><a href="ps311?xobec=506761">506761</a></td><td headers="t1sa1 t1sb2">Alojzov</td></tr>
        <tr><td headers="t1sa1 t1sb1"><a href="ps311?xobec=589268">589268</a></td><td headers="t1sa1 t1sb2">Bedihošť</td></tr>
        <tr><td headers="t1sa1 t1sb1">-</td><td headers="t1sa1 t1sb2">-</td><td class="hidden_td">-</td></tr>
    </table></div></body></html>"#;

    fn detail_page(
        registered: &str,
        envelopes: &str,
        valid: &str,
        parties: &[(&str, &str)],
    ) -> String {
        let rows: String = parties
            .iter()
            .map(|(name, votes)| {
                format!(r#"<tr><td headers="t1sa1 t1sb2">{name}</td><td headers="t1sa2 t1sb3">{votes}</td></tr>"#)
            })
            .collect();
        format!(
            r#"<html><body>
            <table id="ps311_t1"><tr>
                <td class="cislo" headers="sa2" data-rel="L1">{registered}</td>
                <td class="cislo" headers="sa3" data-rel="L1">{envelopes}</td>
                <td class="cislo" headers="sa6" data-rel="L1">{valid}</td>
            </tr></table>
            <div class="t2_470"><table>{rows}</table></div>
            </body></html>"#
        )
    }

    fn source() -> StaticSource {
        StaticSource::new()
            .with_page(INDEX_URL, INDEX_PAGE)
            .with_page(
                "https://volby.cz/pls/ps2017nss/ps311?xobec=506761",
                detail_page("205", "145", "144", &[("ODS", "29"), ("ANO 2011", "51")]),
            )
            .with_page(
                "https://volby.cz/pls/ps2017nss/ps311?xobec=589268",
                detail_page("834", "527", "524", &[("ODS", "51"), ("ANO 2011", "174")]),
            )
    }

    #[tokio::test]
    async fn test_collect_in_index_order() {
        let records = Scraper::new(source()).collect(INDEX_URL).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("code"), Some("506761"));
        assert_eq!(records[0].get("location"), Some("Alojzov"));
        assert_eq!(records[0].get("ANO 2011"), Some("51"));
        assert_eq!(records[1].get("code"), Some("589268"));
        assert_eq!(records[1].get("registered"), Some("834"));

        let keys: Vec<&str> = records[1].keys().collect();
        assert_eq!(
            keys,
            vec!["code", "location", "registered", "envelopes", "valid", "ODS", "ANO 2011"]
        );
    }

    #[tokio::test]
    async fn test_collect_and_save() {
        let records = Scraper::new(source()).collect(INDEX_URL).await.unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vysledky.csv");

        output::save_to_file(&path, &records).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "code;location;registered;envelopes;valid;ODS;ANO 2011\r\n\
             506761;Alojzov;205;145;144;29;51\r\n\
             589268;Bedihošť;834;527;524;51;174\r\n"
        );
    }

    #[tokio::test]
    async fn test_empty_index_is_discovery_error() {
        let source = StaticSource::new().with_page(INDEX_URL, "<html><body></body></html>");
        let err = Scraper::new(source).collect(INDEX_URL).await.unwrap_err();

        assert!(err.is_discovery());
        assert!(matches!(err, ScrapeError::NoMunicipalities { .. }));
        assert!(err.to_string().contains(INDEX_URL));
    }

    #[tokio::test]
    async fn test_unresolvable_links_are_discovery_error() {
        let index = r#"<div class="t1"><table><tr>
            <td headers="t1sa1 t1sb1"><a href="mailto:obec@example.org">1</a></td>
            <td headers="t1sa1 t1sb2">Jedna</td>
        </tr></table></div>"#;
        let source = StaticSource::new().with_page(INDEX_URL, index);
        let err = Scraper::new(source).collect(INDEX_URL).await.unwrap_err();

        assert!(err.is_discovery());
        assert!(matches!(err, ScrapeError::NoResolvableUrls { .. }));
    }

    #[tokio::test]
    async fn test_broken_detail_page_is_fatal() {
        let source = source().with_page(
            "https://volby.cz/pls/ps2017nss/ps311?xobec=589268",
            "<html><body>Stránka nenalezena</body></html>",
        );
        let err = Scraper::new(source).collect(INDEX_URL).await.unwrap_err();

        assert!(!err.is_discovery());
        assert!(matches!(err, ScrapeError::MissingElement { .. }));
    }

    #[tokio::test]
    async fn test_custom_schema_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        std::fs::write(&path, r#"{"index": {"container_classes": ["obce"]}}"#).unwrap();

        let index = INDEX_PAGE.replace("class=\"t1\"", "class=\"obce\"");
        let source = source().with_page(INDEX_URL, index);
        let scraper = Scraper::new(source).with_schema_file(&path).unwrap();
        assert_eq!(scraper.schema().index.container_classes, vec!["obce"]);

        let records = scraper.collect(INDEX_URL).await.unwrap();
        assert_eq!(records.len(), 2);
    }
}
