pub mod detail;
pub mod html;
pub mod index;


pub use detail::DetailPage;

use crate::config::PageSchema;
use crate::error::Result;
use crate::results::MunicipalityRef;

/// Main parser that delegates to the page-specific extractors
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    schema: &'a PageSchema,
}

impl<'a> Parser<'a> {
    pub fn new(schema: &'a PageSchema) -> Self {
        Self { schema }
    }

    pub fn parse_index(&self, content: &str, url: &str) -> Result<Vec<MunicipalityRef>> {
        index::parse(content, &self.schema.index, url)
    }

    pub fn parse_detail(&self, content: &str, url: &str) -> Result<DetailPage> {
        detail::parse(content, &self.schema.detail, url)
    }
}
