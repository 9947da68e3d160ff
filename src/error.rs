use thiserror::Error;

/// Errors raised while discovering, fetching, extracting or writing election results
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Transport failure while fetching a page
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The page does not carry markup the schema expects
    #[error("missing {what} on page {url}")]
    MissingElement { what: String, url: String },

    /// A party container listed more party names than vote counts
    #[error(
        "party container {container} on {url} has {names} party names but only {votes} vote counts"
    )]
    MismatchedPartyColumns {
        container: usize,
        names: usize,
        votes: usize,
        url: String,
    },

    #[error("Unable to find any city info which would lead to election data from URL '{url}'.")]
    NoMunicipalities { url: String },

    #[error("Unable to prepare any valid URL from {base} and retrieved cities info {refs}.")]
    NoResolvableUrls { base: String, refs: String },

    #[error("no records to write")]
    EmptyRecords,

    /// A record carries a column the header (taken from the first record) does not have
    #[error("record {record} has column '{column}' which is not in the header")]
    UnexpectedColumn { column: String, record: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid page schema: {0}")]
    Config(#[from] serde_json::Error),
}

impl ScrapeError {
    pub(crate) fn missing(what: impl Into<String>, url: &str) -> Self {
        Self::MissingElement {
            what: what.into(),
            url: url.to_string(),
        }
    }

    /// Discovery errors are reported to the user as a failed phase instead of a crash
    pub fn is_discovery(&self) -> bool {
        matches!(
            self,
            ScrapeError::NoMunicipalities { .. } | ScrapeError::NoResolvableUrls { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
