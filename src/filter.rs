use crate::error::{Result, ScrapeError};
use crate::results::{MunicipalityEntry, MunicipalityRef};
use url::Url;

/// Checks that `candidate` is an absolute URL with a scheme, a host and a path.
///
/// The path must be present in the text itself: `http://example.org` has none,
/// even though [`Url`] would normalise it to `/`.
pub fn is_well_formed_url(candidate: &str) -> bool {
    let Ok(parsed) = Url::parse(candidate) else {
        return false;
    };
    if parsed.host_str().is_none_or(str::is_empty) {
        return false;
    }

    let Some((_, rest)) = candidate.split_once("://") else {
        return false;
    };
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    rest[authority_end..].starts_with('/')
}

/// Directory the page at `url` lives in: trailing slashes stripped, last path
/// segment dropped and a slash appended. Query and fragment are discarded.
pub fn base_url(url: &str) -> Result<Url> {
    let mut base = Url::parse(url)?;
    let trimmed = base.path().trim_end_matches('/');
    let parent = trimmed.rsplit_once('/').map_or("", |(parent, _)| parent);
    let path = format!("{parent}/");

    base.set_path(&path);
    base.set_query(None);
    base.set_fragment(None);
    Ok(base)
}

/// Resolves municipality detail links against the directory of the index page
#[derive(Debug, Clone)]
pub struct UrlResolver {
    base: Url,
}

impl UrlResolver {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Create a resolver for links found on the page at `index_url`
    pub fn for_index(index_url: &str) -> Result<Self> {
        Ok(Self::new(base_url(index_url)?))
    }

    /// Resolve a single link, `None` if the result is not a well-formed URL
    pub fn resolve(&self, link: &str) -> Option<Url> {
        let resolved = self.base.join(link).ok()?;
        if is_well_formed_url(resolved.as_str()) {
            Some(resolved)
        } else {
            None
        }
    }

    /// Resolve every reference, dropping those without a well-formed URL.
    ///
    /// Fails only when nothing resolves.
    pub fn resolve_all(&self, refs: &[MunicipalityRef]) -> Result<Vec<MunicipalityEntry>> {
        let entries: Vec<MunicipalityEntry> = refs
            .iter()
            .filter_map(|r| {
                let url = self.resolve(&r.detail_link);
                if url.is_none() {
                    ::log::debug!(
                        "Dropping {} ({}): link '{}' does not resolve",
                        r.code,
                        r.name,
                        r.detail_link
                    );
                }
                url.map(|url| MunicipalityEntry {
                    code: r.code.clone(),
                    name: r.name.clone(),
                    detail_url: url.to_string(),
                })
            })
            .collect();

        let dropped = refs.len() - entries.len();
        if dropped > 0 {
            ::log::warn!(
                "{} of {} municipality links did not resolve against {}",
                dropped,
                refs.len(),
                self.base
            );
        }

        if entries.is_empty() {
            return Err(ScrapeError::NoResolvableUrls {
                base: self.base.to_string(),
                refs: format!("{refs:?}"),
            });
        }

        Ok(entries)
    }
}
