use serde::{Deserialize, Serialize};

/// A municipality row found on the index page; `detail_link` is still relative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalityRef {
    pub code: String,
    pub name: String,
    pub detail_link: String,
}

/// A municipality whose detail link resolved to a well-formed absolute URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalityEntry {
    pub code: String,
    pub name: String,
    pub detail_url: String,
}

/// Summary counters of one municipality, kept verbatim as page text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionSummary {
    pub registered: String,
    pub envelopes_returned: String,
    pub valid_votes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyResult {
    pub party_name: String,
    pub vote_count: String,
}

/// Flattened per-municipality result.
///
/// Fields keep their insertion order, which becomes the column order when this
/// record is the first one written. Inserting an existing key replaces the value
/// but keeps the key's original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionRecord {
    fields: Vec<(String, String)>,
}

impl ElectionRecord {
    pub const CODE: &'static str = "code";
    pub const LOCATION: &'static str = "location";
    pub const REGISTERED: &'static str = "registered";
    pub const ENVELOPES: &'static str = "envelopes";
    pub const VALID: &'static str = "valid";

    /// Merge a resolved municipality with the results read from its detail page
    pub fn merge(
        entry: &MunicipalityEntry,
        summary: &ElectionSummary,
        parties: &[PartyResult],
    ) -> Self {
        let mut record = Self::default();
        record.insert(Self::CODE, &entry.code);
        record.insert(Self::LOCATION, &entry.name);
        record.insert(Self::REGISTERED, &summary.registered);
        record.insert(Self::ENVELOPES, &summary.envelopes_returned);
        record.insert(Self::VALID, &summary.valid_votes);

        for party in parties {
            if let Some(previous) = record.insert(&party.party_name, &party.vote_count) {
                ::log::warn!(
                    "Municipality {}: duplicate column '{}', {} overwritten by {}",
                    entry.code,
                    party.party_name,
                    previous,
                    party.vote_count
                );
            }
        }

        record
    }

    /// Insert or overwrite a field, returning the value it replaced
    pub fn insert(&mut self, key: &str, value: &str) -> Option<String> {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value.to_string())),
            None => {
                self.fields.push((key.to_string(), value.to_string()));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ElectionRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::default();
        for (k, v) in iter {
            let (key, value): (String, String) = (k.into(), v.into());
            record.insert(&key, &value);
        }
        record
    }
}
