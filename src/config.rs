use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Placeholder substituted with the 1-based container index in key patterns
pub const INDEX_PLACEHOLDER: &str = "{n}";

/// Markers identifying municipality rows on the index page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSchema {
    /// Container classes, tried in priority order; the first class with any container wins
    #[serde(default = "default_container_classes")]
    pub container_classes: Vec<String>,

    /// `headers` key of the municipality code cell
    #[serde(default = "default_code_key")]
    pub code_key: String,

    /// `headers` key of the municipality name cell
    #[serde(default = "default_name_key")]
    pub name_key: String,

    /// Class of a cell that marks a row as suppressed
    #[serde(default = "default_hidden_class")]
    pub hidden_class: String,
}

/// Markers identifying the summary counters and party results on a detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailSchema {
    /// `id` of the summary table
    #[serde(default = "default_summary_table_id")]
    pub summary_table_id: String,

    /// Class carried by every summary number cell
    #[serde(default = "default_summary_cell_class")]
    pub summary_cell_class: String,

    /// Column group marker (`data-rel`) of the summary cells
    #[serde(default = "default_column_group")]
    pub column_group: String,

    #[serde(default = "default_registered_key")]
    pub registered_key: String,

    #[serde(default = "default_envelopes_key")]
    pub envelopes_key: String,

    #[serde(default = "default_valid_key")]
    pub valid_key: String,

    /// Class of the party result containers
    #[serde(default = "default_party_container_class")]
    pub party_container_class: String,

    #[serde(default = "default_party_name_key")]
    pub party_name_key: String,

    #[serde(default = "default_party_votes_key")]
    pub party_votes_key: String,
}

/// Declarative description of the results portal's page template.
///
/// Every site-specific marker the extractors look for lives here, so a template
/// change means a new schema rather than new extraction code. Key patterns may
/// contain [`INDEX_PLACEHOLDER`], which is replaced by the 1-based index of the
/// container the cell is searched in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageSchema {
    #[serde(default)]
    pub index: IndexSchema,

    #[serde(default)]
    pub detail: DetailSchema,
}

impl Default for IndexSchema {
    fn default() -> Self {
        Self {
            container_classes: default_container_classes(),
            code_key: default_code_key(),
            name_key: default_name_key(),
            hidden_class: default_hidden_class(),
        }
    }
}

impl Default for DetailSchema {
    fn default() -> Self {
        Self {
            summary_table_id: default_summary_table_id(),
            summary_cell_class: default_summary_cell_class(),
            column_group: default_column_group(),
            registered_key: default_registered_key(),
            envelopes_key: default_envelopes_key(),
            valid_key: default_valid_key(),
            party_container_class: default_party_container_class(),
            party_name_key: default_party_name_key(),
            party_votes_key: default_party_votes_key(),
        }
    }
}

impl PageSchema {
    /// Load a schema from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load a schema from a JSON string; missing fields fall back to the default template
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Expands a key pattern for the container at `index` (1-based)
pub fn expand_key(pattern: &str, index: usize) -> String {
    pattern.replace(INDEX_PLACEHOLDER, &index.to_string())
}

fn default_container_classes() -> Vec<String> {
    vec!["t1".to_string(), "t2".to_string(), "t3".to_string()]
}

fn default_code_key() -> String {
    "t{n}sa1 t{n}sb1".to_string()
}

fn default_name_key() -> String {
    "t{n}sa1 t{n}sb2".to_string()
}

fn default_hidden_class() -> String {
    "hidden_td".to_string()
}

fn default_summary_table_id() -> String {
    "ps311_t1".to_string()
}

fn default_summary_cell_class() -> String {
    "cislo".to_string()
}

fn default_column_group() -> String {
    "L1".to_string()
}

fn default_registered_key() -> String {
    "sa2".to_string()
}

fn default_envelopes_key() -> String {
    "sa3".to_string()
}

fn default_valid_key() -> String {
    "sa6".to_string()
}

fn default_party_container_class() -> String {
    "t2_470".to_string()
}

fn default_party_name_key() -> String {
    "t{n}sa1 t{n}sb2".to_string()
}

fn default_party_votes_key() -> String {
    "t{n}sa2 t{n}sb3".to_string()
}
