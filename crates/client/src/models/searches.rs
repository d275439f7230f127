//! Search definitions pushed to clients.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::FieldValue;

/// How a search definition matches log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchType {
    Regex,
    Contains,
    Wildcard,
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Regex" => Ok(SearchType::Regex),
            "Contains" => Ok(SearchType::Contains),
            "Wildcard" => Ok(SearchType::Wildcard),
            other => Err(format!("unknown search type: {other}")),
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SearchType::Regex => "Regex",
            SearchType::Contains => "Contains",
            SearchType::Wildcard => "Wildcard",
        };
        f.write_str(s)
    }
}

/// A search definition: what to look for and in which log locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchDefinition {
    #[serde(default)]
    pub id: Option<FieldValue>,
    #[serde(default)]
    pub name: Option<FieldValue>,
    /// Kept in wire form so unknown types still render.
    #[serde(default)]
    pub stype: Option<FieldValue>,
    #[serde(default)]
    pub search: Option<FieldValue>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::null_as_empty_vec"
    )]
    pub locations: Vec<Option<FieldValue>>,
}

impl SearchDefinition {
    /// The typed search type, if the wire value is one the server defines.
    pub fn search_type(&self) -> Option<SearchType> {
        self.stype.as_ref()?.as_str()?.parse().ok()
    }
}
