//! Search results reported by clients, and the filter the results page accepts.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::FieldValue;

/// One search run on one client, with the matching lines it found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub search_id: Option<FieldValue>,
    #[serde(default)]
    pub search_name: Option<FieldValue>,
    #[serde(default)]
    pub started: Option<FieldValue>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::null_as_empty_vec"
    )]
    /// Matching lines; entries are displayed verbatim, `null` as empty.
    pub found: Vec<Option<FieldValue>>,
    #[serde(default)]
    pub client_id: Option<FieldValue>,
    #[serde(default)]
    pub client_name: Option<FieldValue>,
    #[serde(default)]
    pub location: Option<FieldValue>,
}

/// Query parameters understood by `/api/user/get_search_results`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResultFilter {
    /// Restrict to results reported by this client id.
    pub client: Option<String>,
    /// Only results started before this instant.
    pub before: Option<DateTime<Utc>>,
    /// Only results started after this instant.
    pub after: Option<DateTime<Utc>>,
}

impl SearchResultFilter {
    pub fn is_empty(&self) -> bool {
        self.client.is_none() && self.before.is_none() && self.after.is_none()
    }

    /// Encode as an `application/x-www-form-urlencoded` query string (no leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        if let Some(client) = &self.client {
            serializer.append_pair("client", client);
        }
        if let Some(before) = &self.before {
            serializer.append_pair(
                "before",
                &before.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            );
        }
        if let Some(after) = &self.after {
            serializer.append_pair("after", &after.to_rfc3339_opts(SecondsFormat::AutoSi, true));
        }
        serializer.finish()
    }
}
