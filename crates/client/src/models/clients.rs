//! Registered log-collecting clients.

use serde::{Deserialize, Serialize};

use super::FieldValue;

/// A log-collecting client registered with securelog-server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(default)]
    pub id: Option<FieldValue>,
    #[serde(default)]
    pub name: Option<FieldValue>,
    #[serde(default)]
    pub enabled: Option<FieldValue>,
    #[serde(default)]
    pub created: Option<FieldValue>,
    #[serde(default)]
    pub lastconnect: Option<FieldValue>,
}
