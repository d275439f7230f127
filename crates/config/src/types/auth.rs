//! Authentication types.
//!
//! securelog-server authenticates console users with a session cookie. The
//! cookie is either obtained by logging in with credentials or supplied
//! directly from an existing browser session.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Strategy for authenticating with securelog-server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthStrategy {
    /// Log in once with a username and password; the server sets a session cookie.
    #[serde(rename = "credentials")]
    Credentials {
        username: String,
        #[serde(with = "secret_string")]
        password: SecretString,
    },
    /// Reuse an existing session cookie value.
    #[serde(rename = "session_cookie")]
    SessionCookie {
        #[serde(with = "secret_string")]
        cookie: SecretString,
    },
    /// Send requests without any session.
    #[serde(rename = "anonymous")]
    Anonymous,
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(flatten)]
    pub strategy: AuthStrategy,
}
