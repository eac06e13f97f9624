use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DraftError;

/// Address of a remote document, as returned by the store on creation
///
/// The document id is the last path segment of the URL, e.g.
/// `https://jsonblob.com/api/jsonBlob/1234` names document `1234`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locator {
    url: String,
    blob_id: String,
}

impl Locator {
    /// Parse a document URL into a locator
    pub fn parse(url: &str) -> Result<Self, DraftError> {
        let url = url.trim();
        let invalid = || DraftError::InvalidLocator(url.to_string());

        let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
        if scheme.is_empty()
            || !scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        {
            return Err(invalid());
        }

        // Query and fragment are not part of the path
        let rest = rest.split(['?', '#']).next().unwrap_or_default();
        let (host, path) = rest.split_at(rest.find('/').unwrap_or(rest.len()));
        if host.is_empty() {
            return Err(invalid());
        }

        let blob_id = path.rsplit('/').next().unwrap_or_default();
        if blob_id.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            url: url.to_string(),
            blob_id: blob_id.to_string(),
        })
    }

    /// Build the locator for a document id under a store base URL
    pub fn for_blob(base_url: &str, blob_id: &str) -> Result<Self, DraftError> {
        Self::parse(&format!("{}/{}", base_url.trim_end_matches('/'), blob_id))
    }

    /// The full document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The document id embedded in the URL
    pub fn blob_id(&self) -> &str {
        &self.blob_id
    }
}

impl FromStr for Locator {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locator {
    type Error = DraftError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locator> for String {
    fn from(locator: Locator) -> Self {
        locator.url
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
