//! Query string parsing for discovery requests.

use thiserror::Error;

/// Name of the required query parameter.
pub const RESOURCE_PARAM: &str = "resource";

/// Name of the optional, repeatable link relation filter.
pub const REL_PARAM: &str = "rel";

/// Reasons a query string is rejected.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid URL escape at byte {position}")]
    InvalidEscape { position: usize },

    #[error("invalid semicolon separator in query")]
    Semicolon,

    #[error("malformed query: {0}")]
    Malformed(#[from] serde_urlencoded::de::Error),

    #[error("missing resource parameter")]
    MissingResource,

    #[error("empty resource parameter")]
    EmptyResource,
}

impl QueryError {
    /// Whether the query string itself could not be decoded, as opposed to
    /// decoding fine but lacking a usable `resource`.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::InvalidEscape { .. } | Self::Semicolon | Self::Malformed(_)
        )
    }
}

/// A validated discovery query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
    /// The identifier to look up. Never empty.
    pub resource: String,

    /// Requested link relation types, in request order.
    pub rels: Vec<String>,
}

impl ResourceQuery {
    /// Parse a raw (still percent-encoded) query string.
    ///
    /// Only the first `resource` value is used; later duplicates are ignored.
    pub fn parse(raw_query: Option<&str>) -> Result<Self, QueryError> {
        let raw = raw_query.unwrap_or_default();
        validate_encoding(raw)?;

        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw)?;

        let mut resource = None;
        let mut rels = Vec::new();
        for (key, value) in pairs {
            match key.as_str() {
                RESOURCE_PARAM if resource.is_none() => resource = Some(value),
                REL_PARAM => rels.push(value),
                _ => {}
            }
        }

        let resource = resource.ok_or(QueryError::MissingResource)?;
        if resource.is_empty() {
            return Err(QueryError::EmptyResource);
        }

        Ok(Self { resource, rels })
    }
}

/// Reject query strings that standard strict URL decoding refuses:
/// truncated or non-hex percent escapes, and `;` used as a separator.
fn validate_encoding(raw: &str) -> Result<(), QueryError> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let valid = bytes.len() > i + 2
                    && bytes[i + 1].is_ascii_hexdigit()
                    && bytes[i + 2].is_ascii_hexdigit();
                if !valid {
                    return Err(QueryError::InvalidEscape { position: i });
                }
                i += 3;
            }
            b';' => return Err(QueryError::Semicolon),
            _ => i += 1,
        }
    }
    Ok(())
}
