//! JRD encoding.

use bytes::Bytes;

use super::error::EncodeError;
use crate::domains::resources::Resource;

/// Media type of a JSON Resource Descriptor.
pub const JRD_CONTENT_TYPE: &str = "application/jrd+json";

/// An encoded descriptor, ready to be written as a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedDescriptor {
    body: Bytes,
    content_type: &'static str,
}

impl EncodedDescriptor {
    pub fn new(body: impl Into<Bytes>, content_type: &'static str) -> Self {
        Self {
            body: body.into(),
            content_type,
        }
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }
}

/// Turns a resource into a descriptor payload.
pub trait DescriptorEncoder: Send + Sync {
    fn encode(&self, resource: &Resource) -> Result<EncodedDescriptor, EncodeError>;
}

/// Encodes resources as JRD with serde_json.
#[derive(Debug, Clone, Copy, Default)]
pub struct JrdEncoder {
    pretty: bool,
}

impl JrdEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent the output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl DescriptorEncoder for JrdEncoder {
    fn encode(&self, resource: &Resource) -> Result<EncodedDescriptor, EncodeError> {
        let body = if self.pretty {
            serde_json::to_vec_pretty(resource)?
        } else {
            serde_json::to_vec(resource)?
        };
        Ok(EncodedDescriptor::new(body, JRD_CONTENT_TYPE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::Link;

    #[test]
    fn test_encodes_empty_resource() {
        let encoded = JrdEncoder::new()
            .encode(&Resource::new("acct:alice@example.com"))
            .unwrap();

        assert_eq!(encoded.content_type(), JRD_CONTENT_TYPE);
        assert_eq!(
            &encoded.body()[..],
            br#"{"subject":"acct:alice@example.com","aliases":[],"properties":{},"links":[]}"#
        );
    }

    #[test]
    fn test_encoded_body_decodes_to_same_resource() {
        let resource = Resource::new("acct:alice@example.com")
            .with_alias("https://example.com/alice")
            .with_property("http://example.com/ns/role", Some("admin".to_string()))
            .with_link(
                Link::new("http://webfinger.net/rel/profile-page")
                    .with_type("text/html")
                    .with_href("https://example.com/alice")
                    .with_title("en", "Alice's profile"),
            );

        let encoded = JrdEncoder::new().encode(&resource).unwrap();
        let decoded: Resource = serde_json::from_slice(encoded.body()).unwrap();

        assert_eq!(decoded, resource);
    }

    #[test]
    fn test_pretty_output() {
        let encoded = JrdEncoder::new()
            .pretty(true)
            .encode(&Resource::new("acct:alice@example.com"))
            .unwrap();

        let text = std::str::from_utf8(encoded.body()).unwrap();
        assert!(text.contains('\n'));
    }
}
