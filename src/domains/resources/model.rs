//! Resource data model.
//!
//! A [`Resource`] is what a resolver hands back for an identifier. Its
//! serde layout is the JSON Resource Descriptor (RFC 7033 §4.4), so the
//! same type is used for stored documents and for the wire format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A resolved resource.
///
/// `aliases`, `properties` and `links` may be omitted in stored documents
/// but are always written out, so clients can rely on their presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Canonical identifier of the resource.
    #[serde(default)]
    pub subject: String,

    /// Alternate identifiers for the same resource.
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Property URI to value. A `None` value is written as JSON `null`.
    #[serde(default)]
    pub properties: BTreeMap<String, Option<String>>,

    /// Outbound links, in the order they were defined.
    #[serde(default)]
    pub links: Vec<Link>,
}

/// A link relation attached to a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Relation type, either a registered name or a URI.
    pub rel: String,

    /// Media type of the link target.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// Target URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Human readable titles keyed by language tag (`und` when unknown).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub titles: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Option<String>>,
}

impl Resource {
    /// Create a resource with the given subject and nothing else.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Default::default()
        }
    }

    /// Add an alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Add a property.
    pub fn with_property(mut self, uri: impl Into<String>, value: Option<String>) -> Self {
        self.properties.insert(uri.into(), value);
        self
    }

    /// Add a link.
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Keep only the links whose relation type is listed in `rels`.
    ///
    /// An empty `rels` keeps every link (RFC 7033 §4.3).
    pub fn with_rels(mut self, rels: &[String]) -> Self {
        if !rels.is_empty() {
            self.links.retain(|link| rels.iter().any(|rel| rel == &link.rel));
        }
        self
    }

    /// Every identifier this resource answers to: the subject, then its aliases.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.subject.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

impl Link {
    /// Create a link with the given relation type.
    pub fn new(rel: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            ..Default::default()
        }
    }

    /// Set the target URI.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Set the media type.
    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Add a title for the given language tag.
    pub fn with_title(mut self, lang: impl Into<String>, title: impl Into<String>) -> Self {
        self.titles.insert(lang.into(), title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> Resource {
        Resource::new("acct:alice@example.com")
            .with_link(
                Link::new("http://webfinger.net/rel/profile-page")
                    .with_href("https://example.com/alice"),
            )
            .with_link(
                Link::new("self")
                    .with_type("application/activity+json")
                    .with_href("https://example.com/users/alice"),
            )
    }

    #[test]
    fn test_minimal_document_gets_empty_collections() {
        let resource: Resource =
            serde_json::from_value(json!({ "subject": "acct:alice@example.com" })).unwrap();

        assert_eq!(resource, Resource::new("acct:alice@example.com"));
        assert_eq!(
            serde_json::to_value(&resource).unwrap(),
            json!({
                "subject": "acct:alice@example.com",
                "aliases": [],
                "properties": {},
                "links": []
            })
        );
    }

    #[test]
    fn test_link_optional_fields_are_omitted() {
        let link = Link::new("self").with_href("https://example.com/users/alice");
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({ "rel": "self", "href": "https://example.com/users/alice" })
        );
    }

    #[test]
    fn test_link_type_field_name() {
        let link: Link = serde_json::from_value(json!({
            "rel": "self",
            "type": "application/activity+json",
            "titles": { "en": "Alice" }
        }))
        .unwrap();

        assert_eq!(link.media_type.as_deref(), Some("application/activity+json"));
        assert_eq!(link.titles.get("en").map(String::as_str), Some("Alice"));
        assert!(link.href.is_none());
    }

    #[test]
    fn test_null_property_values_survive() {
        let resource = Resource::new("acct:alice@example.com")
            .with_property("http://example.com/ns/role", None);
        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["properties"]["http://example.com/ns/role"], json!(null));
    }

    #[test]
    fn test_with_rels_filters_links() {
        let filtered = alice().with_rels(&["self".to_string()]);
        assert_eq!(filtered.links.len(), 1);
        assert_eq!(filtered.links[0].rel, "self");
    }

    #[test]
    fn test_with_rels_empty_keeps_everything() {
        assert_eq!(alice().with_rels(&[]), alice());
    }

    #[test]
    fn test_with_rels_unknown_rel_drops_all_links() {
        let filtered = alice().with_rels(&["http://example.com/rel/none".to_string()]);
        assert!(filtered.links.is_empty());
        assert_eq!(filtered.subject, "acct:alice@example.com");
    }

    #[test]
    fn test_identifiers_include_aliases() {
        let resource = Resource::new("acct:alice@example.com").with_alias("https://example.com/alice");
        let ids: Vec<_> = resource.identifiers().collect();
        assert_eq!(ids, vec!["acct:alice@example.com", "https://example.com/alice"]);
    }
}
