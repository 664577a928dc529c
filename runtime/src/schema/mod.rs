//! schema.org JSON-LD builders.
//!
//! Builders are pure functions returning [`SchemaNode`]s without `@context`.
//! [`compose`] adds the context exactly once: on the node itself when a page
//! emits a single schema, or on a wrapping `@graph` object otherwise.
//! Optional inputs that are absent are omitted, never serialised as `null`.

pub mod content;
pub mod identity;
pub mod pages;
pub mod service;
pub mod site;

use crate::error::Result;
use serde::Serialize;
use serde_json::{json, Map, Value};

pub use identity::{SchemaContext, SiteIdentity};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// A JSON-LD object tagged with `@type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SchemaNode(Map<String, Value>);

impl SchemaNode {
    pub fn new(schema_type: &str) -> Self {
        let mut map = Map::new();
        map.insert("@type".to_string(), Value::from(schema_type));
        Self(map)
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with("@id", id.into())
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Add each pair whose value is present.
    pub fn with_optional<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Option<Value>)>,
    {
        for (key, value) in pairs {
            if let Some(value) = value {
                self.0.insert(key.to_string(), value);
            }
        }
        self
    }

    pub fn schema_type(&self) -> Option<&str> {
        self.0.get("@type").and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("@id").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<SchemaNode> for Value {
    fn from(node: SchemaNode) -> Self {
        node.into_value()
    }
}

/// `Some(value)` converted to JSON, for [`SchemaNode::with_optional`].
pub fn opt<T: Into<Value>>(value: Option<T>) -> Option<Value> {
    value.map(Into::into)
}

/// `Some(array)` unless `items` is empty.
pub fn non_empty<T: Into<Value>>(items: Vec<T>) -> Option<Value> {
    if items.is_empty() {
        None
    } else {
        Some(Value::Array(items.into_iter().map(Into::into).collect()))
    }
}

/// `{"@id": id}` reference to a node defined elsewhere.
pub fn reference(id: &str) -> Value {
    json!({ "@id": id })
}

/// Merge a page's nodes into one JSON-LD document.
pub fn compose(nodes: Vec<SchemaNode>) -> Option<Value> {
    let mut nodes = nodes;
    match nodes.len() {
        0 => None,
        1 => {
            let node = nodes.pop()?;
            let mut map = Map::new();
            map.insert("@context".to_string(), Value::from(SCHEMA_CONTEXT));
            map.extend(node.0);
            Some(Value::Object(map))
        }
        _ => {
            let graph: Vec<Value> = nodes
                .into_iter()
                .map(|node| {
                    // Only the document root carries `@context`.
                    let map: Map<String, Value> = node
                        .0
                        .into_iter()
                        .filter(|(key, _)| key != "@context")
                        .collect();
                    Value::Object(map)
                })
                .collect();
            Some(json!({
                "@context": SCHEMA_CONTEXT,
                "@graph": graph,
            }))
        }
    }
}

/// Serialise `value` into an inline `<script type="application/ld+json">`.
///
/// `<` is written as `\u003c` so content can never close the script element.
pub fn render_json_ld_script(value: &Value, nonce: Option<&str>) -> Result<String> {
    let json = serde_json::to_string(value)?.replace('<', "\\u003c");
    let nonce_attr = nonce
        .map(|n| format!(r#" nonce="{}""#, crate::sitemap::xml::escape(n)))
        .unwrap_or_default();
    Ok(format!(
        r#"<script type="application/ld+json"{nonce_attr}>{json}</script>"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;

    #[test]
    fn test_compose_empty() {
        assert_eq!(compose(Vec::new()), None);
    }

    #[test]
    fn test_compose_single_node_carries_context() {
        let node = SchemaNode::new("Thing").with("name", "x");
        let value = compose(vec![node]).unwrap();
        assert_json_eq!(
            value,
            json!({"@context": "https://schema.org", "@type": "Thing", "name": "x"})
        );
        let text = serde_json::to_string(&value).unwrap();
        assert!(text.starts_with(r#"{"@context":"https://schema.org""#));
    }

    #[test]
    fn test_compose_graph_has_one_context() {
        let value = compose(vec![
            SchemaNode::new("Organization").with_id("https://x.test#organization"),
            SchemaNode::new("WebSite").with_id("https://x.test#website"),
        ])
        .unwrap();
        assert_json_eq!(
            value,
            json!({
                "@context": "https://schema.org",
                "@graph": [
                    {"@type": "Organization", "@id": "https://x.test#organization"},
                    {"@type": "WebSite", "@id": "https://x.test#website"},
                ]
            })
        );
        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(text.matches("@context").count(), 1);
    }

    #[test]
    fn test_graph_nodes_lose_their_own_context() {
        let value = compose(vec![
            SchemaNode::new("Organization").with("@context", "https://schema.org"),
            SchemaNode::new("WebSite")
                .with("@context", "http://schema.org")
                .with("name", "x"),
        ])
        .unwrap();
        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(text.matches("@context").count(), 1);
        assert_json_eq!(
            value,
            json!({
                "@context": "https://schema.org",
                "@graph": [
                    {"@type": "Organization"},
                    {"@type": "WebSite", "name": "x"},
                ]
            })
        );
        assert!(text.contains(r#"{"@type":"WebSite","name":"x"}"#));
    }

    #[test]
    fn test_optional_pairs_are_omitted() {
        let node = SchemaNode::new("HowToStep").with_optional([
            ("image", opt(None::<&str>)),
            ("url", opt(Some("https://x.test/step"))),
            ("tool", non_empty(Vec::<Value>::new())),
        ]);
        assert_json_eq!(
            node.into_value(),
            json!({"@type": "HowToStep", "url": "https://x.test/step"})
        );
    }

    #[test]
    fn test_script_escapes_angle_brackets() {
        let value = json!({"name": "</script><script>alert(1)</script>"});
        let html = render_json_ld_script(&value, Some("abc\"123")).unwrap();
        assert!(html.starts_with(r#"<script type="application/ld+json" nonce="abc&quot;123">"#));
        assert!(html.ends_with("</script>"));
        assert_eq!(html.matches("</script>").count(), 1);
        assert!(html.contains(r"\u003c/script>\u003cscript>"));
    }

    #[test]
    fn test_script_without_nonce() {
        let html = render_json_ld_script(&json!({"a": 1}), None).unwrap();
        assert_eq!(html, r#"<script type="application/ld+json">{"a":1}</script>"#);
    }
}
