use std::{borrow::Cow, collections::VecDeque, fmt, sync::Arc};

use ahash::AHashMap;
use serde_json::Value;

use crate::{subresources::subresources_of, uri, Error, Resolver};

/// Where a resource or anchor lives: a registry key plus a JSON pointer into that document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Location {
    document: Arc<str>,
    pointer: String,
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct AnchorKey {
    uri: String,
    name: String,
}

impl AnchorKey {
    fn new(uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
        }
    }
}

/// A registry of JSON Schema documents, each identified by its normalized URI.
///
/// Every operation normalizes its URI argument first (see [`uri::normalize`]),
/// so `http://example.com/schema#` and `HTTP://example.com/schema` address the
/// same entry.
///
/// Documents are indexed eagerly: subschemas that declare their own `$id` and
/// every `$anchor` become resolvable as soon as the document is inserted.
///
/// ```rust
/// use referencing::Registry;
/// use serde_json::json;
///
/// # fn example() -> Result<(), referencing::Error> {
/// let registry = Registry::new()
///     .with_document("https://example.com/root.json", json!({
///         "$defs": {"name": {"$id": "name.json", "type": "string"}}
///     }));
/// let resolver = registry.resolver("https://example.com/root.json");
/// let resolved = resolver.lookup("name.json")?;
/// assert_eq!(resolved.contents(), &json!({"$id": "name.json", "type": "string"}));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct Registry {
    documents: AHashMap<Arc<str>, Arc<Value>>,
    resources: AHashMap<String, Location>,
    anchors: AHashMap<AnchorKey, Location>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.documents.keys().collect();
        keys.sort();
        f.debug_struct("Registry")
            .field("documents", &keys)
            .field("resources", &self.resources.len())
            .field("anchors", &self.anchors.len())
            .finish()
    }
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Create a registry from `(uri, document)` pairs.
    ///
    /// Later pairs overwrite earlier ones with the same normalized URI.
    pub fn from_documents<I, S, D>(pairs: I) -> Registry
    where
        I: IntoIterator<Item = (S, D)>,
        S: AsRef<str>,
        D: Into<Arc<Value>>,
    {
        let mut registry = Registry::new();
        for (uri, document) in pairs {
            registry.insert(uri.as_ref(), document);
        }
        registry
    }

    /// Add a document and return the registry.
    #[must_use]
    pub fn with_document(mut self, uri: &str, document: impl Into<Arc<Value>>) -> Registry {
        self.insert(uri, document);
        self
    }

    /// Store `document` under the normalized form of `uri`.
    ///
    /// Returns the document previously stored under the same key, if any.
    pub fn insert(&mut self, uri: &str, document: impl Into<Arc<Value>>) -> Option<Arc<Value>> {
        let key: Arc<str> = uri::normalize(uri).into();
        let document = document.into();
        let previous = self.documents.insert(Arc::clone(&key), Arc::clone(&document));
        if previous.is_some() {
            self.forget(&key);
        }
        self.index(&key, &document);
        tracing::debug!(uri = %key, "Registered document");
        previous
    }

    /// Get the document stored under `uri`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no document is stored under the normalized URI.
    pub fn get(&self, uri: &str) -> Result<&Arc<Value>, Error> {
        let key = uri::normalize(uri);
        self.documents
            .get(key.as_str())
            .ok_or_else(|| Error::not_found(key))
    }

    /// Remove the document stored under `uri` together with its `$id` and `$anchor` entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no document is stored under the normalized URI.
    pub fn remove(&mut self, uri: &str) -> Result<Arc<Value>, Error> {
        let key = uri::normalize(uri);
        let (key, document) = self
            .documents
            .remove_entry(key.as_str())
            .ok_or_else(|| Error::not_found(key))?;
        self.forget(&key);
        Ok(document)
    }

    #[must_use]
    pub fn contains(&self, uri: &str) -> bool {
        self.documents.contains_key(uri::normalize(uri).as_str())
    }

    /// Iterate over `(normalized URI, document)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Value>)> {
        self.documents.iter().map(|(uri, doc)| (&**uri, doc))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Create a resolver whose initial base URI is `base_uri`.
    #[must_use]
    pub fn resolver(&self, base_uri: &str) -> Resolver<'_> {
        Resolver::new(self, base_uri)
    }

    /// Find a resource by its normalized, fragment-less URI.
    ///
    /// Embedded `$id` resources take precedence over documents stored under the same key.
    pub(crate) fn resource(&self, uri: &str) -> Option<&Value> {
        if let Some(location) = self.resources.get(uri) {
            return self.at(location);
        }
        self.documents.get(uri).map(|document| &**document)
    }

    pub(crate) fn anchor(&self, uri: &str, name: &str) -> Option<&Value> {
        self.anchors
            .get(&AnchorKey::new(uri, name))
            .and_then(|location| self.at(location))
    }

    fn at(&self, location: &Location) -> Option<&Value> {
        let document = self.documents.get(&location.document)?;
        pointer(document, &location.pointer)
    }

    fn index(&mut self, key: &Arc<str>, document: &Value) {
        let mut queue = VecDeque::new();
        queue.push_back((key.to_string(), String::new(), document));

        while let Some((mut base, path, contents)) = queue.pop_front() {
            if let Some(id) = contents.get("$id").and_then(Value::as_str) {
                base = uri::strip_fragment(&uri::resolve_against(&base, id)).to_string();
                self.resources
                    .entry(base.clone())
                    .or_insert_with(|| Location {
                        document: Arc::clone(key),
                        pointer: path.clone(),
                    });
            }
            if let Some(anchor) = contents.get("$anchor").and_then(Value::as_str) {
                self.anchors
                    .entry(AnchorKey::new(base.clone(), anchor))
                    .or_insert_with(|| Location {
                        document: Arc::clone(key),
                        pointer: path.clone(),
                    });
            }
            for subresource in subresources_of(contents) {
                queue.push_back((
                    base.clone(),
                    format!("{path}{}", subresource.path),
                    subresource.contents,
                ));
            }
        }
    }

    fn forget(&mut self, key: &Arc<str>) {
        self.resources
            .retain(|_, location| location.document != *key);
        self.anchors.retain(|_, location| location.document != *key);
    }
}

fn unescape_segment(segment: &str) -> Cow<'_, str> {
    if segment.contains('~') {
        Cow::Owned(segment.replace("~1", "/").replace("~0", "~"))
    } else {
        Cow::Borrowed(segment)
    }
}

/// Array index segments are plain decimal numbers without a sign or leading zeros.
fn array_index(segment: &str) -> Option<usize> {
    let canonical = segment == "0"
        || (!segment.starts_with('0') && segment.bytes().all(|byte| byte.is_ascii_digit()));
    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}

/// Follow an already percent-decoded JSON pointer from `document`.
pub(crate) fn pointer<'a>(document: &'a Value, pointer: &str) -> Option<&'a Value> {
    let Some(rest) = pointer.strip_prefix('/') else {
        return pointer.is_empty().then_some(document);
    };
    let mut target = document;
    for segment in rest.split('/') {
        let segment = unescape_segment(segment);
        target = match target {
            Value::Object(object) => object.get(segment.as_ref())?,
            Value::Array(items) => items.get(array_index(&segment)?)?,
            _ => return None,
        };
    }
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::{pointer, Registry};
    use crate::Error;
    use serde_json::json;
    use std::sync::Arc;
    use test_case::test_case;

    #[test]
    fn test_empty_pointer() {
        let document = json!({});
        assert_eq!(pointer(&document, ""), Some(&document));
    }

    #[test_case("/a~1b", Some(&json!(1)); "escaped slash")]
    #[test_case("/c~0d", Some(&json!(2)); "escaped tilde")]
    #[test_case("/list/1", Some(&json!("y")); "index")]
    #[test_case("/list/01", None; "leading zero")]
    #[test_case("/list/+1", None; "signed index")]
    #[test_case("/list/0", Some(&json!("x")); "zero index")]
    #[test_case("/a~1b/x", None; "through a scalar")]
    #[test_case("/missing", None; "missing key")]
    #[test_case("no-slash", None; "not a pointer")]
    fn test_pointer(path: &str, expected: Option<&serde_json::Value>) {
        let document = json!({"a/b": 1, "c~d": 2, "list": ["x", "y"]});
        assert_eq!(pointer(&document, path), expected);
    }

    #[test]
    fn keys_are_normalized() {
        let mut registry = Registry::new();
        registry.insert("HTTP://Example.com/schema#", json!({"type": "string"}));
        assert!(registry.contains("http://example.com/schema"));
        assert_eq!(
            **registry.get("http://example.com:80/./schema").expect("Present"),
            json!({"type": "string"})
        );
        assert_eq!(registry.len(), 1);
        let keys: Vec<_> = registry.iter().map(|(uri, _)| uri.to_string()).collect();
        assert_eq!(keys, vec!["http://example.com/schema"]);
    }

    #[test]
    fn insert_overwrites() {
        let mut registry = Registry::new();
        assert!(registry
            .insert("http://example.com/schema", json!({"type": "string"}))
            .is_none());
        let previous = registry
            .insert("http://example.com/schema#", json!({"type": "number"}))
            .expect("Previous document");
        assert_eq!(*previous, json!({"type": "string"}));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            **registry.get("http://example.com/schema").expect("Present"),
            json!({"type": "number"})
        );
    }

    #[test]
    fn missing_keys() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.get("http://example.com/missing").expect_err("Missing"),
            Error::NotFound {
                uri: "http://example.com/missing".to_string()
            }
        );
        assert!(matches!(
            registry.remove("http://example.com/missing#"),
            Err(Error::NotFound { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn remove_drops_embedded_resources() {
        let mut registry = Registry::from_documents([(
            "http://example.com/root.json",
            json!({"$defs": {"a": {"$id": "a.json", "$anchor": "here"}}}),
        )]);
        assert!(registry.resource("http://example.com/a.json").is_some());
        assert!(registry.anchor("http://example.com/a.json", "here").is_some());

        let removed = registry
            .remove("http://example.com/root.json")
            .expect("Present");
        assert!(removed.get("$defs").is_some());
        assert!(registry.resource("http://example.com/a.json").is_none());
        assert!(registry.anchor("http://example.com/a.json", "here").is_none());
    }

    #[test]
    fn documents_are_shared() {
        let document = Arc::new(json!({"type": "integer"}));
        let registry = Registry::new().with_document("urn:example:int", Arc::clone(&document));
        assert!(Arc::ptr_eq(
            registry.get("urn:example:int").expect("Present"),
            &document
        ));
    }

    #[test]
    fn nested_ids_are_indexed() {
        let registry = Registry::new().with_document(
            "https://example.com/root",
            json!({
                "$id": "https://example.com/root",
                "$defs": {
                    "Foo": {
                        "$id": "Foo",
                        "$defs": {"Bar": {"$anchor": "bar", "type": "string"}}
                    }
                }
            }),
        );
        assert_eq!(
            registry.anchor("https://example.com/Foo", "bar"),
            Some(&json!({"$anchor": "bar", "type": "string"}))
        );
        assert!(registry.resource("https://example.com/Foo").is_some());
    }

    #[test]
    fn debug_lists_keys() {
        let registry = Registry::from_documents([
            ("urn:b", json!(true)),
            ("urn:a", json!({"$anchor": "x"})),
        ]);
        assert_eq!(
            format!("{registry:?}"),
            "Registry { documents: [\"urn:a\", \"urn:b\"], resources: 0, anchors: 1 }"
        );
    }
}
