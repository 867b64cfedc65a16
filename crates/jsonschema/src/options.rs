use std::sync::Arc;

use referencing::{Registry, DEFAULT_ROOT_URI};
use serde_json::Value;

use crate::{regex::PatternCache, Validator};

/// Regular expression engine used for `pattern` and `patternProperties`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternOptions {
    /// `fancy-regex`, supports lookaround and backreferences.
    FancyRegex { backtrack_limit: Option<usize> },
    /// `regex`, linear time matching without lookaround.
    Regex { size_limit: Option<usize> },
}

impl PatternOptions {
    #[must_use]
    pub fn fancy_regex() -> PatternOptions {
        PatternOptions::FancyRegex {
            backtrack_limit: None,
        }
    }

    #[must_use]
    pub fn regex() -> PatternOptions {
        PatternOptions::Regex { size_limit: None }
    }

    /// Limit backtracking steps. Only meaningful for `fancy-regex`.
    #[must_use]
    pub fn backtrack_limit(self, limit: usize) -> PatternOptions {
        match self {
            PatternOptions::FancyRegex { .. } => PatternOptions::FancyRegex {
                backtrack_limit: Some(limit),
            },
            other @ PatternOptions::Regex { .. } => other,
        }
    }

    /// Limit the compiled program size. Only meaningful for `regex`.
    #[must_use]
    pub fn size_limit(self, limit: usize) -> PatternOptions {
        match self {
            PatternOptions::Regex { .. } => PatternOptions::Regex {
                size_limit: Some(limit),
            },
            other @ PatternOptions::FancyRegex { .. } => other,
        }
    }
}

impl Default for PatternOptions {
    fn default() -> Self {
        PatternOptions::fancy_regex()
    }
}

/// Configuration for building a [`Validator`].
#[derive(Debug, Clone, Default)]
pub struct ValidationOptions {
    base_uri: Option<String>,
    resources: Vec<(String, Arc<Value>)>,
    pattern_options: PatternOptions,
}

impl ValidationOptions {
    /// Build a validator for `schema`.
    ///
    /// The root schema is registered under its `$id` if it has one, otherwise
    /// under the configured base URI, `json-schema:///` by default.
    #[must_use]
    pub fn build(&self, schema: &Value) -> Validator {
        let base_uri = schema
            .get("$id")
            .and_then(Value::as_str)
            .or(self.base_uri.as_deref())
            .unwrap_or(DEFAULT_ROOT_URI);
        let root = Arc::new(schema.clone());
        let mut registry = Registry::new();
        for (uri, resource) in &self.resources {
            registry.insert(uri, Arc::clone(resource));
        }
        registry.insert(base_uri, Arc::clone(&root));
        tracing::debug!(
            base_uri,
            resources = registry.len(),
            "Building validator"
        );
        Validator::new(
            registry,
            referencing::uri::normalize(base_uri),
            root,
            PatternCache::new(self.pattern_options),
        )
    }

    /// Base URI for the root schema when it has no `$id`.
    #[must_use]
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }

    /// Make `resource` available to `$ref` under `uri`.
    #[must_use]
    pub fn with_resource(mut self, uri: impl Into<String>, resource: impl Into<Arc<Value>>) -> Self {
        self.resources.push((uri.into(), resource.into()));
        self
    }

    #[must_use]
    pub fn with_pattern_options(mut self, options: PatternOptions) -> Self {
        self.pattern_options = options;
        self
    }
}
