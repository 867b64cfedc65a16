use std::{fmt, sync::Arc};

use percent_encoding::percent_decode_str;
use serde_json::Value;

use crate::{list::List, pointer, uri, Error, Registry};

/// A reference resolver tied to a [`Registry`].
///
/// A resolver is an immutable value: entering a new scope or following a
/// reference produces a *new* resolver, and the one you started from never
/// changes. Recursive algorithms pass the derived resolver down the call
/// stack, so there is nothing to pop when a branch returns or fails.
///
/// Besides the scope chain, the resolver remembers which references are
/// currently being followed for the same instance. Following one of them
/// again is a cycle and fails with [`Error::CyclicReference`].
#[derive(Clone)]
pub struct Resolver<'r> {
    registry: &'r Registry,
    base_uri: Arc<str>,
    scopes: List<Arc<str>>,
    active: List<Arc<str>>,
}

impl PartialEq for Resolver<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.base_uri == other.base_uri
            && self.scopes.len() == other.scopes.len()
            && self.scopes.iter().zip(other.scopes.iter()).all(|(a, b)| a == b)
    }
}

impl Eq for Resolver<'_> {}

impl fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("base_uri", &self.base_uri)
            .field("scopes", &format!("{:?}", self.scopes))
            .finish()
    }
}

impl<'r> Resolver<'r> {
    pub(crate) fn new(registry: &'r Registry, base_uri: &str) -> Self {
        Self {
            registry,
            base_uri: uri::normalize(base_uri).into(),
            scopes: List::new(),
            active: List::new(),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// The base URI this resolver was created with.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// The URI relative references are currently resolved against.
    #[must_use]
    pub fn resolution_scope(&self) -> &str {
        self.scopes.head().map_or(&*self.base_uri, |scope| &**scope)
    }

    /// Pushed scopes, innermost first.
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(|scope| &**scope)
    }

    /// Number of pushed scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Return a resolver with `scope` (resolved against the current scope) on top.
    #[must_use]
    pub fn push_scope(&self, scope: &str) -> Resolver<'r> {
        self.push_resolved_scope(uri::resolve_against(self.resolution_scope(), scope))
    }

    fn push_resolved_scope(&self, scope: String) -> Resolver<'r> {
        tracing::trace!(scope = %scope, depth = self.depth() + 1, "Pushing scope");
        Resolver {
            registry: self.registry,
            base_uri: Arc::clone(&self.base_uri),
            scopes: self.scopes.push_front(scope.into()),
            active: self.active.clone(),
        }
    }

    /// Return a resolver without the innermost scope, or `None` if no scope was pushed.
    #[must_use]
    pub fn pop_scope(&self) -> Option<Resolver<'r>> {
        let scopes = self.scopes.tail()?;
        Some(Resolver {
            registry: self.registry,
            base_uri: Arc::clone(&self.base_uri),
            scopes,
            active: self.active.clone(),
        })
    }

    /// Enter `schema`: if it declares `$id`, the identified resource becomes the current scope.
    ///
    /// Entering a resource that already is the current scope pushes nothing.
    #[must_use]
    pub fn in_subresource(&self, schema: &Value) -> Resolver<'r> {
        let Some(id) = schema.get("$id").and_then(Value::as_str) else {
            return self.clone();
        };
        let scope = uri::resolve_against(self.resolution_scope(), uri::strip_fragment(id));
        if scope == self.resolution_scope() {
            self.clone()
        } else {
            self.push_resolved_scope(scope)
        }
    }

    /// Forget references in progress.
    ///
    /// Use this when moving from an instance to one of its children: reaching
    /// the same schema again for a different instance is recursion, not a cycle.
    #[must_use]
    pub fn for_child_instance(&self) -> Resolver<'r> {
        if self.active.is_empty() {
            return self.clone();
        }
        Resolver {
            registry: self.registry,
            base_uri: Arc::clone(&self.base_uri),
            scopes: self.scopes.clone(),
            active: List::new(),
        }
    }

    /// Resolve `reference` against the current scope.
    ///
    /// The returned [`Resolved`] carries a resolver whose scope is the
    /// resource the reference points into.
    ///
    /// # Errors
    ///
    /// - [`Error::Unresolvable`] if no stored resource matches;
    /// - [`Error::PointerToNowhere`] / [`Error::NoSuchAnchor`] for a bad fragment;
    /// - [`Error::CyclicReference`] if the same target is already being resolved.
    pub fn lookup(&self, reference: &str) -> Result<Resolved<'r>, Error> {
        let scope = self.resolution_scope();
        let (uri_part, fragment) = reference.split_once('#').unwrap_or((reference, ""));
        let target = if uri_part.is_empty() {
            uri::strip_fragment(scope).to_string()
        } else {
            uri::strip_fragment(&uri::resolve_against(scope, uri_part)).to_string()
        };
        tracing::trace!(reference, scope, target = %target, "Resolving reference");

        let key: Arc<str> = if fragment.is_empty() {
            Arc::from(target.as_str())
        } else {
            Arc::from(format!("{target}#{fragment}"))
        };
        if self.active.iter().any(|active| *active == key) {
            let mut chain: Vec<String> = self.active.iter().map(ToString::to_string).collect();
            chain.reverse();
            chain.push(key.to_string());
            tracing::debug!(reference, chain = ?chain, "Reference cycle detected");
            return Err(Error::cyclic_reference(reference, chain));
        }

        let Some(resource) = self.registry.resource(&target) else {
            return Err(Error::unresolvable(reference, scope));
        };
        let contents = if fragment.is_empty() {
            resource
        } else if fragment.starts_with('/') {
            let decoded = percent_decode_str(fragment)
                .decode_utf8()
                .map_err(|_| Error::pointer_to_nowhere(fragment, target.as_str()))?;
            pointer(resource, &decoded)
                .ok_or_else(|| Error::pointer_to_nowhere(fragment, target.as_str()))?
        } else {
            self.registry
                .anchor(&target, fragment)
                .ok_or_else(|| Error::no_such_anchor(fragment, target.as_str()))?
        };

        Ok(Resolved {
            contents,
            resolver: Resolver {
                registry: self.registry,
                base_uri: Arc::clone(&self.base_uri),
                scopes: self.scopes.push_front(target.into()),
                active: self.active.push_front(key),
            },
        })
    }
}

/// A reference resolved to its contents, with a resolver scoped to them.
#[derive(Debug)]
pub struct Resolved<'r> {
    contents: &'r Value,
    resolver: Resolver<'r>,
}

impl<'r> Resolved<'r> {
    /// Resolved contents.
    #[must_use]
    pub fn contents(&self) -> &'r Value {
        self.contents
    }

    /// Resolver scoped to the resolved contents.
    #[must_use]
    pub fn resolver(&self) -> &Resolver<'r> {
        &self.resolver
    }

    /// The URI of the resource the reference pointed into.
    #[must_use]
    pub fn scope(&self) -> &str {
        self.resolver.resolution_scope()
    }

    #[must_use]
    pub fn into_inner(self) -> (Resolver<'r>, &'r Value) {
        (self.resolver, self.contents)
    }
}
