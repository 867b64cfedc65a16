//! URI normalization used for every registry key.
//!
//! Absolute URIs go through [`url::Url`], which lowercases the scheme and host,
//! drops default ports and removes dot segments. Everything else, including
//! relative references, is split into its five components and reassembled.
//! In both cases an empty query (`?`) or an empty fragment (`#`) is dropped, so
//! `http://example.com/schema#` and `http://example.com/schema` are the same key.
use core::fmt;

use url::Url;

/// Normalize a URI or URI reference.
///
/// Never fails: any string is accepted. The result is idempotent, i.e.
/// `normalize(&normalize(x)) == normalize(x)`.
#[must_use]
pub fn normalize(uri: &str) -> String {
    match Url::parse(uri) {
        Ok(url) => Components::split(url.as_str()).to_string(),
        Err(_) => Components::split(uri).to_string(),
    }
}

/// Resolve `reference` against `base` and normalize the result.
///
/// When `base` is not an absolute URI, the reference is merged with the base
/// path as far as possible (RFC 3986, section 5.2.3) without failing.
#[must_use]
pub fn resolve_against(base: &str, reference: &str) -> String {
    if let Ok(absolute) = Url::parse(reference) {
        return Components::split(absolute.as_str()).to_string();
    }
    if let Ok(base) = Url::parse(base) {
        if let Ok(joined) = base.join(reference) {
            return Components::split(joined.as_str()).to_string();
        }
    }
    let reference_parts = Components::split(reference);
    if reference_parts.scheme.is_some() || reference_parts.authority.is_some() {
        return reference_parts.to_string();
    }
    let base_parts = Components::split(base);
    if reference.is_empty() || reference.starts_with('#') {
        let mut merged = base_parts;
        merged.fragment = reference_parts.fragment;
        return merged.to_string();
    }
    let path = if reference_parts.path.starts_with('/') || reference_parts.path.is_empty() {
        reference_parts.path.to_string()
    } else {
        match base_parts.path.rfind('/') {
            Some(idx) => format!("{}{}", &base_parts.path[..=idx], reference_parts.path),
            None => reference_parts.path.to_string(),
        }
    };
    let query = if reference_parts.path.is_empty() && reference_parts.query.is_none() {
        base_parts.query
    } else {
        reference_parts.query
    };
    Components {
        scheme: base_parts.scheme,
        authority: base_parts.authority,
        path: &path,
        query,
        fragment: reference_parts.fragment,
    }
    .to_string()
}

/// The part of `uri` before its fragment.
#[must_use]
pub fn strip_fragment(uri: &str) -> &str {
    match uri.split_once('#') {
        Some((before, _)) => before,
        None => uri,
    }
}

/// RFC 3986 components of a URI reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Components<'a> {
    scheme: Option<&'a str>,
    authority: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> Components<'a> {
    fn split(input: &'a str) -> Components<'a> {
        let (rest, fragment) = match input.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (input, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };
        let (scheme, rest) = match rest.find(':') {
            Some(idx) if is_scheme(&rest[..idx]) => (Some(&rest[..idx]), &rest[idx + 1..]),
            _ => (None, rest),
        };
        let (authority, path) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find('/').unwrap_or(after.len());
                (Some(&after[..end]), &after[end..])
            }
            None => (None, rest),
        };
        Components {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }
}

impl fmt::Display for Components<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = self.scheme {
            for c in scheme.chars() {
                write!(f, "{}", c.to_ascii_lowercase())?;
            }
            f.write_str(":")?;
        }
        if let Some(authority) = self.authority {
            write!(f, "//{authority}")?;
        }
        f.write_str(self.path)?;
        if let Some(query) = self.query.filter(|q| !q.is_empty()) {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = self.fragment.filter(|f| !f.is_empty()) {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
