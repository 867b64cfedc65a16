//! Compiled `pattern` / `patternProperties` regular expressions.
//!
//! Matching is a *search*, the pattern may match anywhere in the text. Anchored
//! patterns made of plain characters skip the regex engines entirely.
use std::{fmt, sync::Arc};

use ahash::AHashMap;
use parking_lot::Mutex;

use crate::{options::PatternOptions, Error};

/// How a compiled pattern is matched.
enum Matcher {
    /// `^abc`
    StartsWith(String),
    /// `^abc$`
    Equals(String),
    Fancy(Box<fancy_regex::Regex>),
    Standard(regex::Regex),
}

/// Literal form of an anchored pattern, or `None` if a regex engine is needed.
///
/// Only ASCII alphanumerics, `-`, `_` and `/` are taken literally.
fn literal_form(pattern: &str) -> Option<Matcher> {
    let body = pattern.strip_prefix('^')?;
    let (body, exact) = match body.strip_suffix('$') {
        Some(body) => (body, true),
        None => (body, false),
    };
    if !body
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/'))
    {
        return None;
    }
    let literal = body.to_string();
    Some(if exact {
        Matcher::Equals(literal)
    } else {
        Matcher::StartsWith(literal)
    })
}

pub(crate) struct Pattern {
    source: String,
    matcher: Matcher,
}

impl Pattern {
    pub(crate) fn new(pattern: &str, options: PatternOptions) -> Result<Pattern, Error> {
        let matcher = match literal_form(pattern) {
            Some(matcher) => matcher,
            None => compile(pattern, options)?,
        };
        Ok(Pattern {
            source: pattern.to_string(),
            matcher,
        })
    }

    pub(crate) fn is_match(&self, text: &str) -> Result<bool, Error> {
        match &self.matcher {
            Matcher::StartsWith(prefix) => Ok(text.starts_with(prefix.as_str())),
            Matcher::Equals(literal) => Ok(text == literal),
            Matcher::Fancy(regex) => regex
                .is_match(text)
                .map_err(|error| Error::pattern(self.source.as_str(), error)),
            Matcher::Standard(regex) => Ok(regex.is_match(text)),
        }
    }
}

fn compile(pattern: &str, options: PatternOptions) -> Result<Matcher, Error> {
    match options {
        PatternOptions::FancyRegex { backtrack_limit } => {
            let mut builder = fancy_regex::RegexBuilder::new(pattern);
            if let Some(limit) = backtrack_limit {
                builder.backtrack_limit(limit);
            }
            builder
                .build()
                .map(|regex| Matcher::Fancy(Box::new(regex)))
                .map_err(|error| Error::pattern(pattern, error))
        }
        PatternOptions::Regex { size_limit } => {
            let mut builder = regex::RegexBuilder::new(pattern);
            if let Some(limit) = size_limit {
                builder.size_limit(limit);
            }
            builder
                .build()
                .map(Matcher::Standard)
                .map_err(|error| Error::pattern(pattern, error))
        }
    }
}

/// Compiled patterns shared by every evaluation of one validator.
pub(crate) struct PatternCache {
    options: PatternOptions,
    compiled: Mutex<AHashMap<String, Arc<Pattern>>>,
}

impl PatternCache {
    pub(crate) fn new(options: PatternOptions) -> PatternCache {
        PatternCache {
            options,
            compiled: Mutex::new(AHashMap::new()),
        }
    }

    pub(crate) fn is_match(&self, pattern: &str, text: &str) -> Result<bool, Error> {
        self.get_or_compile(pattern)?.is_match(text)
    }

    fn get_or_compile(&self, pattern: &str) -> Result<Arc<Pattern>, Error> {
        let cached = self.compiled.lock().get(pattern).cloned();
        if let Some(compiled) = cached {
            return Ok(compiled);
        }
        tracing::trace!(pattern, "Compiling pattern");
        let compiled = Arc::new(Pattern::new(pattern, self.options)?);
        self.compiled
            .lock()
            .insert(pattern.to_string(), Arc::clone(&compiled));
        Ok(compiled)
    }
}

impl fmt::Debug for PatternCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternCache")
            .field("options", &self.options)
            .field("compiled", &self.compiled.lock().len())
            .finish()
    }
}
