//! Instance locations.
use std::fmt;

/// A JSON pointer to a location inside the validated instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Location(String);

impl Location {
    /// The root location, an empty pointer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum LocationSegment<'a> {
    Property(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for LocationSegment<'a> {
    fn from(value: &'a str) -> Self {
        LocationSegment::Property(value)
    }
}

impl From<usize> for LocationSegment<'_> {
    fn from(value: usize) -> Self {
        LocationSegment::Index(value)
    }
}

/// A location built up on the stack while descending into an instance.
///
/// Materialized into a [`Location`] only when an error is reported.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LazyLocation<'a> {
    segment: Option<LocationSegment<'a>>,
    parent: Option<&'a LazyLocation<'a>>,
}

impl<'a> LazyLocation<'a> {
    pub(crate) const fn new() -> Self {
        LazyLocation {
            segment: None,
            parent: None,
        }
    }

    #[must_use]
    pub(crate) fn push<'c>(&'c self, segment: impl Into<LocationSegment<'c>>) -> LazyLocation<'c>
    where
        'a: 'c,
    {
        LazyLocation {
            segment: Some(segment.into()),
            parent: Some(self),
        }
    }
}

impl From<&LazyLocation<'_>> for Location {
    fn from(value: &LazyLocation<'_>) -> Self {
        let mut segments = Vec::new();
        let mut current = Some(value);
        while let Some(location) = current {
            if let Some(segment) = location.segment {
                segments.push(segment);
            }
            current = location.parent;
        }
        let mut buffer = String::new();
        for segment in segments.iter().rev() {
            buffer.push('/');
            match segment {
                LocationSegment::Property(property) => {
                    for ch in property.chars() {
                        match ch {
                            '~' => buffer.push_str("~0"),
                            '/' => buffer.push_str("~1"),
                            _ => buffer.push(ch),
                        }
                    }
                }
                LocationSegment::Index(idx) => buffer.push_str(&idx.to_string()),
            }
        }
        Location(buffer)
    }
}
