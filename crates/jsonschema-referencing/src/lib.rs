//! # referencing
//!
//! A registry of JSON Schema documents keyed by normalized URIs, plus a
//! [`Resolver`] that resolves `$ref` values against a persistent scope chain.
mod error;
mod list;
mod registry;
mod resolver;
mod subresources;
pub mod uri;

pub use error::Error;
pub use list::List;
pub use registry::Registry;
pub(crate) use registry::pointer;
pub use resolver::{Resolved, Resolver};

/// Base URI used when a schema does not provide one.
pub const DEFAULT_ROOT_URI: &str = "json-schema:///";
