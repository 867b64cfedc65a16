//! Which parts of an instance a schema evaluates.
//!
//! `unevaluatedItems` and `unevaluatedProperties` apply only to what no other
//! keyword has looked at. The trackers here walk a schema's applicators
//! (`$ref`, `allOf`, `if`, ...) and collect the array indices or object
//! properties they evaluate, asking the validator whenever a subschema has
//! to match first.
//!
//! Results may contain duplicates; only membership matters. Boolean schemas
//! evaluate nothing.
mod items;
mod properties;

pub use items::evaluated_items;
pub use properties::{additional_properties, evaluated_properties};
