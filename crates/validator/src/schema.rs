//! Allow-schemas
//!
//! An allow-schema lists the keys a data object may carry. Each key maps
//! to a [`SchemaNode`]: either a leaf [`Verifier`] run against the value, or
//! a nested [`Schema`] the value (an object) is matched against recursively.
//!
//! Keys keep the order they were declared in, which is the order the
//! required-key pass visits them in.
//!
//! # Examples
//!
//! ```
//! use reqshape_validator::prelude::*;
//!
//! let schema = Schema::builder()
//!     .field("userName", is_string_range(1, 20))
//!     .field("age", is_number())
//!     .nested(
//!         "data",
//!         Schema::builder()
//!             .field("height", is_number())
//!             .field("weight", is_number()),
//!     )
//!     .build();
//!
//! assert_eq!(schema.len(), 3);
//! assert!(!schema.allows_extra_keys());
//! ```

use indexmap::IndexMap;

use crate::foundation::{IntoVerifier, Verifier};

// ============================================================================
// SCHEMA NODE
// ============================================================================

/// One entry of an allow-schema.
#[derive(Debug, Clone)]
pub enum SchemaNode {
    /// The value is checked by a verifier.
    Leaf(Verifier),
    /// The value must be an object matching a nested schema.
    Nested(Schema),
}

impl SchemaNode {
    /// Returns the verifier of a leaf node.
    pub fn as_leaf(&self) -> Option<&Verifier> {
        match self {
            Self::Leaf(verifier) => Some(verifier),
            Self::Nested(_) => None,
        }
    }

    /// Returns the schema of a nested node.
    pub fn as_nested(&self) -> Option<&Schema> {
        match self {
            Self::Nested(schema) => Some(schema),
            Self::Leaf(_) => None,
        }
    }
}

impl From<Verifier> for SchemaNode {
    fn from(verifier: Verifier) -> Self {
        Self::Leaf(verifier)
    }
}

impl From<Schema> for SchemaNode {
    fn from(schema: Schema) -> Self {
        Self::Nested(schema)
    }
}

impl From<SchemaBuilder> for SchemaNode {
    fn from(builder: SchemaBuilder) -> Self {
        Self::Nested(builder.build())
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// An allow-schema for one level of a data object.
///
/// `allow_extra` tolerates data keys the schema does not list, at this
/// level only; nested schemas carry their own flag.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: IndexMap<String, SchemaNode>,
    allow_extra: bool,
}

impl Schema {
    /// Starts building a schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// A schema with no keys. Any data key is unexpected unless extras are
    /// allowed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Looks up the node for `key`.
    pub fn get(&self, key: &str) -> Option<&SchemaNode> {
        self.fields.get(key)
    }

    /// Returns true if the schema lists `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Iterates the entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.fields.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Number of listed keys.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no key is listed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether data keys absent from this schema are tolerated at this level.
    pub fn allows_extra_keys(&self) -> bool {
        self.allow_extra
    }

    /// Nesting depth: 1 for a schema of leaves only.
    pub fn depth(&self) -> usize {
        1 + self
            .fields
            .values()
            .filter_map(SchemaNode::as_nested)
            .map(Schema::depth)
            .max()
            .unwrap_or(0)
    }
}

impl<K: Into<String>> FromIterator<(K, SchemaNode)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, SchemaNode)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, node)| (k.into(), node)).collect(),
            allow_extra: false,
        }
    }
}

impl From<SchemaBuilder> for Schema {
    fn from(builder: SchemaBuilder) -> Self {
        builder.build()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Schema`].
///
/// Declaring a key twice replaces the earlier node but keeps the key's
/// original position.
#[derive(Debug, Clone, Default)]
#[must_use = "builder does nothing until .build() is called"]
pub struct SchemaBuilder {
    fields: IndexMap<String, SchemaNode>,
    allow_extra: bool,
}

impl SchemaBuilder {
    /// Adds a leaf key checked by `verifier`.
    pub fn field(mut self, key: impl Into<String>, verifier: impl IntoVerifier) -> Self {
        self.fields
            .insert(key.into(), SchemaNode::Leaf(verifier.into_verifier()));
        self
    }

    /// Adds a key whose value must match a nested schema.
    pub fn nested(mut self, key: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.fields
            .insert(key.into(), SchemaNode::Nested(schema.into()));
        self
    }

    /// Adds a prebuilt node.
    pub fn node(mut self, key: impl Into<String>, node: impl Into<SchemaNode>) -> Self {
        self.fields.insert(key.into(), node.into());
        self
    }

    /// Tolerates data keys this level does not list.
    pub fn allow_extra_keys(self) -> Self {
        self.allow_extra(true)
    }

    /// Sets whether data keys this level does not list are tolerated.
    pub fn allow_extra(mut self, allow: bool) -> Self {
        self.allow_extra = allow;
        self
    }

    /// Finishes the schema.
    pub fn build(self) -> Schema {
        Schema {
            fields: self.fields,
            allow_extra: self.allow_extra,
        }
    }
}
