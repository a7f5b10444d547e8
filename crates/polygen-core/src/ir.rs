//! Intermediate representation for schema types.
//!
//! The IR is the language-neutral type model shared by every target backend.
//! A front end (schema parser, manifest loader, or hand-written builder code)
//! populates it once; the resolver and emitters only read it afterwards.
//!
//! # Structure
//!
//! - [`TypeNode`]: primitives, references to named definitions, arrays,
//!   string-keyed maps, and the [`Nullable`](TypeNode::Nullable) modifier
//! - [`FieldDef`]: a record property with its wire name and optionality
//! - [`RecordDef`]: a named record, addressable through [`TypeNode::Named`]
//! - [`EnumDef`]: a named set of string values, also addressable by name
//! - [`RootDef`]: a top-level type expression generated as a transparent wrapper
//! - [`Schema`]: definitions (in a [`SymbolTable`]) plus roots
//!
//! # Serde form
//!
//! `TypeNode` is externally tagged, which keeps manifests terse:
//!
//! ```toml
//! type = { nullable = { primitive = "string" } }
//! ```
//!
//! # Examples
//!
//! ```
//! use polygen_core::ir::{FieldDef, RecordDef, Schema, TypeNode};
//!
//! let schema = Schema::new()
//!     .with_record(
//!         RecordDef::new("address")
//!             .field(FieldDef::new("street", TypeNode::primitive("string")))
//!             .field(FieldDef::new("unit", TypeNode::primitive("string")).optional()),
//!     )
//!     .unwrap()
//!     .with_root("root", TypeNode::nullable(TypeNode::named("address")));
//!
//! assert!(schema.check_references().is_empty());
//! ```

use crate::error::{GenError, GenResult};
use crate::symbols::SymbolTable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A schema type.
///
/// Equality is structural: two nodes are equal iff their variants and all
/// sub-structure match recursively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeNode {
    /// A scalar, identified by its primitive kind name (e.g. `string`, `int32`).
    Primitive(String),

    /// A reference to a record or enum, resolved through the [`SymbolTable`].
    Named(String),

    /// A JSON array of the inner type.
    Elements(Box<TypeNode>),

    /// A JSON object with string keys and values of the inner type.
    Values(Box<TypeNode>),

    /// The nullable modifier. Never directly wraps another `Nullable` when
    /// built through [`TypeNode::nullable`].
    Nullable(Box<TypeNode>),
}

impl TypeNode {
    /// Create a primitive node.
    pub fn primitive(name: impl Into<String>) -> Self {
        TypeNode::Primitive(name.into())
    }

    /// Create a reference to a named definition.
    pub fn named(identifier: impl Into<String>) -> Self {
        TypeNode::Named(identifier.into())
    }

    /// Create an array node.
    pub fn elements(inner: TypeNode) -> Self {
        TypeNode::Elements(Box::new(inner))
    }

    /// Create a string-keyed map node.
    pub fn values(inner: TypeNode) -> Self {
        TypeNode::Values(Box::new(inner))
    }

    /// Wrap a node in the nullable modifier.
    ///
    /// Nullability is idempotent: wrapping an already nullable node returns it
    /// unchanged.
    pub fn nullable(inner: TypeNode) -> Self {
        match inner {
            TypeNode::Nullable(_) => inner,
            other => TypeNode::Nullable(Box::new(other)),
        }
    }

    /// Whether the top-level variant is `Nullable`.
    pub fn is_nullable(&self) -> bool {
        matches!(self, TypeNode::Nullable(_))
    }

    /// Collapse directly nested `Nullable` wrappers into a single one.
    ///
    /// The enum variants are public, so a caller (or a deserialized manifest)
    /// can still build `Nullable(Nullable(x))`; the resolver normalizes through
    /// this before lookup.
    pub fn collapsed(&self) -> TypeNode {
        match self {
            TypeNode::Nullable(inner) => TypeNode::nullable(inner.collapsed()),
            TypeNode::Elements(inner) => TypeNode::elements(inner.collapsed()),
            TypeNode::Values(inner) => TypeNode::values(inner.collapsed()),
            other => other.clone(),
        }
    }

    /// Whether the node is an array or a map.
    pub fn is_container(&self) -> bool {
        matches!(self, TypeNode::Elements(_) | TypeNode::Values(_))
    }

    /// The node with any nullable modifier removed.
    pub fn non_nullable(&self) -> &TypeNode {
        match self {
            TypeNode::Nullable(inner) => inner.non_nullable(),
            other => other,
        }
    }

    /// Every definition identifier this node references.
    pub fn named_references(&self) -> Vec<&str> {
        match self {
            TypeNode::Primitive(_) => Vec::new(),
            TypeNode::Named(name) => vec![name.as_str()],
            TypeNode::Nullable(inner) | TypeNode::Elements(inner) | TypeNode::Values(inner) => {
                inner.named_references()
            }
        }
    }

    /// Every `Nullable` node inside this one, outermost first, including
    /// the node itself.
    pub fn nullable_nodes(&self) -> Vec<&TypeNode> {
        let mut nodes = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                TypeNode::Nullable(inner) => {
                    nodes.push(node);
                    stack.push(inner);
                }
                TypeNode::Elements(inner) | TypeNode::Values(inner) => stack.push(inner),
                TypeNode::Primitive(_) | TypeNode::Named(_) => {}
            }
        }
        nodes
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNode::Primitive(name) => write!(f, "{name}"),
            TypeNode::Named(name) => write!(f, "@{name}"),
            TypeNode::Nullable(inner) => write!(f, "{inner}?"),
            TypeNode::Elements(inner) => write!(f, "[{inner}]"),
            TypeNode::Values(inner) => write!(f, "{{{inner}}}"),
        }
    }
}

/// A property of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Schema-level field name; target naming conventions are applied later.
    pub name: String,

    /// Name on the wire. Defaults to `name`.
    #[serde(default)]
    pub json_name: Option<String>,

    #[serde(default)]
    pub description: String,

    /// Whether the property may be absent. An optional field is resolved as
    /// `Nullable(type)`.
    #[serde(default)]
    pub optional: bool,

    #[serde(rename = "type")]
    pub type_: TypeNode,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, type_: TypeNode) -> Self {
        Self {
            name: name.into(),
            json_name: None,
            description: String::new(),
            optional: false,
            type_,
        }
    }

    /// Mark the field as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Override the wire name.
    pub fn json_name(mut self, json_name: impl Into<String>) -> Self {
        self.json_name = Some(json_name.into());
        self
    }

    /// The name used on the wire.
    pub fn wire_name(&self) -> &str {
        self.json_name.as_deref().unwrap_or(&self.name)
    }

    /// The type the resolver sees for this field.
    pub fn effective_type(&self) -> TypeNode {
        if self.optional {
            TypeNode::nullable(self.type_.clone())
        } else {
            self.type_.clone()
        }
    }
}

/// A named record definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDef {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Properties in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDef>,

    /// Whether properties not listed in `fields` are tolerated on input.
    #[serde(default)]
    pub additional: bool,
}

impl RecordDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            fields: Vec::new(),
            additional: false,
        }
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a field.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Tolerate unknown properties on input.
    pub fn additional(mut self) -> Self {
        self.additional = true;
        self
    }
}

/// One value of an [`EnumDef`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumVariant {
    /// The string on the wire.
    pub value: String,

    /// Schema-level name; defaults to `value`.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: String,
}

impl EnumVariant {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: None,
            description: String::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The name target naming conventions are applied to.
    pub fn schema_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.value)
    }
}

/// A named enumeration of string values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Values in declaration order.
    pub variants: Vec<EnumVariant>,
}

impl EnumDef {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: String::new(),
            variants: values.into_iter().map(EnumVariant::new).collect(),
        }
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a fully described variant.
    pub fn variant(mut self, variant: EnumVariant) -> Self {
        self.variants.push(variant);
        self
    }
}

/// A top-level type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootDef {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "type")]
    pub type_: TypeNode,
}

/// A complete, immutable input to a generation run.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    definitions: SymbolTable,
    roots: Vec<RootDef>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record. Fails when a definition with the same name already exists.
    pub fn with_record(mut self, record: RecordDef) -> GenResult<Self> {
        self.definitions.insert(record)?;
        Ok(self)
    }

    /// Add an enum. Fails when a definition with the same name already exists.
    ///
    /// An enum without variants is rejected as malformed.
    pub fn with_enum(mut self, enum_: EnumDef) -> GenResult<Self> {
        if enum_.variants.is_empty() {
            return Err(GenError::MalformedType {
                symbol: enum_.name,
                reason: "enum has no variants".to_string(),
            });
        }
        self.definitions.insert(enum_)?;
        Ok(self)
    }

    /// Add a root type expression.
    pub fn with_root(mut self, name: impl Into<String>, type_: TypeNode) -> Self {
        self.roots.push(RootDef {
            name: name.into(),
            description: String::new(),
            type_,
        });
        self
    }

    /// Add a fully described root.
    pub fn push_root(&mut self, root: RootDef) {
        self.roots.push(root);
    }

    /// Every record and enum.
    pub fn definitions(&self) -> &SymbolTable {
        &self.definitions
    }

    pub fn roots(&self) -> &[RootDef] {
        &self.roots
    }

    /// Check that `node` only references known definitions.
    ///
    /// `context` names the definition the node belongs to and appears in the
    /// error.
    pub fn require_resolved(&self, node: &TypeNode, context: &str) -> GenResult<()> {
        for name in node.named_references() {
            if self.definitions.lookup(name).is_none() {
                return Err(GenError::unresolved(name, context));
            }
        }
        Ok(())
    }

    /// Check every definition, collecting all unresolved references.
    pub fn check_references(&self) -> Vec<GenError> {
        let mut errors = Vec::new();

        for record in self.definitions.records() {
            for field in &record.fields {
                if let Err(e) = self.require_resolved(&field.type_, &record.name) {
                    errors.push(e);
                }
            }
        }

        for root in &self.roots {
            if let Err(e) = self.require_resolved(&root.type_, &root.name) {
                errors.push(e);
            }
        }

        errors
    }
}
