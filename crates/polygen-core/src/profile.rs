//! Target profiles: one per (language, serialization library) pair.
//!
//! A [`TargetProfile`] is pure data. It carries the direct type mapping for
//! every supported primitive kind and the nullability policy table the
//! resolver consults. Backends construct their profile once through
//! [`TargetProfileBuilder`]; it is never mutated afterwards.

use crate::error::{GenError, GenResult};
use crate::naming::{Case, avoid_keyword};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

/// Identifier of a profile, also the first path segment of its output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProfileId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A type expression in the target language plus the imports it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetType {
    pub expr: String,

    /// Fully qualified imports, in the backend's own notation.
    #[serde(default)]
    pub imports: Vec<String>,
}

impl TargetType {
    pub fn new(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            imports: Vec::new(),
        }
    }

    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        let import = import.into();
        if !self.imports.contains(&import) {
            self.imports.push(import);
        }
        self
    }
}

/// How a primitive kind maps to the target in its two forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMapping {
    /// Type used when the value is always present.
    pub direct: TargetType,

    /// Type able to hold null. Equal to `direct` for reference types.
    pub nullable: TargetType,
}

impl TypeMapping {
    /// A type whose direct form already admits null.
    pub fn reference(ty: TargetType) -> Self {
        Self {
            direct: ty.clone(),
            nullable: ty,
        }
    }

    /// A type with distinct direct and boxed forms (e.g. `int` / `Integer`).
    pub fn boxed(direct: TargetType, nullable: TargetType) -> Self {
        Self { direct, nullable }
    }
}

/// Key of the nullability policy table: the variant kind of the inner node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NullabilityKey {
    Primitive(String),
    Named,
    Elements,
    Values,
}

impl NullabilityKey {
    pub fn primitive(name: impl Into<String>) -> Self {
        NullabilityKey::Primitive(name.into())
    }
}

impl fmt::Display for NullabilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NullabilityKey::Primitive(name) => f.write_str(name),
            NullabilityKey::Named => f.write_str("<named>"),
            NullabilityKey::Elements => f.write_str("<elements>"),
            NullabilityKey::Values => f.write_str("<values>"),
        }
    }
}

/// The representation a nullable type takes under a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullabilityPolicy {
    /// Emit a one-field, wire-transparent `Notnull<Kind>` class.
    WrapperClass,

    /// Use the target's optional construct (`Optional[T]`, `T?`, ...).
    NativeOptional,

    /// The target type already admits null; use its nullable form.
    NativeNullable,
}

impl fmt::Display for NullabilityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NullabilityPolicy::WrapperClass => "wrapper class",
            NullabilityPolicy::NativeOptional => "native optional",
            NullabilityPolicy::NativeNullable => "native nullable",
        };
        f.write_str(label)
    }
}

/// A generic target construct (`Optional[{}]`, `List<{}>`, ...); `{}` stands
/// for the inner type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTemplate {
    pub template: String,
    pub import: Option<String>,
}

impl TypeTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            import: None,
        }
    }

    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.import = Some(import.into());
        self
    }

    /// Wrap `inner` in the construct.
    pub fn apply(&self, inner: &TargetType) -> TargetType {
        let mut ty = TargetType {
            expr: self.template.replace("{}", &inner.expr),
            imports: inner.imports.clone(),
        };
        if let Some(import) = &self.import {
            ty = ty.with_import(import.clone());
        }
        ty
    }
}

/// A (language, serialization library) pair and its tables.
#[derive(Debug, Clone)]
pub struct TargetProfile {
    id: ProfileId,
    language: String,
    library: String,
    file_extension: String,
    type_case: Case,
    field_case: Case,
    variant_case: Case,
    keywords: BTreeSet<String>,
    reserved_types: BTreeSet<String>,
    type_map: BTreeMap<String, TypeMapping>,
    nullability: BTreeMap<NullabilityKey, NullabilityPolicy>,
    optional_syntax: Option<TypeTemplate>,
    elements_syntax: Option<TypeTemplate>,
    values_syntax: Option<TypeTemplate>,
    named_import: Option<String>,
}

impl TargetProfile {
    /// Start building a profile.
    pub fn builder(
        id: impl Into<String>,
        language: impl Into<String>,
        library: impl Into<String>,
    ) -> TargetProfileBuilder {
        TargetProfileBuilder {
            profile: TargetProfile {
                id: ProfileId::new(id),
                language: language.into(),
                library: library.into(),
                file_extension: String::new(),
                type_case: Case::Pascal,
                field_case: Case::Camel,
                variant_case: Case::ScreamingSnake,
                keywords: BTreeSet::new(),
                reserved_types: BTreeSet::new(),
                type_map: BTreeMap::new(),
                nullability: BTreeMap::new(),
                optional_syntax: None,
                elements_syntax: None,
                values_syntax: None,
                named_import: None,
            },
        }
    }

    pub fn id(&self) -> &ProfileId {
        &self.id
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn library(&self) -> &str {
        &self.library
    }

    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }

    /// File name for a declared symbol: `<Symbol>.<ext>`.
    pub fn file_name(&self, symbol: &str) -> String {
        format!("{symbol}.{}", self.file_extension)
    }

    /// Target name for a definition or root identifier.
    ///
    /// Keywords and the type names generated code itself refers to are
    /// suffixed with `_`.
    pub fn type_name(&self, identifier: &str) -> String {
        let name = avoid_keyword(self.type_case.apply(identifier), &self.keywords);
        avoid_keyword(name, &self.reserved_types)
    }

    /// Target name for a field.
    pub fn field_name(&self, name: &str) -> String {
        avoid_keyword(self.field_case.apply(name), &self.keywords)
    }

    /// Target name for an enum variant.
    ///
    /// Characters other than letters, digits and `_` become `_`, and
    /// leading and trailing `_` are dropped. Names that would not start with a
    /// letter are prefixed with `V`; an empty name becomes `EMPTY`. The
    /// result never both starts and ends with `_`.
    pub fn variant_name(&self, name: &str) -> String {
        let sanitized: String = self
            .variant_case
            .apply(name)
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
            .collect();
        let trimmed = sanitized.trim_matches('_');
        let cased = match trimmed.chars().next() {
            None => "EMPTY".to_string(),
            Some(first) if first.is_alphabetic() => trimmed.to_string(),
            Some(_) => format!("V{trimmed}"),
        };
        avoid_keyword(cased, &self.keywords)
    }

    /// Direct and nullable mapping of a primitive kind.
    pub fn mapping(&self, primitive: &str) -> Option<&TypeMapping> {
        self.type_map.get(primitive)
    }

    /// Like [`mapping`](Self::mapping), failing with `UnsupportedPrimitive`.
    pub fn require_mapping(&self, primitive: &str) -> GenResult<&TypeMapping> {
        self.mapping(primitive)
            .ok_or_else(|| GenError::UnsupportedPrimitive {
                primitive: primitive.to_string(),
                profile: self.id.to_string(),
            })
    }

    /// The nullability policy for a key, if the table has an entry.
    pub fn policy(&self, key: &NullabilityKey) -> Option<NullabilityPolicy> {
        self.nullability.get(key).copied()
    }

    /// Every entry of the nullability policy table, keys sorted.
    pub fn policies(&self) -> impl Iterator<Item = (&NullabilityKey, &NullabilityPolicy)> {
        self.nullability.iter()
    }

    pub fn optional_syntax(&self) -> Option<&TypeTemplate> {
        self.optional_syntax.as_ref()
    }

    /// Array construct, if the target supports arrays.
    pub fn elements_syntax(&self) -> Option<&TypeTemplate> {
        self.elements_syntax.as_ref()
    }

    /// String-keyed map construct, if the target supports maps.
    pub fn values_syntax(&self) -> Option<&TypeTemplate> {
        self.values_syntax.as_ref()
    }

    /// Direct mapping of a reference to a named record.
    pub fn named_type(&self, identifier: &str) -> TargetType {
        let name = self.type_name(identifier);
        let ty = TargetType::new(name.clone());
        match &self.named_import {
            Some(template) => ty.with_import(template.replace("{}", &name)),
            None => ty,
        }
    }
}

/// Builder for [`TargetProfile`].
#[derive(Debug, Clone)]
pub struct TargetProfileBuilder {
    profile: TargetProfile,
}

impl TargetProfileBuilder {
    pub fn file_extension(mut self, extension: impl Into<String>) -> Self {
        self.profile.file_extension = extension.into();
        self
    }

    pub fn naming(mut self, type_case: Case, field_case: Case) -> Self {
        self.profile.type_case = type_case;
        self.profile.field_case = field_case;
        self
    }

    pub fn variant_naming(mut self, variant_case: Case) -> Self {
        self.profile.variant_case = variant_case;
        self
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profile
            .keywords
            .extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Type names the generated code refers to, such as imported library
    /// types. Definitions with these names are renamed.
    pub fn reserved_type_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profile
            .reserved_types
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn primitive(mut self, name: impl Into<String>, mapping: TypeMapping) -> Self {
        self.profile.type_map.insert(name.into(), mapping);
        self
    }

    pub fn nullability(mut self, key: NullabilityKey, policy: NullabilityPolicy) -> Self {
        self.profile.nullability.insert(key, policy);
        self
    }

    /// Apply `policy` to every primitive kind mapped so far.
    pub fn nullability_for_all_primitives(mut self, policy: NullabilityPolicy) -> Self {
        let kinds: Vec<String> = self.profile.type_map.keys().cloned().collect();
        for kind in kinds {
            self.profile
                .nullability
                .insert(NullabilityKey::Primitive(kind), policy);
        }
        self
    }

    pub fn optional_syntax(mut self, syntax: TypeTemplate) -> Self {
        self.profile.optional_syntax = Some(syntax);
        self
    }

    pub fn elements_syntax(mut self, syntax: TypeTemplate) -> Self {
        self.profile.elements_syntax = Some(syntax);
        self
    }

    pub fn values_syntax(mut self, syntax: TypeTemplate) -> Self {
        self.profile.values_syntax = Some(syntax);
        self
    }

    /// Import template for named types; `{}` stands for the target type name.
    pub fn named_import(mut self, template: impl Into<String>) -> Self {
        self.profile.named_import = Some(template.into());
        self
    }

    pub fn build(self) -> TargetProfile {
        self.profile
    }
}

/// Immutable set of profiles known to a run.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: BTreeMap<ProfileId, Arc<TargetProfile>>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile. A later profile with the same id replaces the earlier one.
    pub fn with(mut self, profile: TargetProfile) -> Self {
        self.profiles
            .insert(profile.id().clone(), Arc::new(profile));
        self
    }

    pub fn get(&self, id: &ProfileId) -> Option<&Arc<TargetProfile>> {
        self.profiles.get(id)
    }

    /// Look up a profile, failing with `UnsupportedTarget`.
    pub fn require(&self, id: &ProfileId) -> GenResult<&Arc<TargetProfile>> {
        self.get(id).ok_or_else(|| GenError::UnsupportedTarget {
            profile: id.to_string(),
        })
    }

    /// Profile ids in sorted order.
    pub fn ids(&self) -> Vec<ProfileId> {
        self.profiles.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<TargetProfile>> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
#[path = "profile/profile_tests.rs"]
mod profile_tests;
