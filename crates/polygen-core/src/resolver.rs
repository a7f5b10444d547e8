//! Nullability resolution.
//!
//! [`Resolver::resolve`] decides, for a `(TypeNode, TargetProfile)` pair, which
//! concrete construct a type becomes in the target. The decision is a table
//! lookup in the profile; the resolver itself holds no per-target logic.
//!
//! Resolution is a pure function of its inputs and is memoized on
//! `(profile id, collapsed node)`. The cache is a [`DashMap`], so concurrent
//! generation tasks share it without a global lock. Two tasks missing on the
//! same key may both compute; the second insert overwrites with an identical
//! value.

use crate::error::{GenError, GenResult};
use crate::ir::TypeNode;
use crate::naming::{WRAPPER_PREFIX, wrapper_class_name};
use crate::profile::{
    NullabilityKey, NullabilityPolicy, ProfileId, TargetProfile, TargetType, TypeTemplate,
};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// The concrete target construct for a resolved type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedRepresentation {
    /// Non-nullable: the profile's direct mapping.
    Direct(TargetType),

    /// The target's optional construct wrapping the direct mapping.
    NativeOptional(TargetType),

    /// A one-field wrapper class, transparent on the wire.
    WrapperClass {
        class_name: String,

        /// Schema-level kind the wrapper was named after.
        primitive: String,

        /// Target type of the wrapped value.
        inner: TargetType,
    },

    /// The nullable form of a type that admits null natively.
    NativeNullablePrimitive(TargetType),
}

impl ResolvedRepresentation {
    /// Type expression a field of this representation is declared with.
    pub fn type_expr(&self) -> &str {
        match self {
            ResolvedRepresentation::Direct(ty)
            | ResolvedRepresentation::NativeOptional(ty)
            | ResolvedRepresentation::NativeNullablePrimitive(ty) => &ty.expr,
            ResolvedRepresentation::WrapperClass { class_name, .. } => class_name,
        }
    }

    /// Imports a declaration of this representation needs.
    ///
    /// A wrapper class lives in its own artifact next to its users, so
    /// referencing it imports nothing.
    pub fn imports(&self) -> &[String] {
        match self {
            ResolvedRepresentation::Direct(ty)
            | ResolvedRepresentation::NativeOptional(ty)
            | ResolvedRepresentation::NativeNullablePrimitive(ty) => &ty.imports,
            ResolvedRepresentation::WrapperClass { .. } => &[],
        }
    }

    /// The declared type as a [`TargetType`]. A wrapper needs no import.
    pub fn target_type(&self) -> TargetType {
        match self {
            ResolvedRepresentation::Direct(ty)
            | ResolvedRepresentation::NativeOptional(ty)
            | ResolvedRepresentation::NativeNullablePrimitive(ty) => ty.clone(),
            ResolvedRepresentation::WrapperClass { class_name, .. } => {
                TargetType::new(class_name.clone())
            }
        }
    }

    /// Whether the value may be null on the wire.
    pub fn is_nullable(&self) -> bool {
        !matches!(self, ResolvedRepresentation::Direct(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ResolvedRepresentation::Direct(_) => "direct",
            ResolvedRepresentation::NativeOptional(_) => "native optional",
            ResolvedRepresentation::WrapperClass { .. } => "wrapper class",
            ResolvedRepresentation::NativeNullablePrimitive(_) => "native nullable",
        }
    }
}

/// Cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Memoizing resolver shared by all generation tasks of a run.
#[derive(Debug, Default)]
pub struct Resolver {
    cache: DashMap<(ProfileId, TypeNode), ResolvedRepresentation>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `node` under `profile`.
    ///
    /// Only successful resolutions are cached.
    pub fn resolve(
        &self,
        node: &TypeNode,
        profile: &TargetProfile,
    ) -> GenResult<ResolvedRepresentation> {
        let key = (profile.id().clone(), node.collapsed());

        if let Some(hit) = self.cache.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(hit.value().clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let resolved = resolve_uncached(&key.1, profile)?;
        tracing::debug!(
            profile = %profile.id(),
            node = %key.1,
            representation = resolved.kind(),
            "resolved"
        );
        self.cache.insert(key, resolved.clone());
        Ok(resolved)
    }

    pub fn stats(&self) -> ResolverStats {
        ResolverStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.len(),
        }
    }
}

/// The resolution algorithm; `node` is already collapsed.
fn resolve_uncached(node: &TypeNode, profile: &TargetProfile) -> GenResult<ResolvedRepresentation> {
    match node {
        TypeNode::Primitive(name) => Ok(ResolvedRepresentation::Direct(
            profile.require_mapping(name)?.direct.clone(),
        )),
        TypeNode::Named(identifier) => Ok(ResolvedRepresentation::Direct(
            profile.named_type(identifier),
        )),
        TypeNode::Elements(_) | TypeNode::Values(_) => {
            Ok(ResolvedRepresentation::Direct(container_type(node, profile)?))
        }
        TypeNode::Nullable(inner) => resolve_nullable(inner, profile),
    }
}

/// Array or map type. Containers hold the nullable form of their items, so a
/// Java `int` becomes `List<Integer>`.
fn container_type(node: &TypeNode, profile: &TargetProfile) -> GenResult<TargetType> {
    let (syntax, key, inner) = match node {
        TypeNode::Elements(inner) => (profile.elements_syntax(), NullabilityKey::Elements, inner),
        TypeNode::Values(inner) => (profile.values_syntax(), NullabilityKey::Values, inner),
        other => return item_type(other, profile),
    };

    let syntax = syntax.ok_or_else(|| GenError::UnsupportedConstruct {
        construct: key.to_string(),
        profile: profile.id().to_string(),
    })?;
    Ok(syntax.apply(&item_type(inner, profile)?))
}

fn item_type(node: &TypeNode, profile: &TargetProfile) -> GenResult<TargetType> {
    match node {
        TypeNode::Primitive(name) => Ok(profile.require_mapping(name)?.nullable.clone()),
        TypeNode::Named(identifier) => Ok(profile.named_type(identifier)),
        TypeNode::Elements(_) | TypeNode::Values(_) => container_type(node, profile),
        TypeNode::Nullable(inner) => Ok(resolve_nullable(inner, profile)?.target_type()),
    }
}

fn resolve_nullable(inner: &TypeNode, profile: &TargetProfile) -> GenResult<ResolvedRepresentation> {
    match inner {
        TypeNode::Nullable(nested) => resolve_nullable(nested, profile),
        TypeNode::Primitive(name) => nullable_primitive(name, profile),
        TypeNode::Named(identifier) => nullable_named(identifier, profile),
        TypeNode::Elements(_) => nullable_container(NullabilityKey::Elements, inner, profile),
        TypeNode::Values(_) => nullable_container(NullabilityKey::Values, inner, profile),
    }
}

fn nullable_primitive(name: &str, profile: &TargetProfile) -> GenResult<ResolvedRepresentation> {
    let key = NullabilityKey::primitive(name);
    let policy = require_policy(&key, profile)?;
    let mapping = profile.require_mapping(name)?;

    Ok(match policy {
        NullabilityPolicy::WrapperClass => ResolvedRepresentation::WrapperClass {
            class_name: wrapper_class_name(name),
            primitive: name.to_string(),
            inner: mapping.nullable.clone(),
        },
        NullabilityPolicy::NativeOptional => ResolvedRepresentation::NativeOptional(
            require_optional_syntax(&key, profile)?.apply(&mapping.direct),
        ),
        NullabilityPolicy::NativeNullable => {
            ResolvedRepresentation::NativeNullablePrimitive(mapping.nullable.clone())
        }
    })
}

/// Wrappers around named definitions are named `Notnull<TypeName>`.
fn nullable_named(identifier: &str, profile: &TargetProfile) -> GenResult<ResolvedRepresentation> {
    let key = NullabilityKey::Named;
    let policy = require_policy(&key, profile)?;
    let ty = profile.named_type(identifier);

    Ok(match policy {
        NullabilityPolicy::WrapperClass => ResolvedRepresentation::WrapperClass {
            class_name: format!("{WRAPPER_PREFIX}{}", ty.expr),
            primitive: identifier.to_string(),
            inner: ty,
        },
        NullabilityPolicy::NativeOptional => ResolvedRepresentation::NativeOptional(
            require_optional_syntax(&key, profile)?.apply(&ty),
        ),
        NullabilityPolicy::NativeNullable => ResolvedRepresentation::NativeNullablePrimitive(ty),
    })
}

/// Containers have no single kind to name a wrapper after, so a
/// `WrapperClass` entry for them is rejected.
fn nullable_container(
    key: NullabilityKey,
    node: &TypeNode,
    profile: &TargetProfile,
) -> GenResult<ResolvedRepresentation> {
    let policy = require_policy(&key, profile)?;
    let ty = container_type(node, profile)?;

    match policy {
        NullabilityPolicy::WrapperClass => Err(unsupported(&key, profile)),
        NullabilityPolicy::NativeOptional => Ok(ResolvedRepresentation::NativeOptional(
            require_optional_syntax(&key, profile)?.apply(&ty),
        )),
        NullabilityPolicy::NativeNullable => {
            Ok(ResolvedRepresentation::NativeNullablePrimitive(ty))
        }
    }
}

fn require_policy(key: &NullabilityKey, profile: &TargetProfile) -> GenResult<NullabilityPolicy> {
    profile.policy(key).ok_or_else(|| unsupported(key, profile))
}

fn require_optional_syntax<'p>(
    key: &NullabilityKey,
    profile: &'p TargetProfile,
) -> GenResult<&'p TypeTemplate> {
    profile
        .optional_syntax()
        .ok_or_else(|| unsupported(key, profile))
}

fn unsupported(key: &NullabilityKey, profile: &TargetProfile) -> GenError {
    GenError::UnsupportedNullability {
        primitive: key.to_string(),
        profile: profile.id().to_string(),
    }
}
