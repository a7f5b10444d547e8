//! The per-profile emitter contract and its registry.
//!
//! Each backend implements [`Emitter`] for one profile. Adding a target means
//! adding an emitter plus its profile; the resolver does not change.

use crate::artifact::{EmittedArtifact, FieldSpec, VariantSpec};
use crate::error::{GenError, GenResult};
use crate::profile::ProfileId;
use crate::resolver::ResolvedRepresentation;
use std::collections::BTreeMap;
use std::sync::Arc;

/// How the declarations of one run are laid out in files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilePartitioning {
    /// One file per declared symbol, `<Symbol>.<ext>`.
    FilePerType,

    /// Every declaration of a profile in one file with this name.
    SingleFile(String),
}

/// Renders resolved types into source text for one profile.
pub trait Emitter: Send + Sync {
    /// The profile this emitter renders for.
    fn profile_id(&self) -> &ProfileId;

    fn partitioning(&self) -> FilePartitioning {
        FilePartitioning::FilePerType
    }

    /// Render a transparent single-value type named `name`.
    ///
    /// `fields` must hold exactly one entry. For a
    /// [`WrapperClass`](ResolvedRepresentation::WrapperClass) the name must be
    /// the wrapper's class name and the field must carry the wrapped type.
    fn emit(
        &self,
        name: &str,
        representation: &ResolvedRepresentation,
        fields: &[FieldSpec],
    ) -> GenResult<EmittedArtifact>;

    /// Render a record with one property per field.
    ///
    /// `additional` records tolerate unknown properties on input.
    fn emit_record(
        &self,
        name: &str,
        description: &str,
        additional: bool,
        fields: &[FieldSpec],
    ) -> GenResult<EmittedArtifact>;

    /// Render an enumeration of string values.
    fn emit_enum(
        &self,
        name: &str,
        description: &str,
        variants: &[VariantSpec],
    ) -> GenResult<EmittedArtifact>;

    /// Combine the declarations of one run into a single file.
    ///
    /// Called with every artifact of the profile, sorted by file name, when
    /// [`partitioning`](Self::partitioning) is
    /// [`SingleFile`](FilePartitioning::SingleFile).
    fn bundle(&self, parts: &[EmittedArtifact]) -> GenResult<EmittedArtifact> {
        let symbol = parts.first().map_or("", |p| p.symbol.as_str());
        Err(GenError::emission(
            symbol,
            format!("profile `{}` does not bundle artifacts", self.profile_id()),
        ))
    }
}

/// Check the structural contract of [`Emitter::emit`] and return its field.
pub fn single_value_field<'f>(
    name: &str,
    representation: &ResolvedRepresentation,
    fields: &'f [FieldSpec],
) -> GenResult<&'f FieldSpec> {
    let [field] = fields else {
        return Err(GenError::emission(
            name,
            format!("expected exactly one field, got {}", fields.len()),
        ));
    };

    match representation {
        ResolvedRepresentation::WrapperClass {
            class_name, inner, ..
        } => {
            if name != class_name {
                return Err(GenError::emission(
                    name,
                    format!("wrapper must be declared as `{class_name}`"),
                ));
            }
            if field.representation != ResolvedRepresentation::Direct(inner.clone()) {
                return Err(GenError::emission(
                    name,
                    format!(
                        "wrapped field `{}` must hold `{}`, found `{}`",
                        field.name,
                        inner.expr,
                        field.type_expr()
                    ),
                ));
            }
        }
        other => {
            if &field.representation != other {
                return Err(GenError::emission(
                    name,
                    format!(
                        "field `{}` is `{}` but the type resolved to `{}`",
                        field.name,
                        field.type_expr(),
                        other.type_expr()
                    ),
                ));
            }
        }
    }

    Ok(field)
}

/// Emitters by profile id. Immutable once built.
#[derive(Default, Clone)]
pub struct EmitterRegistry {
    emitters: BTreeMap<ProfileId, Arc<dyn Emitter>>,
}

impl EmitterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an emitter under its own profile id.
    pub fn with(mut self, emitter: impl Emitter + 'static) -> Self {
        self.emitters
            .insert(emitter.profile_id().clone(), Arc::new(emitter));
        self
    }

    /// Look up the emitter for a profile, failing with `UnsupportedTarget`.
    pub fn get(&self, profile: &ProfileId) -> GenResult<&dyn Emitter> {
        self.emitters
            .get(profile)
            .map(|e| e.as_ref())
            .ok_or_else(|| GenError::UnsupportedTarget {
                profile: profile.to_string(),
            })
    }

    pub fn contains(&self, profile: &ProfileId) -> bool {
        self.emitters.contains_key(profile)
    }

    pub fn len(&self) -> usize {
        self.emitters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitters.is_empty()
    }
}

impl std::fmt::Debug for EmitterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmitterRegistry")
            .field("profiles", &self.emitters.keys().collect::<Vec<_>>())
            .finish()
    }
}
