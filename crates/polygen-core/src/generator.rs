//! The generation pipeline.
//!
//! ```text
//! Schema ──► reference check ──► Resolver (per profile) ──► Emitter ──► GenerationReport
//! ```
//!
//! A run is split into units, one per (definition, profile) pair. Units are
//! independent and run on the rayon pool; the only shared mutable state is the
//! resolver's memo cache. A failing unit records a [`Failure`] and the run goes
//! on, so a report holds every problem at once.
//!
//! Every wrapper class that a root or a record field resolves to becomes its
//! own artifact, including wrappers nested inside arrays and maps. Wrappers
//! are shared by kind, so they are deduplicated per (profile, file) when the
//! units are merged.
//!
//! Emitters with [`FilePartitioning::SingleFile`] get every artifact of their
//! profile handed back once the merge is done and combine them into one file.

use crate::artifact::{EmittedArtifact, FieldSpec, VariantSpec};
use crate::config::GeneratorConfig;
use crate::emitter::{Emitter, EmitterRegistry, FilePartitioning};
use crate::error::{GenError, GenResult};
use crate::ir::{EnumDef, RecordDef, RootDef, Schema, TypeNode};
use crate::symbols::Definition;
use crate::profile::{ProfileId, ProfileRegistry, TargetProfile};
use crate::resolver::{ResolvedRepresentation, Resolver, ResolverStats};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

/// One failed unit of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub profile: ProfileId,

    /// The definition that failed; `None` when the whole profile was skipped.
    pub symbol: Option<String>,

    pub error: GenError,
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "[{}] {}: {}", self.profile, symbol, self.error),
            None => write!(f, "[{}] {}", self.profile, self.error),
        }
    }
}

/// Result of a run: every artifact and every failure.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Sorted by profile, then file name.
    pub artifacts: Vec<EmittedArtifact>,

    /// Sorted by profile, then symbol.
    pub failures: Vec<Failure>,

    pub stats: ResolverStats,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn artifacts_for<'r, 'p>(
        &'r self,
        profile: &'p ProfileId,
    ) -> impl Iterator<Item = &'r EmittedArtifact> + 'p
    where
        'r: 'p,
    {
        self.artifacts.iter().filter(move |a| &a.profile == profile)
    }

    /// Find an artifact by profile and declared symbol.
    pub fn artifact(&self, profile: &ProfileId, symbol: &str) -> Option<&EmittedArtifact> {
        self.artifacts
            .iter()
            .find(|a| &a.profile == profile && a.symbol == symbol)
    }
}

#[derive(Debug, Clone, Copy)]
enum Unit<'s> {
    Root(&'s RootDef),
    Record(&'s RecordDef),
    Enum(&'s EnumDef),
}

impl Unit<'_> {
    fn name(&self) -> &str {
        match self {
            Unit::Root(root) => &root.name,
            Unit::Record(record) => &record.name,
            Unit::Enum(enum_) => &enum_.name,
        }
    }
}

type UnitOutcome = (ProfileId, String, GenResult<Vec<EmittedArtifact>>);

/// Drives a run over a schema.
pub struct Generator<'a> {
    schema: &'a Schema,
    profiles: &'a ProfileRegistry,
    emitters: &'a EmitterRegistry,
    config: &'a GeneratorConfig,
    resolver: Resolver,
}

impl<'a> Generator<'a> {
    pub fn new(
        schema: &'a Schema,
        profiles: &'a ProfileRegistry,
        emitters: &'a EmitterRegistry,
        config: &'a GeneratorConfig,
    ) -> Self {
        Self {
            schema,
            profiles,
            emitters,
            config,
            resolver: Resolver::new(),
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Run for the configured profiles, or every registered one.
    pub fn run(&self) -> GenerationReport {
        let ids = if self.config.profiles.is_empty() {
            self.profiles.ids()
        } else {
            self.config.profiles.clone()
        };
        self.run_for(&ids)
    }

    /// Run for the given profiles.
    pub fn run_for(&self, profile_ids: &[ProfileId]) -> GenerationReport {
        let mut failures = Vec::new();
        let mut targets: Vec<(Arc<TargetProfile>, &dyn Emitter)> = Vec::new();

        for id in profile_ids {
            let target = self
                .profiles
                .require(id)
                .and_then(|profile| Ok((profile.clone(), self.emitters.get(id)?)));
            match target {
                Ok(target) => targets.push(target),
                Err(error) => {
                    tracing::warn!(profile = %id, %error, "skipping target");
                    failures.push(Failure {
                        profile: id.clone(),
                        symbol: None,
                        error,
                    });
                }
            }
        }

        let units: Vec<Unit<'_>> = self
            .schema
            .roots()
            .iter()
            .map(Unit::Root)
            .chain(self.schema.definitions().iter().map(|definition| match definition {
                Definition::Record(record) => Unit::Record(record),
                Definition::Enum(enum_) => Unit::Enum(enum_),
            }))
            .collect();

        let tasks: Vec<(&TargetProfile, &dyn Emitter, Unit<'_>)> = targets
            .iter()
            .flat_map(|(profile, emitter)| {
                units
                    .iter()
                    .map(move |unit| (profile.as_ref(), *emitter, *unit))
            })
            .collect();

        let outcomes: Vec<UnitOutcome> = tasks
            .par_iter()
            .map(|(profile, emitter, unit)| {
                let result = match unit {
                    Unit::Root(root) => self.generate_root(root, profile, *emitter),
                    Unit::Record(record) => self.generate_record(record, profile, *emitter),
                    Unit::Enum(enum_) => self.generate_enum(enum_, profile, *emitter),
                };
                (profile.id().clone(), unit.name().to_string(), result)
            })
            .collect();

        let mut report = merge(outcomes, failures, self.resolver.stats());
        bundle_single_files(&mut report, &targets);
        tracing::info!(
            artifacts = report.artifacts.len(),
            failures = report.failures.len(),
            cache_hits = report.stats.hits,
            cache_misses = report.stats.misses,
            "generation finished"
        );
        report
    }

    /// Generate the artifacts of one root under one profile.
    ///
    /// A root resolving to a wrapper class becomes that wrapper; any other
    /// representation becomes a transparent class named after the root.
    pub fn generate_root(
        &self,
        root: &RootDef,
        profile: &TargetProfile,
        emitter: &dyn Emitter,
    ) -> GenResult<Vec<EmittedArtifact>> {
        self.schema.require_resolved(&root.type_, &root.name)?;
        let representation = self.resolver.resolve(&root.type_, profile)?;
        let wrappers = self.nested_wrappers(&root.type_, profile)?;

        let mut artifacts = Vec::with_capacity(wrappers.len() + 1);
        if !matches!(representation, ResolvedRepresentation::WrapperClass { .. }) {
            let field = FieldSpec::new(
                profile.field_name(&self.config.wrapper_field),
                representation.clone(),
            )
            .json_name(self.config.wrapper_field.clone())
            .described(root.description.clone());

            artifacts.push(emitter.emit(
                &profile.type_name(&root.name),
                &representation,
                &[field],
            )?);
        }

        for wrapper in wrappers.values() {
            artifacts.push(self.emit_wrapper(wrapper, profile, emitter)?);
        }

        Ok(artifacts)
    }

    /// Generate a record under one profile, plus any wrappers its fields need.
    pub fn generate_record(
        &self,
        record: &RecordDef,
        profile: &TargetProfile,
        emitter: &dyn Emitter,
    ) -> GenResult<Vec<EmittedArtifact>> {
        let mut fields = Vec::with_capacity(record.fields.len());
        let mut wrappers: BTreeMap<String, ResolvedRepresentation> = BTreeMap::new();

        for field in &record.fields {
            self.schema.require_resolved(&field.type_, &record.name)?;
            let effective = field.effective_type();
            let representation = self.resolver.resolve(&effective, profile)?;
            wrappers.extend(self.nested_wrappers(&effective, profile)?);

            fields.push(
                FieldSpec::new(profile.field_name(&field.name), representation)
                    .json_name(field.wire_name())
                    .described(field.description.clone())
                    .optional(field.optional),
            );
        }

        let mut artifacts = vec![emitter.emit_record(
            &profile.type_name(&record.name),
            &record.description,
            record.additional,
            &fields,
        )?];

        for representation in wrappers.values() {
            artifacts.push(self.emit_wrapper(representation, profile, emitter)?);
        }

        Ok(artifacts)
    }

    /// Generate an enum under one profile.
    ///
    /// Two values whose target names collide make the enum malformed.
    pub fn generate_enum(
        &self,
        enum_: &EnumDef,
        profile: &TargetProfile,
        emitter: &dyn Emitter,
    ) -> GenResult<Vec<EmittedArtifact>> {
        let mut seen: BTreeMap<String, &str> = BTreeMap::new();
        let mut variants = Vec::with_capacity(enum_.variants.len());

        for variant in &enum_.variants {
            let name = profile.variant_name(variant.schema_name());
            if let Some(previous) = seen.insert(name.clone(), &variant.value) {
                return Err(GenError::MalformedType {
                    symbol: enum_.name.clone(),
                    reason: format!(
                        "values `{previous}` and `{}` both become `{name}`",
                        variant.value
                    ),
                });
            }
            variants.push(
                VariantSpec::new(name, variant.value.clone())
                    .described(variant.description.clone()),
            );
        }

        let artifact = emitter.emit_enum(
            &profile.type_name(&enum_.name),
            &enum_.description,
            &variants,
        )?;
        Ok(vec![artifact])
    }

    /// Every wrapper class `node` needs, at any depth, keyed by class name.
    fn nested_wrappers(
        &self,
        node: &TypeNode,
        profile: &TargetProfile,
    ) -> GenResult<BTreeMap<String, ResolvedRepresentation>> {
        let mut wrappers = BTreeMap::new();
        for nullable in node.nullable_nodes() {
            let representation = self.resolver.resolve(nullable, profile)?;
            if let ResolvedRepresentation::WrapperClass { class_name, .. } = &representation {
                wrappers.entry(class_name.clone()).or_insert(representation);
            }
        }
        Ok(wrappers)
    }

    /// Wrappers are shared by every user of a kind and carry no description.
    fn emit_wrapper(
        &self,
        representation: &ResolvedRepresentation,
        profile: &TargetProfile,
        emitter: &dyn Emitter,
    ) -> GenResult<EmittedArtifact> {
        let ResolvedRepresentation::WrapperClass {
            class_name, inner, ..
        } = representation
        else {
            return Err(GenError::emission(
                representation.type_expr(),
                "not a wrapper class",
            ));
        };

        let field = FieldSpec::new(
            profile.field_name(&self.config.wrapper_field),
            ResolvedRepresentation::Direct(inner.clone()),
        )
        .json_name(self.config.wrapper_field.clone());

        emitter.emit(class_name, representation, &[field])
    }
}

/// Merge unit outcomes, deduplicating shared wrapper artifacts.
fn merge(
    outcomes: Vec<UnitOutcome>,
    mut failures: Vec<Failure>,
    stats: ResolverStats,
) -> GenerationReport {
    let mut artifacts: BTreeMap<(ProfileId, String), EmittedArtifact> = BTreeMap::new();

    for (profile, symbol, result) in outcomes {
        let emitted = match result {
            Ok(emitted) => emitted,
            Err(error) => {
                tracing::warn!(profile = %profile, symbol = %symbol, %error, "generation failed");
                failures.push(Failure {
                    profile,
                    symbol: Some(symbol),
                    error,
                });
                continue;
            }
        };

        for artifact in emitted {
            match artifacts.entry((artifact.profile.clone(), artifact.file_name.clone())) {
                Entry::Vacant(slot) => {
                    slot.insert(artifact);
                }
                Entry::Occupied(existing) if existing.get().contents == artifact.contents => {}
                Entry::Occupied(_) => {
                    let error = GenError::emission(
                        artifact.symbol.clone(),
                        format!("conflicting contents for `{}`", artifact.file_name),
                    );
                    tracing::warn!(profile = %profile, symbol = %symbol, %error, "generation failed");
                    failures.push(Failure {
                        profile: profile.clone(),
                        symbol: Some(symbol.clone()),
                        error,
                    });
                }
            }
        }
    }

    failures.sort_by(|a, b| (&a.profile, &a.symbol).cmp(&(&b.profile, &b.symbol)));

    GenerationReport {
        artifacts: artifacts.into_values().collect(),
        failures,
        stats,
    }
}

/// Replace the artifacts of single-file profiles with their bundle.
fn bundle_single_files(
    report: &mut GenerationReport,
    targets: &[(Arc<TargetProfile>, &dyn Emitter)],
) {
    for (profile, emitter) in targets {
        let FilePartitioning::SingleFile(file_name) = emitter.partitioning() else {
            continue;
        };

        let (parts, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut report.artifacts)
            .into_iter()
            .partition(|a| &a.profile == profile.id());
        report.artifacts = rest;
        if parts.is_empty() {
            continue;
        }

        match emitter.bundle(&parts) {
            Ok(bundle) => {
                tracing::debug!(
                    profile = %profile.id(),
                    file = %file_name,
                    parts = parts.len(),
                    "bundled"
                );
                report.artifacts.push(bundle);
            }
            Err(error) => {
                tracing::warn!(profile = %profile.id(), %error, "bundling failed");
                report.failures.push(Failure {
                    profile: profile.id().clone(),
                    symbol: None,
                    error,
                });
            }
        }
    }

    report
        .artifacts
        .sort_by(|a, b| (&a.profile, &a.file_name).cmp(&(&b.profile, &b.file_name)));
    report
        .failures
        .sort_by(|a, b| (&a.profile, &a.symbol).cmp(&(&b.profile, &b.symbol)));
}
