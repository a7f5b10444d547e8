//! Generate command implementation
//!
//! Loads the manifest, applies command-line overrides to its `[generator]`
//! table and runs every selected profile. In check mode the artifacts are
//! compared against a fixture tree instead of being written.

use crate::manifest::{DEFAULT_MANIFEST, Manifest};
use crate::writer::write_artifacts;
use anyhow::{Context, Result};
use polygen::{GenerationReport, GeneratorConfig, ProfileId};
use polygen_fixtures::FixtureHarness;
use polygen_logging::{LogLevel, ReloadHandle};
use std::path::Path;

/// Options of `polygen generate`
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub manifest: Option<String>,
    pub output: Option<String>,
    pub profiles: Vec<String>,
    pub category: Option<String>,
    pub check: Option<String>,
    /// Level given on the command line; wins over the manifest's `log_level`
    pub log_level: Option<LogLevel>,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    let manifest_path = args
        .manifest
        .clone()
        .unwrap_or_else(|| DEFAULT_MANIFEST.to_string());

    let manifest = Manifest::from_file(&manifest_path)?;
    manifest.validate()?;

    let config = apply_overrides(manifest.generator.clone(), &args);
    if args.log_level.is_none() {
        apply_log_level(&config)?;
    }

    let schema = manifest.to_schema()?;

    tracing::info!(
        manifest = %manifest_path,
        roots = schema.roots().len(),
        definitions = schema.definitions().len(),
        "generating"
    );

    let report = polygen::generate(&schema, &config);

    let mut problems = report.failures.len();
    match &args.check {
        Some(fixtures) => {
            let harness = FixtureHarness::from_env(fixtures);
            let errors = harness.check_all(&report.artifacts, &config.category);
            for error in &errors {
                eprintln!("✗ {error}");
            }
            problems += errors.len();
            if harness.is_blessing() {
                println!("Blessed {} fixture(s) in {}", report.artifacts.len(), fixtures);
            } else {
                println!(
                    "Checked {} artifact(s) against {}",
                    report.artifacts.len(),
                    fixtures
                );
            }
        }
        None => {
            let paths = write_artifacts(
                Path::new(&config.output_root),
                &config.category,
                &report.artifacts,
            )?;
            for path in &paths {
                println!("✓ {}", path.display());
            }
        }
    }

    for failure in &report.failures {
        eprintln!("✗ {failure}");
    }
    println!("\n{}", summarize(&report));

    if problems > 0 {
        anyhow::bail!("Generation finished with {} problem(s)", problems);
    }

    Ok(())
}

/// Layer command-line options over the manifest configuration
pub fn apply_overrides(mut config: GeneratorConfig, args: &GenerateArgs) -> GeneratorConfig {
    if let Some(output) = &args.output {
        config.output_root = output.clone();
    }
    if let Some(category) = &args.category {
        config.category = category.clone();
    }
    if !args.profiles.is_empty() {
        config.profiles = args
            .profiles
            .iter()
            .map(|p| ProfileId::new(p.as_str()))
            .collect();
    }
    config
}

fn apply_log_level(config: &GeneratorConfig) -> Result<()> {
    let level: LogLevel = config
        .log_level
        .parse()
        .with_context(|| format!("Invalid log_level in manifest: {}", config.log_level))?;

    let handle = ReloadHandle::global();
    if handle.is_initialized() && handle.current_level() != level {
        handle.reload_level(level)?;
    }
    Ok(())
}

/// One-line outcome of a run
pub fn summarize(report: &GenerationReport) -> String {
    format!(
        "{} artifact(s), {} failure(s), {} resolution(s) cached ({} hit(s))",
        report.artifacts.len(),
        report.failures.len(),
        report.stats.entries,
        report.stats.hits
    )
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
