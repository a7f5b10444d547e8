//! Manifest parsing and validation
//!
//! ```toml
//! [generator]
//! package = "com.example"
//! category = "nullable_references"
//!
//! [[roots]]
//! name = "root"
//! type = { nullable = { primitive = "string" } }
//!
//! [[records]]
//! name = "address"
//! description = "A postal address"
//!
//! [[records.fields]]
//! name = "street"
//! type = { primitive = "string" }
//!
//! [[records.fields]]
//! name = "tags"
//! type = { elements = { primitive = "string" } }
//!
//! [[enums]]
//! name = "status"
//! variants = [{ value = "active" }, { value = "on-hold", description = "Paused" }]
//! ```

use anyhow::{Context, Result};
use polygen::{EnumDef, GeneratorConfig, PRIMITIVE_KINDS, RecordDef, RootDef, Schema, TypeNode};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default manifest file name
pub const DEFAULT_MANIFEST: &str = "polygen.toml";

/// polygen.toml manifest structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub roots: Vec<RootDef>,

    #[serde(default)]
    pub records: Vec<RecordDef>,

    #[serde(default)]
    pub enums: Vec<EnumDef>,
}

impl Manifest {
    /// Load manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse manifest from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// Build the schema, rejecting duplicate definition names and empty enums
    pub fn to_schema(&self) -> Result<Schema> {
        let mut schema = Schema::new();
        for record in &self.records {
            schema = schema
                .with_record(record.clone())
                .with_context(|| format!("Invalid record '{}'", record.name))?;
        }
        for enum_ in &self.enums {
            schema = schema
                .with_enum(enum_.clone())
                .with_context(|| format!("Invalid enum '{}'", enum_.name))?;
        }
        for root in &self.roots {
            schema.push_root(root.clone());
        }
        Ok(schema)
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<()> {
        if self.roots.is_empty() && self.records.is_empty() && self.enums.is_empty() {
            anyhow::bail!("Manifest defines no roots and no definitions");
        }

        for root in &self.roots {
            if root.name.is_empty() {
                anyhow::bail!("Root name cannot be empty");
            }
            check_primitives(&root.type_, &root.name)?;
        }

        for record in &self.records {
            if record.name.is_empty() {
                anyhow::bail!("Record name cannot be empty");
            }
            for field in &record.fields {
                if field.name.is_empty() {
                    anyhow::bail!("Field name cannot be empty in record '{}'", record.name);
                }
                check_primitives(&field.type_, &record.name)?;
            }
        }

        for enum_ in &self.enums {
            if enum_.name.is_empty() {
                anyhow::bail!("Enum name cannot be empty");
            }
        }

        let schema = self.to_schema()?;
        if let Some(error) = schema.check_references().into_iter().next() {
            anyhow::bail!("{error}");
        }

        Ok(())
    }
}

fn check_primitives(node: &TypeNode, context: &str) -> Result<()> {
    match node {
        TypeNode::Primitive(kind) if !PRIMITIVE_KINDS.contains(&kind.as_str()) => {
            anyhow::bail!("Unknown primitive '{}' in '{}'", kind, context)
        }
        TypeNode::Primitive(_) | TypeNode::Named(_) => Ok(()),
        TypeNode::Elements(inner) | TypeNode::Values(inner) | TypeNode::Nullable(inner) => {
            check_primitives(inner, context)
        }
    }
}

/// Check command implementation
pub fn check(manifest_path: Option<String>) -> Result<()> {
    let path = manifest_path.unwrap_or_else(|| DEFAULT_MANIFEST.to_string());

    println!("Checking manifest: {}", path);

    let manifest = Manifest::from_file(&path)?;
    manifest.validate()?;

    println!("✓ Roots: {}", manifest.roots.len());
    println!("✓ Records: {}", manifest.records.len());
    println!("✓ Enums: {}", manifest.enums.len());
    println!("✓ Package: {}", manifest.generator.package);
    println!("\nManifest is valid!");

    Ok(())
}
