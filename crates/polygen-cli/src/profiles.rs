//! Profiles command implementation

use anyhow::Result;
use polygen::{PRIMITIVE_KINDS, TargetProfile, builtin_profiles};
use std::fmt::Write;

/// List the builtin profiles with their nullability tables
pub fn run() -> Result<()> {
    for profile in builtin_profiles().iter() {
        println!("{}", describe(profile)?);
    }
    Ok(())
}

/// Render one profile as an indented block
pub fn describe(profile: &TargetProfile) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "{} ({} / {}, .{})",
        profile.id(),
        profile.language(),
        profile.library(),
        profile.file_extension()
    )?;

    for (key, policy) in profile.policies() {
        writeln!(out, "  {:<10} {}", key.to_string(), policy)?;
    }

    let containers = [
        ("arrays", profile.elements_syntax()),
        ("maps", profile.values_syntax()),
    ];
    for (label, syntax) in containers {
        let shown = syntax.map_or("unsupported", |t| t.template.as_str());
        writeln!(out, "  {:<10} {}", label, shown)?;
    }

    let unmapped: Vec<&str> = PRIMITIVE_KINDS
        .iter()
        .copied()
        .filter(|kind| profile.mapping(kind).is_none())
        .collect();
    if !unmapped.is_empty() {
        writeln!(out, "  unmapped: {}", unmapped.join(", "))?;
    }

    Ok(out)
}
