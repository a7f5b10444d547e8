//! `from <module> import <names>` bookkeeping.
//!
//! Imports arrive as dotted paths (`typing.Optional`, `datetime.datetime`);
//! the last segment is the imported name and the rest the module.

use std::collections::{BTreeMap, BTreeSet};

/// Imports every generated module starts with. Covers each import the
/// `python` profile can attach to a type.
pub const PREAMBLE_IMPORTS: &[&str] = &[
    "dataclasses.dataclass",
    "datetime.datetime",
    "enum.Enum",
    "typing.Any",
    "typing.Dict",
    "typing.List",
    "typing.Optional",
    "typing.Union",
    "typing.get_args",
    "typing.get_origin",
];

/// Imported names grouped by module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    modules: BTreeMap<String, BTreeSet<String>>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The set every module starts with.
    pub fn preamble() -> Self {
        let mut set = Self::new();
        set.extend(PREAMBLE_IMPORTS.iter().copied());
        set
    }

    /// Add a dotted import. A path without a module part is ignored.
    pub fn add(&mut self, path: &str) {
        if let Some((module, name)) = path.rsplit_once('.')
            && !module.is_empty()
            && !name.is_empty()
        {
            self.modules
                .entry(module.to_string())
                .or_default()
                .insert(name.to_string());
        }
    }

    pub fn extend<'a, I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for path in paths {
            self.add(path);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Whether every import of `paths` is already in the set.
    pub fn covers<'a, I>(&self, paths: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        paths.into_iter().all(|path| match path.rsplit_once('.') {
            Some((module, name)) => self
                .modules
                .get(module)
                .is_some_and(|names| names.contains(name)),
            None => true,
        })
    }

    /// One `from` line per module, sorted.
    pub fn render(&self) -> String {
        self.modules
            .iter()
            .map(|(module, names)| {
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                format!("from {module} import {}\n", names.join(", "))
            })
            .collect()
    }
}
