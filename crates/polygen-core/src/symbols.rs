//! Arena-backed symbol table for named definitions.
//!
//! Definitions refer to each other by identifier only. The table owns every
//! record and enum in a flat arena and maps identifiers to arena slots, so
//! mutually referential records never own each other.

use crate::error::{GenError, GenResult};
use crate::ir::{EnumDef, RecordDef};
use std::collections::HashMap;

/// Index of a definition in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefinitionId(usize);

impl DefinitionId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Anything a `Named` node can point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    Record(RecordDef),
    Enum(EnumDef),
}

impl Definition {
    pub fn name(&self) -> &str {
        match self {
            Definition::Record(record) => &record.name,
            Definition::Enum(enum_) => &enum_.name,
        }
    }

    pub fn as_record(&self) -> Option<&RecordDef> {
        match self {
            Definition::Record(record) => Some(record),
            Definition::Enum(_) => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumDef> {
        match self {
            Definition::Enum(enum_) => Some(enum_),
            Definition::Record(_) => None,
        }
    }
}

impl From<RecordDef> for Definition {
    fn from(record: RecordDef) -> Self {
        Definition::Record(record)
    }
}

impl From<EnumDef> for Definition {
    fn from(enum_: EnumDef) -> Self {
        Definition::Enum(enum_)
    }
}

/// Definitions in insertion order, addressable by identifier.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    definitions: Vec<Definition>,
    by_name: HashMap<String, DefinitionId>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition, rejecting duplicate identifiers.
    pub fn insert(&mut self, definition: impl Into<Definition>) -> GenResult<DefinitionId> {
        let definition = definition.into();
        if self.by_name.contains_key(definition.name()) {
            return Err(GenError::MalformedType {
                symbol: definition.name().to_string(),
                reason: "defined more than once".to_string(),
            });
        }

        let id = DefinitionId(self.definitions.len());
        self.by_name.insert(definition.name().to_string(), id);
        self.definitions.push(definition);
        Ok(id)
    }

    /// Find the slot for an identifier.
    pub fn lookup(&self, name: &str) -> Option<DefinitionId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: DefinitionId) -> Option<&Definition> {
        self.definitions.get(id.0)
    }

    /// Look up a definition by identifier, failing with `MalformedType`.
    pub fn require(&self, name: &str, referenced_from: &str) -> GenResult<&Definition> {
        self.lookup(name)
            .and_then(|id| self.get(id))
            .ok_or_else(|| GenError::unresolved(name, referenced_from))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter()
    }

    /// Records only, in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &RecordDef> {
        self.definitions.iter().filter_map(Definition::as_record)
    }

    /// Enums only, in insertion order.
    pub fn enums(&self) -> impl Iterator<Item = &EnumDef> {
        self.definitions.iter().filter_map(Definition::as_enum)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
