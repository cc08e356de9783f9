//! Serializable records produced by the indexer.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// A single enum constant, recorded with its fully qualified name
/// (`::ns::Enum::CONSTANT`), numeric value, and source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumConstant {
    pub name: String,
    pub value: i64,
    pub file: String,
    pub line: u32,
}

/// The collected index: constants in discovery order plus two lookup maps,
/// by value (sorted, last occurrence wins on collisions) and by fully
/// qualified name (discovery order preserved).
#[derive(Debug, Default, Clone)]
pub struct EnumIndex {
    constants: Vec<EnumConstant>,
    by_value: BTreeMap<i64, usize>,
    by_name: IndexMap<String, usize>,
}

impl EnumIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, constant: EnumConstant) {
        if let Some(&existing) = self.by_value.get(&constant.value) {
            tracing::warn!(
                value = constant.value,
                kept = %constant.name,
                shadowed = %self.constants[existing].name,
                "duplicate enum value, later constant wins by-value lookup"
            );
        }
        if let Some(&existing) = self.by_name.get(&constant.name) {
            tracing::warn!(
                name = %constant.name,
                first_file = %self.constants[existing].file,
                "enum constant recorded more than once"
            );
        }
        let index = self.constants.len();
        self.by_value.insert(constant.value, index);
        self.by_name.insert(constant.name.clone(), index);
        self.constants.push(constant);
    }

    /// Constants in the order they were discovered.
    pub fn constants(&self) -> &[EnumConstant] {
        &self.constants
    }

    /// Constants ascending by value, duplicates resolved last-wins.
    pub fn by_value(&self) -> impl Iterator<Item = &EnumConstant> {
        self.by_value.values().map(|&index| &self.constants[index])
    }

    pub fn lookup_value(&self, value: i64) -> Option<&EnumConstant> {
        self.by_value.get(&value).map(|&index| &self.constants[index])
    }

    pub fn lookup_name(&self, name: &str) -> Option<&EnumConstant> {
        self.by_name.get(name).map(|&index| &self.constants[index])
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

impl Serialize for EnumIndex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.constants.serialize(serializer)
    }
}
