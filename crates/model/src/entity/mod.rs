//! Entity metadata and the accessors used to read entity instances.

use crate::core::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod config;
pub mod registry;

pub use config::{ColumnDef, ColumnType, EntityConfig, RelationDef, RelationKind};
pub use registry::{EntityRegistry, Schema};

/// Typed access to the properties of a live entity instance.
///
/// Implementations act as the per-entity accessor table: every property
/// bound to a column is readable by name. Use [`crate::impl_entity!`] for
/// plain structs.
pub trait Entity {
    /// The registered entity name used to look up metadata.
    fn entity_name(&self) -> &str;

    /// Returns `None` when the property is undefined on this instance.
    fn property(&self, name: &str) -> Option<Value>;
}

/// A dynamically shaped entity instance, typically loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub entity: String,
    #[serde(default)]
    pub values: BTreeMap<String, serde_json::Value>,
}

impl Record {
    pub fn new(entity: &str) -> Self {
        Self {
            entity: entity.to_string(),
            values: BTreeMap::new(),
        }
    }

    pub fn set(mut self, property: &str, value: serde_json::Value) -> Self {
        self.values.insert(property.to_string(), value);
        self
    }
}

impl Entity for Record {
    fn entity_name(&self) -> &str {
        &self.entity
    }

    fn property(&self, name: &str) -> Option<Value> {
        self.values.get(name).map(Value::from_json)
    }
}
