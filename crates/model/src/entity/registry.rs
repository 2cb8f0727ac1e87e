//! Read-only lookup of entity metadata by entity name.

use crate::{entity::config::EntityConfig, error::SchemaError};
use std::{collections::HashMap, fs, path::Path};
use tracing::debug;

/// Resolves entity names to their persistence metadata.
///
/// A registry must be fully populated before it is handed to the
/// translator; absence of an entity is always treated as an error.
pub trait EntityRegistry: Send + Sync {
    fn lookup(&self, entity: &str) -> Option<&EntityConfig>;
}

/// An in-memory registry, usually built from a JSON schema document.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    entities: HashMap<String, EntityConfig>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, config: EntityConfig) -> Result<(), SchemaError> {
        config.validate()?;
        if self.entities.contains_key(&config.name) {
            return Err(SchemaError::DuplicateEntity(config.name));
        }
        debug!("Registered entity '{}' -> table '{}'", config.name, config.table);
        self.entities.insert(config.name.clone(), config);
        Ok(())
    }

    pub fn with(mut self, config: EntityConfig) -> Result<Self, SchemaError> {
        self.register(config)?;
        Ok(self)
    }

    /// Parses a JSON array of entity configurations.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let configs: Vec<EntityConfig> = serde_json::from_str(json)?;
        let mut schema = Schema::new();
        for config in configs {
            schema.register(config)?;
        }
        Ok(schema)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let source = fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    /// Entity names in sorted order.
    pub fn entity_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityRegistry for Schema {
    fn lookup(&self, entity: &str) -> Option<&EntityConfig> {
        self.entities.get(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::config::{ColumnDef, ColumnType};

    #[test]
    fn test_register_and_lookup() {
        let schema = Schema::new()
            .with(
                EntityConfig::new("User", "users")
                    .with_id("id")
                    .with_column(ColumnDef::new("id", ColumnType::Number)),
            )
            .unwrap();

        assert_eq!(schema.lookup("User").unwrap().table, "users");
        assert!(schema.lookup("user").is_none());
        assert_eq!(schema.entity_names(), vec!["User"]);
    }

    #[test]
    fn test_duplicate_entity_is_rejected() {
        let mut schema = Schema::new();
        schema.register(EntityConfig::new("User", "users")).unwrap();
        let err = schema.register(EntityConfig::new("User", "users2")).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateEntity(name) if name == "User"));
    }

    #[test]
    fn test_from_json() {
        let schema = Schema::from_json(
            r#"[
                {"name": "A", "table": "t_a", "columns": [{"property": "id"}], "id": "id"},
                {"name": "B", "table": "t_b"}
            ]"#,
        )
        .unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.lookup("B").unwrap().table, "t_b");
    }
}
