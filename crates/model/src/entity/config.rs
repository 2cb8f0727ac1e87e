//! Persistence metadata for a single entity.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Date,
    Number,
    #[default]
    Other,
}

impl ColumnType {
    /// String and date literals are emitted inside single quotes.
    pub fn is_quoted(&self) -> bool {
        matches!(self, ColumnType::String | ColumnType::Date)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// The entity property this column is bound to.
    pub property: String,

    /// Physical column name. Falls back to the property name when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, rename = "type")]
    pub column_type: ColumnType,

    #[serde(default = "default_nullable")]
    pub nullable: bool,

    /// The referenced column in the related table, for foreign keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_name: Option<String>,
}

fn default_nullable() -> bool {
    true
}

impl ColumnDef {
    pub fn new(property: &str, column_type: ColumnType) -> Self {
        Self {
            property: property.to_string(),
            name: None,
            column_type,
            nullable: true,
            ref_name: None,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn references(mut self, ref_name: &str) -> Self {
        self.ref_name = Some(ref_name.to_string());
        self
    }

    pub fn column_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.property)
    }

    pub fn is_foreign_key(&self) -> bool {
        self.ref_name.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    #[default]
    ManyToOne,
    OneToOne,
    OneToMany,
    ManyToMany,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationDef {
    /// Target entity name.
    pub entity: String,

    /// Auto-joined and expanded when the owner is selected in full.
    #[serde(default)]
    pub eager: bool,

    #[serde(default)]
    pub kind: RelationKind,
}

impl RelationDef {
    pub fn new(entity: &str) -> Self {
        Self {
            entity: entity.to_string(),
            eager: false,
            kind: RelationKind::default(),
        }
    }

    pub fn eager(mut self) -> Self {
        self.eager = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityConfig {
    pub name: String,
    pub table: String,

    /// Property name of the identifier column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Columns in declaration order.
    #[serde(default)]
    pub columns: Vec<ColumnDef>,

    #[serde(default)]
    pub relations: BTreeMap<String, RelationDef>,
}

impl EntityConfig {
    pub fn new(name: &str, table: &str) -> Self {
        Self {
            name: name.to_string(),
            table: table.to_string(),
            id: None,
            columns: Vec::new(),
            relations: BTreeMap::new(),
        }
    }

    pub fn with_id(mut self, property: &str) -> Self {
        self.id = Some(property.to_string());
        self
    }

    pub fn with_column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_relation(mut self, property: &str, relation: RelationDef) -> Self {
        self.relations.insert(property.to_string(), relation);
        self
    }

    pub fn column(&self, property: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.property == property)
    }

    pub fn relation(&self, property: &str) -> Option<&RelationDef> {
        self.relations.get(property)
    }

    /// The identifier column, if the entity declares one.
    pub fn id_column(&self) -> Option<&ColumnDef> {
        self.id.as_deref().and_then(|id| self.column(id))
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        for property in self.relations.keys() {
            let backed = self
                .column(property)
                .map(ColumnDef::is_foreign_key)
                .unwrap_or(false);
            if !backed {
                return Err(SchemaError::RelationWithoutForeignKey {
                    entity: self.name.clone(),
                    property: property.clone(),
                });
            }
        }

        if let Some(id) = &self.id
            && self.column(id).is_none()
        {
            return Err(SchemaError::UnknownIdentifier {
                entity: self.name.clone(),
                property: id.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> EntityConfig {
        EntityConfig::new("Area", "t_area")
            .with_id("areaId")
            .with_column(ColumnDef::new("areaId", ColumnType::Number).named("area_id"))
            .with_column(ColumnDef::new("areaName", ColumnType::String))
    }

    #[test]
    fn test_column_name_falls_back_to_property() {
        let cfg = area();
        assert_eq!(cfg.column("areaId").unwrap().column_name(), "area_id");
        assert_eq!(cfg.column("areaName").unwrap().column_name(), "areaName");
        assert_eq!(cfg.id_column().unwrap().property, "areaId");
    }

    #[test]
    fn test_validate_rejects_relation_without_foreign_key() {
        let cfg = area().with_relation("parent", RelationDef::new("Area"));
        assert!(matches!(
            cfg.validate(),
            Err(SchemaError::RelationWithoutForeignKey { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_identifier() {
        let cfg = EntityConfig::new("X", "x").with_id("missing");
        assert!(matches!(
            cfg.validate(),
            Err(SchemaError::UnknownIdentifier { .. })
        ));
    }

    #[test]
    fn test_deserialize_defaults() {
        let cfg: EntityConfig = serde_json::from_str(
            r#"{
                "name": "Area",
                "table": "t_area",
                "id": "areaId",
                "columns": [
                    {"property": "areaId", "name": "area_id", "type": "number", "nullable": false},
                    {"property": "parent", "name": "parent_id", "ref_name": "area_id"}
                ],
                "relations": {"parent": {"entity": "Area"}}
            }"#,
        )
        .unwrap();

        let parent = cfg.column("parent").unwrap();
        assert_eq!(parent.column_type, ColumnType::Other);
        assert!(parent.nullable);
        assert!(parent.is_foreign_key());
        assert!(!cfg.relation("parent").unwrap().eager);
        assert!(cfg.validate().is_ok());
    }
}
