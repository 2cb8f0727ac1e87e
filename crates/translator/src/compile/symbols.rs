//! Alias bookkeeping for one compilation.

use model::entity::{ColumnDef, EntityConfig};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::trace;

/// Where a generated alias came from, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasTarget {
    pub entity: String,

    /// Alias of the entity whose relation introduced this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_alias: Option<String>,

    /// Relation property traversed from `source_alias`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_property: Option<String>,
}

/// Generated alias to its origin, for every alias of a compiled statement.
pub type ResultAliasMap = BTreeMap<String, AliasTarget>;

/// One `left join` required by a relation traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinDescriptor {
    pub owner: String,
    pub owner_alias: String,
    pub target: String,
    pub target_table: String,
    pub target_alias: String,
    /// Foreign-key column on the owner.
    pub fk_column: String,
    /// Column the foreign key references on the target.
    pub ref_column: String,
}

/// Symbol table mapping RQL names to generated aliases.
///
/// Every table-clause entry receives its own generated alias (`t0`, `t1`,
/// ...), so an entity may appear more than once. Relation hops reuse the
/// alias of the first occurrence of their target, or allocate one the first
/// time the target is seen. Numbering starts at zero for every table.
#[derive(Debug, Default)]
pub struct AliasTable {
    next: usize,
    // entity name -> alias of its first occurrence
    generated: HashMap<String, String>,
    // generated alias -> entity name
    entities: HashMap<String, String>,
    // user alias, or entity name when unaliased -> generated alias
    scopes: HashMap<String, String>,
    joins: Vec<JoinDescriptor>,
    result: ResultAliasMap,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self, entity: &str) -> String {
        let alias = format!("t{}", self.next);
        self.next += 1;
        self.generated
            .entry(entity.to_string())
            .or_insert_with(|| alias.clone());
        self.entities.insert(alias.clone(), entity.to_string());
        trace!("Allocated alias '{}' for entity '{}'", alias, entity);
        alias
    }

    /// Binds a table-clause entity and makes it addressable by `user_alias`,
    /// or by its own name when no alias was written.
    pub fn bind_table_entity(&mut self, entity: &str, user_alias: Option<&str>) -> String {
        let alias = self.allocate(entity);
        self.result.insert(
            alias.clone(),
            AliasTarget {
                entity: entity.to_string(),
                source_alias: None,
                source_property: None,
            },
        );
        self.scopes
            .insert(user_alias.unwrap_or(entity).to_string(), alias.clone());
        alias
    }

    /// Looks up an RQL name, returning `(entity, generated alias)`.
    pub fn resolve_scope(&self, name: &str) -> Option<(&str, &str)> {
        let alias = self.scopes.get(name)?;
        let entity = self.entities.get(alias)?;
        Some((entity.as_str(), alias.as_str()))
    }

    /// Returns the alias of `target` reached through `column` of `owner`,
    /// recording a join the first time the target entity is seen.
    pub fn join(
        &mut self,
        owner: &EntityConfig,
        owner_alias: &str,
        column: &ColumnDef,
        target: &EntityConfig,
    ) -> String {
        if let Some(alias) = self.generated.get(&target.name) {
            return alias.clone();
        }

        let alias = self.allocate(&target.name);
        let descriptor = JoinDescriptor {
            owner: owner.name.clone(),
            owner_alias: owner_alias.to_string(),
            target: target.name.clone(),
            target_table: target.table.clone(),
            target_alias: alias.clone(),
            fk_column: column.column_name().to_string(),
            ref_column: column
                .ref_name
                .clone()
                .unwrap_or_else(|| column.column_name().to_string()),
        };
        trace!(
            "Discovered join {}.{} -> {}.{}",
            descriptor.owner, descriptor.fk_column, descriptor.target, descriptor.ref_column
        );
        self.joins.push(descriptor);
        self.result.insert(
            alias.clone(),
            AliasTarget {
                entity: target.name.clone(),
                source_alias: Some(owner_alias.to_string()),
                source_property: Some(column.property.clone()),
            },
        );
        alias
    }

    /// Joins in discovery order.
    pub fn joins(&self) -> &[JoinDescriptor] {
        &self.joins
    }

    pub fn into_result(self) -> ResultAliasMap {
        self.result
    }
}
