//! INSERT, UPDATE and DELETE generation from live entity instances.

use crate::{
    error::TranslateError,
    query::{
        ast::{
            delete::Delete,
            expr::{BinaryOp, BinaryOperator, Expr, Ident},
            insert::Insert,
            update::{Assignment, Update},
        },
        renderer::to_sql,
    },
    table_ref,
};
use model::{
    core::value::Value,
    entity::{ColumnDef, Entity, EntityConfig, EntityRegistry},
};
use std::{fmt, str::FromStr};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Insert,
    Update,
    Delete,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationKind::Insert => write!(f, "insert"),
            MutationKind::Update => write!(f, "update"),
            MutationKind::Delete => write!(f, "delete"),
        }
    }
}

impl FromStr for MutationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "insert" => Ok(MutationKind::Insert),
            "update" => Ok(MutationKind::Update),
            "delete" => Ok(MutationKind::Delete),
            other => Err(format!("unknown mutation kind '{}'", other)),
        }
    }
}

/// Generates the `kind` statement for `entity`, reading its metadata from
/// `registry`.
pub fn entity_to_sql<R: EntityRegistry + ?Sized>(
    registry: &R,
    entity: &dyn Entity,
    kind: MutationKind,
) -> Result<String, TranslateError> {
    let config = registry
        .lookup(entity.entity_name())
        .ok_or_else(|| TranslateError::UnknownEntity(entity.entity_name().to_string()))?;

    let sql = match kind {
        MutationKind::Insert => to_sql(&build_insert(config, entity)),
        MutationKind::Update => to_sql(&build_update(config, entity)?),
        MutationKind::Delete => to_sql(&build_delete(config, entity)?),
    };
    debug!("Generated {} for entity '{}': {}", kind, config.name, sql);
    Ok(sql)
}

/// Undefined properties are skipped. Nullability is not checked here.
fn build_insert(config: &EntityConfig, entity: &dyn Entity) -> Insert {
    let mut columns = Vec::new();
    let mut values = Vec::new();

    for column in &config.columns {
        let Some(value) = entity.property(&column.property) else {
            continue;
        };
        columns.push(column.column_name().to_string());
        values.push(literal(&value, column));
    }

    Insert {
        table: table_ref!(config.table),
        columns,
        values,
    }
}

/// Every non-foreign-key column is assigned; null or undefined values
/// require a nullable column.
fn build_update(config: &EntityConfig, entity: &dyn Entity) -> Result<Update, TranslateError> {
    let id = config
        .id_column()
        .ok_or_else(|| TranslateError::MissingIdentifier(config.name.clone()))?;

    let mut assignments = Vec::new();
    for column in config.columns.iter().filter(|c| !c.is_foreign_key()) {
        let value = entity.property(&column.property).unwrap_or(Value::Null);
        if value.is_null() && !column.nullable {
            return Err(TranslateError::NullNotAllowed {
                entity: config.name.clone(),
                property: column.property.clone(),
            });
        }
        assignments.push(Assignment {
            column: column.column_name().to_string(),
            value: literal(&value, column),
        });
    }

    let id_value = identifier_value(config, id, entity)?;
    Ok(Update {
        table: table_ref!(config.table),
        assignments,
        where_clause: id_predicate(id, id_value, BinaryOperator::Assign),
    })
}

fn build_delete(config: &EntityConfig, entity: &dyn Entity) -> Result<Delete, TranslateError> {
    let id = config
        .id_column()
        .ok_or_else(|| TranslateError::MissingIdentifierConfig(config.name.clone()))?;
    let id_value = identifier_value(config, id, entity)?;

    Ok(Delete {
        table: table_ref!(config.table),
        where_clause: id_predicate(id, id_value, BinaryOperator::Eq),
    })
}

fn identifier_value(
    config: &EntityConfig,
    id: &ColumnDef,
    entity: &dyn Entity,
) -> Result<Expr, TranslateError> {
    match entity.property(&id.property) {
        Some(value) if !value.is_null() => Ok(literal(&value, id)),
        _ => Err(TranslateError::MissingIdentifierValue(config.name.clone())),
    }
}

fn id_predicate(id: &ColumnDef, value: Expr, op: BinaryOperator) -> Expr {
    Expr::BinaryOp(Box::new(BinaryOp::new(
        Expr::Column(Ident::bare(id.column_name())),
        op,
        value,
    )))
}

/// Inlines `value`. String and date columns are single-quoted unless null;
/// the value itself is not escaped.
fn literal(value: &Value, column: &ColumnDef) -> Expr {
    if !value.is_null() && column.column_type.is_quoted() {
        Expr::Literal(format!("'{}'", value))
    } else {
        Expr::Literal(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::entity::{ColumnType, Record, RelationDef, Schema};
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new()
            .with(
                EntityConfig::new("User", "t_user")
                    .with_id("userId")
                    .with_column(ColumnDef::new("userId", ColumnType::Number).named("user_id"))
                    .with_column(ColumnDef::new("name", ColumnType::String).not_null())
                    .with_column(ColumnDef::new("birthday", ColumnType::Date))
                    .with_column(
                        ColumnDef::new("dept", ColumnType::Number)
                            .named("dept_id")
                            .references("dept_id"),
                    )
                    .with_relation("dept", RelationDef::new("Dept")),
            )
            .unwrap()
            .with(
                EntityConfig::new("Dept", "t_dept")
                    .with_id("deptId")
                    .with_column(ColumnDef::new("deptId", ColumnType::Number).named("dept_id")),
            )
            .unwrap()
            .with(
                EntityConfig::new("Log", "t_log")
                    .with_column(ColumnDef::new("message", ColumnType::String)),
            )
            .unwrap()
    }

    fn user() -> Record {
        Record::new("User")
            .set("userId", json!(7))
            .set("name", json!("ann"))
            .set("birthday", json!("1990-01-02"))
            .set("dept", json!(3))
    }

    #[test]
    fn test_insert_all_columns() {
        let sql = entity_to_sql(&schema(), &user(), MutationKind::Insert).unwrap();
        assert_eq!(
            sql,
            "insert into t_user (user_id,name,birthday,dept_id) values (7,'ann','1990-01-02',3)"
        );
    }

    #[test]
    fn test_insert_skips_undefined_properties() {
        let record = Record::new("User").set("name", json!("ann"));
        let sql = entity_to_sql(&schema(), &record, MutationKind::Insert).unwrap();
        assert_eq!(sql, "insert into t_user (name) values ('ann')");
    }

    #[test]
    fn test_insert_does_not_check_nullability() {
        // `name` is not nullable; only update enforces it.
        let record = Record::new("User").set("userId", json!(1)).set("name", json!(null));
        let sql = entity_to_sql(&schema(), &record, MutationKind::Insert).unwrap();
        assert_eq!(sql, "insert into t_user (user_id,name) values (1,null)");

        let err = entity_to_sql(&schema(), &record, MutationKind::Update).unwrap_err();
        assert_eq!(
            err,
            TranslateError::NullNotAllowed {
                entity: "User".to_string(),
                property: "name".to_string(),
            }
        );
    }

    #[test]
    fn test_update_excludes_foreign_keys() {
        let sql = entity_to_sql(&schema(), &user(), MutationKind::Update).unwrap();
        assert_eq!(
            sql,
            "update t_user set user_id=7,name='ann',birthday='1990-01-02' where user_id=7"
        );
        assert!(!sql.contains("dept_id"));
    }

    #[test]
    fn test_update_writes_null_for_undefined_nullable() {
        let record = Record::new("User").set("userId", json!(7)).set("name", json!("bo"));
        let sql = entity_to_sql(&schema(), &record, MutationKind::Update).unwrap();
        assert_eq!(
            sql,
            "update t_user set user_id=7,name='bo',birthday=null where user_id=7"
        );
    }

    #[test]
    fn test_update_requires_identifier() {
        let record = Record::new("Log").set("message", json!("hi"));
        let err = entity_to_sql(&schema(), &record, MutationKind::Update).unwrap_err();
        assert_eq!(err, TranslateError::MissingIdentifier("Log".to_string()));
        assert_eq!(err.code(), "0103");
    }

    #[test]
    fn test_delete() {
        let sql = entity_to_sql(&schema(), &user(), MutationKind::Delete).unwrap();
        assert_eq!(sql, "delete from t_user where user_id = 7");
    }

    #[test]
    fn test_delete_identifier_errors() {
        let missing = Record::new("User").set("name", json!("ann"));
        let null = Record::new("User").set("userId", json!(null));
        for record in [missing, null] {
            let err = entity_to_sql(&schema(), &record, MutationKind::Delete).unwrap_err();
            assert_eq!(err, TranslateError::MissingIdentifierValue("User".to_string()));
        }

        let log = Record::new("Log").set("message", json!("hi"));
        let err = entity_to_sql(&schema(), &log, MutationKind::Delete).unwrap_err();
        assert_eq!(err, TranslateError::MissingIdentifierConfig("Log".to_string()));
    }

    #[test]
    fn test_unknown_entity() {
        let record = Record::new("Ghost");
        let err = entity_to_sql(&schema(), &record, MutationKind::Insert).unwrap_err();
        assert_eq!(err, TranslateError::UnknownEntity("Ghost".to_string()));
    }

    #[test]
    fn test_mutation_kind_from_str() {
        assert_eq!("Update".parse::<MutationKind>(), Ok(MutationKind::Update));
        assert!("upsert".parse::<MutationKind>().is_err());
    }
}
