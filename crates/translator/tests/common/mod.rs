//! Fixture schema shared by the integration tests.

use model::entity::{ColumnDef, ColumnType, EntityConfig, RelationDef, Schema};

/// - `Area`: a plain entity.
/// - `Area1`: lazy relation `area` to `Area`.
/// - `Area2`: eager relation `area` to `Area`.
/// - `Node`: eager relation `parent` to itself.
/// - `Tag`: no identifier.
pub fn schema() -> Schema {
    let area = EntityConfig::new("Area", "t_area")
        .with_id("areaId")
        .with_column(ColumnDef::new("areaId", ColumnType::Number).named("area_id"))
        .with_column(
            ColumnDef::new("areaName", ColumnType::String)
                .named("area_name")
                .not_null(),
        );

    let area1 = EntityConfig::new("Area1", "t_area1")
        .with_id("area1Id")
        .with_column(ColumnDef::new("area1Id", ColumnType::Number).named("area1_id"))
        .with_column(ColumnDef::new("name", ColumnType::String))
        .with_column(
            ColumnDef::new("area", ColumnType::Number)
                .named("area_id")
                .references("area_id"),
        )
        .with_relation("area", RelationDef::new("Area"));

    let area2 = EntityConfig::new("Area2", "t_area2")
        .with_id("id")
        .with_column(ColumnDef::new("id", ColumnType::Number))
        .with_column(ColumnDef::new("title", ColumnType::String))
        .with_column(
            ColumnDef::new("area", ColumnType::Number)
                .named("area_id")
                .references("area_id"),
        )
        .with_relation("area", RelationDef::new("Area").eager());

    let node = EntityConfig::new("Node", "t_node")
        .with_id("id")
        .with_column(ColumnDef::new("id", ColumnType::Number))
        .with_column(ColumnDef::new("label", ColumnType::String))
        .with_column(
            ColumnDef::new("parent", ColumnType::Number)
                .named("parent_id")
                .references("id"),
        )
        .with_relation("parent", RelationDef::new("Node").eager());

    let tag = EntityConfig::new("Tag", "t_tag")
        .with_column(ColumnDef::new("name", ColumnType::String));

    let mut schema = Schema::new();
    for config in [area, area1, area2, node, tag] {
        schema.register(config).expect("fixture entity is valid");
    }
    schema
}
