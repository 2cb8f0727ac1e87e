mod common;

use chrono::NaiveDate;
use common::schema;
use model::{core::value::Value, entity::Record, impl_entity};
use serde_json::json;
use tracing_test::traced_test;
use translator::{MutationKind, TranslateError, Translator};

struct Area {
    area_id: Option<i64>,
    area_name: Option<String>,
}

impl_entity!(Area, "Area", {
    "areaId" => area_id,
    "areaName" => area_name,
});

struct Area1 {
    area1_id: i64,
    name: Option<Value>,
    area: Option<i64>,
    created: NaiveDate,
}

// `created` is not mapped to a column and is ignored.
impl_entity!(Area1, "Area1", {
    "area1Id" => area1_id,
    "name" => name,
    "area" => area,
    "created" => created,
});

#[traced_test]
#[test]
fn test_typed_entity_all_kinds() {
    let registry = schema();
    let translator = Translator::new(&registry);
    let area = Area {
        area_id: Some(4),
        area_name: Some("north".to_string()),
    };

    assert_eq!(
        translator.entity_to_sql(&area, MutationKind::Insert).unwrap(),
        "insert into t_area (area_id,area_name) values (4,'north')"
    );
    assert_eq!(
        translator.entity_to_sql(&area, MutationKind::Update).unwrap(),
        "update t_area set area_id=4,area_name='north' where area_id=4"
    );
    assert_eq!(
        translator.entity_to_sql(&area, MutationKind::Delete).unwrap(),
        "delete from t_area where area_id = 4"
    );
}

#[test]
fn test_insert_columns_match_values() {
    let registry = schema();
    let entity = Area1 {
        area1_id: 1,
        name: Some(Value::String("east".to_string())),
        area: Some(4),
        created: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    };

    let sql = Translator::new(&registry)
        .entity_to_sql(&entity, MutationKind::Insert)
        .unwrap();
    assert_eq!(
        sql,
        "insert into t_area1 (area1_id,name,area_id) values (1,'east',4)"
    );

    let (columns, values) = sql
        .strip_prefix("insert into t_area1 (")
        .and_then(|rest| rest.strip_suffix(')'))
        .and_then(|rest| rest.split_once(") values ("))
        .unwrap();
    assert_eq!(columns.split(',').count(), values.split(',').count());
}

#[test]
fn test_update_never_sets_foreign_keys() {
    let registry = schema();
    let entity = Area1 {
        area1_id: 1,
        name: Some(Value::Null),
        area: Some(4),
        created: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    };

    let sql = Translator::new(&registry)
        .entity_to_sql(&entity, MutationKind::Update)
        .unwrap();
    assert_eq!(sql, "update t_area1 set area1_id=1,name=null where area1_id=1");
}

#[test]
fn test_insert_null_is_not_checked_but_update_is() {
    let registry = schema();
    let translator = Translator::new(&registry);
    let area = Area {
        area_id: Some(4),
        area_name: None,
    };

    assert_eq!(
        translator.entity_to_sql(&area, MutationKind::Insert).unwrap(),
        "insert into t_area (area_id) values (4)"
    );

    let record = Record::new("Area")
        .set("areaId", json!(4))
        .set("areaName", json!(null));
    assert_eq!(
        translator.entity_to_sql(&record, MutationKind::Insert).unwrap(),
        "insert into t_area (area_id,area_name) values (4,null)"
    );

    let err = translator
        .entity_to_sql(&record, MutationKind::Update)
        .unwrap_err();
    assert_eq!(err.code(), "0021");
    assert_eq!(err.args(), vec!["Area", "areaName"]);
}

#[test]
fn test_delete_requires_identifier_value() {
    let registry = schema();
    let translator = Translator::new(&registry);

    let with_id = Area {
        area_id: Some(9),
        area_name: None,
    };
    assert!(translator.entity_to_sql(&with_id, MutationKind::Delete).is_ok());

    let without_id = Area {
        area_id: None,
        area_name: Some("x".to_string()),
    };
    assert_eq!(
        translator
            .entity_to_sql(&without_id, MutationKind::Delete)
            .unwrap_err(),
        TranslateError::MissingIdentifierValue("Area".to_string())
    );
}
