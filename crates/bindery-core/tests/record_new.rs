use bindery_core::schema::{Description, Entity, EntityOptions, FieldDef, ModelId, ResolvedOptions};
use bindery_core::stmt::{Type, Value};

fn post_entity() -> Entity {
    let options =
        ResolvedOptions::resolve(&EntityOptions::new(), &EntityOptions::new(), ModelId(0));
    let description = Description::new("post")
        .field(FieldDef::column("title", Type::String))
        .field(FieldDef::column("draft", Type::Bool));

    Entity::from_description(&options, description).unwrap()
}

#[test]
fn new_record_is_all_null() {
    let entity = post_entity();

    let record = entity.new_record();

    assert_eq!(record.len(), 3);
    assert!(record.iter().all(Value::is_null));
}

#[test]
fn new_record_with_positions_values_by_field_name() {
    let entity = post_entity();

    let record = entity
        .new_record_with([("title", Value::from("hello")), ("draft", Value::from(true))])
        .unwrap();

    assert!(record[0].is_null()); // generated id field, untouched
    assert_eq!(record[1], Value::from("hello"));
    assert_eq!(record[2], Value::from(true));
}

#[test]
fn new_record_with_unknown_field_fails() {
    let entity = post_entity();

    let err = entity
        .new_record_with([("titel", Value::from("hello"))])
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.to_string(), "unknown field `titel` for entity `post`");
}

#[test]
fn new_record_with_no_values_equals_new_record() {
    let entity = post_entity();

    let with: Vec<(&str, Value)> = vec![];
    let record = entity.new_record_with(with).unwrap();

    assert_eq!(record, entity.new_record());
}
