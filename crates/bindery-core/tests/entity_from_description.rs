use bindery_core::schema::{
    AutoStrategy, Description, Entity, EntityOptions, FieldDef, FieldOption, ModelId,
    PrimaryKeySpec, ResolvedOptions,
};
use bindery_core::stmt::Type;
use bindery_core::Error;

const OWNER: ModelId = ModelId(0);

fn resolved(defaults: EntityOptions, local: EntityOptions) -> ResolvedOptions {
    ResolvedOptions::resolve(&defaults, &local, OWNER)
}

fn default_options() -> ResolvedOptions {
    resolved(EntityOptions::new(), EntityOptions::new())
}

fn assert_invalid_options(err: &Error, fragment: &str) {
    assert!(err.is_invalid_options(), "expected invalid options: {err}");
    let msg = err.to_string();
    assert!(msg.contains(fragment), "expected `{fragment}` in: {msg}");
}

fn assert_invalid_entity(err: &Error, fragment: &str) {
    assert!(err.is_invalid_entity(), "expected invalid entity: {err}");
    let msg = err.to_string();
    assert!(msg.contains(fragment), "expected `{fragment}` in: {msg}");
}

#[test]
fn default_primary_key_is_injected_first() {
    let description = Description::new("post").field(FieldDef::column("title", Type::String));

    let entity = Entity::from_description(&default_options(), description).unwrap();

    assert_eq!(entity.name.snake_case(), "post");
    assert_eq!(entity.owner, OWNER);
    assert_eq!(entity.fields.len(), 2);

    let pk = entity.primary_key_field().unwrap();
    assert_eq!(pk.name.app_name, "id");
    assert_eq!(*pk.expr_ty(), Type::I64);
    assert!(pk.primary_key());
    assert!(!pk.nullable());

    assert_eq!(entity.field_index("id"), Some(0));
    assert_eq!(entity.field_index("title"), Some(1));
}

#[test]
fn disabled_primary_key_generates_no_field() {
    let options = resolved(
        EntityOptions::new(),
        EntityOptions::new().primary_key(PrimaryKeySpec::Disabled),
    );
    let description = Description::new("audit_entry").field(FieldDef::column("event", Type::String));

    let entity = Entity::from_description(&options, description).unwrap();

    assert!(entity.primary_key.is_none());
    assert!(entity.primary_key_field().is_none());
    assert_eq!(entity.fields.len(), 1);
    assert_eq!(entity.field(0).name.app_name, "event");
}

#[test]
fn primary_key_options_apply_to_generated_field() {
    let spec = PrimaryKeySpec::field_with(
        "user_id",
        Type::U64,
        vec![
            FieldOption::Auto(AutoStrategy::Increment),
            FieldOption::StorageName("pk".to_string()),
        ],
    );
    let options = resolved(EntityOptions::new(), EntityOptions::new().primary_key(spec));

    let entity =
        Entity::from_description(&options, Description::new("user")).unwrap();

    let pk = entity.primary_key_field().unwrap();
    assert_eq!(pk.name.app_name, "user_id");
    assert_eq!(pk.name.storage_name(), "pk");
    assert_eq!(*pk.expr_ty(), Type::U64);
    assert!(pk.auto().unwrap().is_increment());
}

#[test]
fn belongs_to_compiles_to_foreign_key_column() {
    let description = Description::new("comment")
        .field(FieldDef::column("body", Type::String))
        .field(FieldDef::belongs_to("post", "post"));

    let entity = Entity::from_description(&default_options(), description).unwrap();

    let field = entity.field_by_name("post_id").unwrap();
    assert!(field.is_foreign_key());

    let foreign_key = field.ty.expect_foreign_key();
    assert_eq!(foreign_key.target.snake_case(), "post");
    assert_eq!(foreign_key.ty, Type::I64);
}

#[test]
fn foreign_key_type_option_controls_relation_columns() {
    let options = resolved(
        EntityOptions::new().foreign_key_type(Type::String),
        EntityOptions::new(),
    );
    let description = Description::new("comment").field(FieldDef::belongs_to("post", "post"));

    let entity = Entity::from_description(&options, description).unwrap();

    let field = entity.field_by_name("post_id").unwrap();
    assert_eq!(*field.expr_ty(), Type::String);
}

#[test]
fn explicit_foreign_key_type_overrides_option() {
    let options = resolved(
        EntityOptions::new().foreign_key_type(Type::String),
        EntityOptions::new(),
    );
    let description = Description::new("comment")
        .field(FieldDef::belongs_to("post", "post").foreign_key_type(Type::I32));

    let entity = Entity::from_description(&options, description).unwrap();

    let field = entity.field_by_name("post_id").unwrap();
    assert_eq!(*field.expr_ty(), Type::I32);
}

#[test]
fn nullable_and_storage_name_modifiers() {
    let description = Description::new("profile").field(
        FieldDef::column("bio", Type::String)
            .nullable()
            .storage_name("bio_text"),
    );

    let entity = Entity::from_description(&default_options(), description).unwrap();

    let field = entity.field_by_name("bio").unwrap();
    assert!(field.nullable());
    assert_eq!(field.name.storage_name(), "bio_text");
}

#[test]
fn duplicate_field_is_rejected() {
    let description = Description::new("post")
        .field(FieldDef::column("title", Type::String))
        .field(FieldDef::column("title", Type::String));

    let err = Entity::from_description(&default_options(), description).unwrap_err();
    assert_invalid_entity(&err, "duplicate field `title`");
}

#[test]
fn empty_field_name_is_rejected() {
    let description = Description::new("post").field(FieldDef::column("", Type::String));

    let err = Entity::from_description(&default_options(), description).unwrap_err();
    assert_invalid_entity(&err, "empty name");
}

#[test]
fn field_colliding_with_primary_key_is_rejected() {
    let description = Description::new("post").field(FieldDef::column("id", Type::I64));

    let err = Entity::from_description(&default_options(), description).unwrap_err();
    assert_invalid_entity(&err, "collides with the generated primary key");
}

#[test]
fn non_key_primary_key_type_is_rejected() {
    let options = resolved(
        EntityOptions::new(),
        EntityOptions::new().primary_key(PrimaryKeySpec::field("flag", Type::Bool)),
    );

    let err = Entity::from_description(&options, Description::new("post")).unwrap_err();
    assert_invalid_options(&err, "primary key type Bool is not a key type");
}

#[test]
fn empty_primary_key_name_is_rejected() {
    let options = resolved(
        EntityOptions::new(),
        EntityOptions::new().primary_key(PrimaryKeySpec::field("", Type::I64)),
    );

    let err = Entity::from_description(&options, Description::new("post")).unwrap_err();
    assert_invalid_options(&err, "primary key field name is empty");
}

#[test]
fn non_key_foreign_key_type_is_rejected() {
    let options = resolved(
        EntityOptions::new().foreign_key_type(Type::Bool),
        EntityOptions::new(),
    );

    let err = Entity::from_description(&options, Description::new("comment")).unwrap_err();
    assert_invalid_options(&err, "foreign_key_type Bool is not a key type");
}

#[test]
fn non_key_explicit_relation_type_is_rejected() {
    let description = Description::new("comment")
        .field(FieldDef::belongs_to("post", "post").foreign_key_type(Type::Bool));

    let err = Entity::from_description(&default_options(), description).unwrap_err();
    assert_invalid_entity(&err, "not a key type");
}
