//! The compiled record schema and the factory that builds it from an inline
//! description.

mod description;
pub use description::{Description, FieldDef};

mod field;
pub use field::{Field, FieldName, FieldTy, ForeignKey};

use super::{FieldOption, ModelId, Name, PrimaryKeySpec, ResolvedOptions};
use crate::stmt::{Value, ValueRecord};
use crate::{Error, Result};

/// A compiled record schema: the field metadata and constructors for one
/// storage source.
///
/// Entities are produced either by the factory ([`Entity::from_description`])
/// or assembled directly by callers that manage their own schema types. Once
/// built they are immutable.
#[derive(Debug)]
pub struct Entity {
    /// Name of the entity
    pub name: Name,

    /// The model this entity was compiled for
    pub owner: ModelId,

    /// Fields contained by the entity, primary key first when present
    pub fields: Vec<Field>,

    /// The primary key, if the entity has one
    pub primary_key: Option<PrimaryKey>,
}

/// The entity's primary key field.
#[derive(Debug, Clone)]
pub struct PrimaryKey {
    /// Index of the primary key field within [`Entity::fields`]
    pub field: usize,
}

impl Entity {
    /// Compiles an inline description into an entity.
    ///
    /// The resolved option set controls the generated primary key field and
    /// the default type of relation foreign keys. Malformed option shapes
    /// and malformed field declarations fail here, at declaration time.
    pub fn from_description(options: &ResolvedOptions, description: Description) -> Result<Self> {
        Builder::new(options).build(description)
    }

    pub fn field(&self, index: usize) -> &Field {
        &self.fields[index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.app_name == name)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| field.name.app_name == name)
    }

    /// Returns the primary key field, if the entity has one.
    pub fn primary_key_field(&self) -> Option<&Field> {
        self.primary_key.as_ref().map(|pk| &self.fields[pk.field])
    }

    /// Creates an empty record: one slot per field, all null.
    pub fn new_record(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![Value::Null; self.fields.len()])
    }

    /// Creates a record with the given field values set.
    ///
    /// Values are positioned by field name; a name the entity does not
    /// declare is a validation error. Value types are not checked here.
    pub fn new_record_with<K>(&self, values: impl IntoIterator<Item = (K, Value)>) -> Result<ValueRecord>
    where
        K: AsRef<str>,
    {
        let mut record = self.new_record();

        for (name, value) in values {
            let Some(index) = self.field_index(name.as_ref()) else {
                return Err(Error::unknown_field(self.name.snake_case(), name.as_ref()));
            };
            record[index] = value;
        }

        Ok(record)
    }
}

/// Used to track state while compiling a description
struct Builder<'a> {
    options: &'a ResolvedOptions,
    fields: Vec<Field>,
}

impl<'a> Builder<'a> {
    fn new(options: &'a ResolvedOptions) -> Self {
        Self {
            options,
            fields: vec![],
        }
    }

    fn build(mut self, description: Description) -> Result<Entity> {
        self.verify_options()?;

        let primary_key = match &self.options.primary_key {
            PrimaryKeySpec::Disabled => None,
            PrimaryKeySpec::Field { name, ty, options } => {
                self.fields.push(primary_key_field(name, ty.clone(), options));
                Some(PrimaryKey { field: 0 })
            }
        };

        for def in description.fields {
            let field = self.build_field(def)?;
            self.push_field(field)?;
        }

        Ok(Entity {
            name: description.name,
            owner: self.options.owner,
            fields: self.fields,
            primary_key,
        })
    }

    /// Shape checks for the recognized option keys. Pass-through keys are
    /// not inspected.
    fn verify_options(&self) -> Result<()> {
        if let PrimaryKeySpec::Field { name, ty, .. } = &self.options.primary_key {
            if name.is_empty() {
                return Err(Error::invalid_options("primary key field name is empty"));
            }
            if !ty.is_key() {
                return Err(Error::invalid_options(format!(
                    "primary key type {ty:?} is not a key type"
                )));
            }
        }

        if !self.options.foreign_key_type.is_key() {
            return Err(Error::invalid_options(format!(
                "foreign_key_type {:?} is not a key type",
                self.options.foreign_key_type
            )));
        }

        Ok(())
    }

    fn build_field(&self, def: FieldDef) -> Result<Field> {
        if def.name.is_empty() {
            return Err(Error::invalid_entity("field declaration has an empty name"));
        }

        let (name, ty) = match def.kind {
            description::FieldDefKind::Column(ty) => (def.name, FieldTy::Primitive(ty)),
            description::FieldDefKind::BelongsTo { target, ty } => {
                let ty = match ty {
                    Some(ty) if !ty.is_key() => {
                        return Err(Error::invalid_entity(format!(
                            "relation `{}` declares foreign key type {ty:?}, \
                             which is not a key type",
                            def.name
                        )));
                    }
                    Some(ty) => ty,
                    None => self.options.foreign_key_type.clone(),
                };

                // The relation compiles to its foreign key column
                let column = format!("{}_id", def.name);
                let foreign_key = ForeignKey {
                    target: Name::new(&target),
                    ty,
                };

                (column, FieldTy::ForeignKey(foreign_key))
            }
        };

        Ok(Field {
            name: FieldName {
                app_name: name,
                storage_name: def.storage_name,
            },
            ty,
            nullable: def.nullable,
            primary_key: false,
            auto: def.auto,
        })
    }

    fn push_field(&mut self, field: Field) -> Result<()> {
        if let Some(existing) = self
            .fields
            .iter()
            .find(|f| f.name.app_name == field.name.app_name)
        {
            if existing.primary_key {
                return Err(Error::invalid_entity(format!(
                    "field `{}` collides with the generated primary key field",
                    field.name.app_name
                )));
            }
            return Err(Error::invalid_entity(format!(
                "duplicate field `{}`",
                field.name.app_name
            )));
        }

        self.fields.push(field);
        Ok(())
    }
}

fn primary_key_field(name: &str, ty: crate::stmt::Type, options: &[FieldOption]) -> Field {
    let mut auto = None;
    let mut storage_name = None;

    for option in options {
        match option {
            FieldOption::Auto(strategy) => auto = Some(strategy.clone()),
            FieldOption::StorageName(storage) => storage_name = Some(storage.clone()),
        }
    }

    Field {
        name: FieldName {
            app_name: name.to_string(),
            storage_name,
        },
        ty: FieldTy::Primitive(ty),
        nullable: false,
        primary_key: true,
        auto,
    }
}
