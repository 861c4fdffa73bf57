use super::super::{AutoStrategy, Name};
use crate::stmt::Type;

/// An inline entity description: the ordered field declarations a caller
/// writes at the bind site, before the factory compiles them.
#[derive(Debug, Clone)]
pub struct Description {
    pub(crate) name: Name,
    pub(crate) fields: Vec<FieldDef>,
}

impl Description {
    pub fn new(name: &str) -> Self {
        Self {
            name: Name::new(name),
            fields: vec![],
        }
    }

    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }
}

/// A single field declaration.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub(crate) name: String,
    pub(crate) kind: FieldDefKind,
    pub(crate) nullable: bool,
    pub(crate) auto: Option<AutoStrategy>,
    pub(crate) storage_name: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) enum FieldDefKind {
    /// A plain typed column
    Column(Type),

    /// A relation stub; compiles to a foreign key column named `{name}_id`
    BelongsTo { target: String, ty: Option<Type> },
}

impl FieldDef {
    /// Declares a plain column.
    pub fn column(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            kind: FieldDefKind::Column(ty),
            nullable: false,
            auto: None,
            storage_name: None,
        }
    }

    /// Declares a relation to `target`. The compiled foreign key column is
    /// named `{name}_id` and typed by the resolved `foreign_key_type` unless
    /// [`FieldDef::foreign_key_type`] overrides it.
    pub fn belongs_to(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldDefKind::BelongsTo {
                target: target.into(),
                ty: None,
            },
            nullable: false,
            auto: None,
            storage_name: None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn auto(mut self, strategy: AutoStrategy) -> Self {
        self.auto = Some(strategy);
        self
    }

    pub fn storage_name(mut self, storage_name: impl Into<String>) -> Self {
        self.storage_name = Some(storage_name.into());
        self
    }

    /// Overrides the foreign key column type for a relation declaration.
    /// Ignored for plain columns.
    pub fn foreign_key_type(mut self, ty: Type) -> Self {
        if let FieldDefKind::BelongsTo { ty: fk_ty, .. } = &mut self.kind {
            *fk_ty = Some(ty);
        }
        self
    }
}
