use super::super::{AutoStrategy, Name};
use crate::stmt::Type;

use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// The field name
    pub name: FieldName,

    /// Primitive column or relation foreign key
    pub ty: FieldTy,

    /// True if the field can be null
    pub nullable: bool,

    /// True if the field is the entity's primary key
    pub primary_key: bool,

    /// Specified if and how the persistence layer should populate this field
    pub auto: Option<AutoStrategy>,
}

#[derive(Debug, Clone)]
pub struct FieldName {
    pub app_name: String,
    pub storage_name: Option<String>,
}

impl FieldName {
    pub fn storage_name(&self) -> &str {
        self.storage_name.as_ref().unwrap_or(&self.app_name)
    }
}

#[derive(Clone)]
pub enum FieldTy {
    Primitive(Type),
    ForeignKey(ForeignKey),
}

/// A foreign key column generated for a relation declaration.
#[derive(Debug, Clone)]
pub struct ForeignKey {
    /// Name of the entity the key points at
    pub target: Name,

    /// The column type
    pub ty: Type,
}

impl Field {
    pub fn name(&self) -> &FieldName {
        &self.name
    }

    pub fn ty(&self) -> &FieldTy {
        &self.ty
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn auto(&self) -> Option<&AutoStrategy> {
        self.auto.as_ref()
    }

    pub fn is_foreign_key(&self) -> bool {
        self.ty.is_foreign_key()
    }

    /// The type the field **evaluates** to.
    pub fn expr_ty(&self) -> &Type {
        match &self.ty {
            FieldTy::Primitive(ty) => ty,
            FieldTy::ForeignKey(foreign_key) => &foreign_key.ty,
        }
    }
}

impl FieldTy {
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(..))
    }

    pub fn as_primitive(&self) -> Option<&Type> {
        match self {
            Self::Primitive(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn is_foreign_key(&self) -> bool {
        matches!(self, Self::ForeignKey(..))
    }

    pub fn as_foreign_key(&self) -> Option<&ForeignKey> {
        match self {
            Self::ForeignKey(foreign_key) => Some(foreign_key),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_foreign_key(&self) -> &ForeignKey {
        match self {
            Self::ForeignKey(foreign_key) => foreign_key,
            _ => panic!("expected field to be a foreign key, but was {self:?}"),
        }
    }
}

impl fmt::Debug for FieldTy {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(ty) => ty.fmt(fmt),
            Self::ForeignKey(ty) => ty.fmt(fmt),
        }
    }
}
