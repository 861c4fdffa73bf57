use super::{AutoStrategy, ModelId};
use crate::stmt::{Type, Value};

use indexmap::IndexMap;

/// The primary key shape requested for an inline entity.
///
/// Either no primary key field is generated at all, or a single field is
/// injected ahead of the declared fields.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimaryKeySpec {
    /// Do not generate a primary key field.
    Disabled,

    /// Generate a primary key field with the given name, type, and options.
    Field {
        name: String,
        ty: Type,
        options: Vec<FieldOption>,
    },
}

impl PrimaryKeySpec {
    pub fn field(name: impl Into<String>, ty: Type) -> Self {
        Self::Field {
            name: name.into(),
            ty,
            options: vec![],
        }
    }

    pub fn field_with(name: impl Into<String>, ty: Type, options: Vec<FieldOption>) -> Self {
        Self::Field {
            name: name.into(),
            ty,
            options,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

impl Default for PrimaryKeySpec {
    fn default() -> Self {
        Self::field("id", Type::I64)
    }
}

/// An option attached to a generated field declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOption {
    Auto(AutoStrategy),
    StorageName(String),
}

/// A partial option set, as written at a bind call site or declared as
/// application-wide defaults.
///
/// Unset keys fall through to the next layer during resolution. Keys this
/// layer does not recognize are carried in `custom` and passed to the entity
/// factory untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityOptions {
    primary_key: Option<PrimaryKeySpec>,
    foreign_key_type: Option<Type>,
    owner: Option<ModelId>,
    custom: IndexMap<String, Value>,
}

impl EntityOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary_key(mut self, spec: PrimaryKeySpec) -> Self {
        self.primary_key = Some(spec);
        self
    }

    pub fn foreign_key_type(mut self, ty: Type) -> Self {
        self.foreign_key_type = Some(ty);
        self
    }

    /// Sets the owning model.
    ///
    /// Resolution overwrites this unconditionally; it exists so that option
    /// sets can be round-tripped without losing keys.
    pub fn owner(mut self, owner: ModelId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Sets a pass-through key the binding layer does not interpret.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.custom.get(key)
    }

    /// Key-wise, right-biased merge: any key set in `overrides` wins over
    /// the same key in `self`. Applies to recognized and pass-through keys
    /// alike.
    pub fn merge(&self, overrides: &EntityOptions) -> EntityOptions {
        let mut custom = self.custom.clone();
        for (key, value) in &overrides.custom {
            custom.insert(key.clone(), value.clone());
        }

        EntityOptions {
            primary_key: overrides
                .primary_key
                .clone()
                .or_else(|| self.primary_key.clone()),
            foreign_key_type: overrides
                .foreign_key_type
                .clone()
                .or_else(|| self.foreign_key_type.clone()),
            owner: overrides.owner.or(self.owner),
            custom,
        }
    }
}

/// The effective option set handed to the entity factory.
///
/// Produced by [`ResolvedOptions::resolve`]; every recognized key has a
/// value, and `owner` is always the declaring model regardless of caller
/// input.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub primary_key: PrimaryKeySpec,
    pub foreign_key_type: Type,
    pub owner: ModelId,
    pub custom: IndexMap<String, Value>,
}

impl ResolvedOptions {
    /// Merges application-wide defaults with call-site overrides and applies
    /// the built-in defaults.
    ///
    /// Precedence, lowest to highest: built-in defaults, `defaults`,
    /// `overrides`, the forced `owner` injection. Pure mapping arithmetic:
    /// this never fails, and shape validation of the values belongs to the
    /// entity factory.
    pub fn resolve(
        defaults: &EntityOptions,
        overrides: &EntityOptions,
        owner: ModelId,
    ) -> ResolvedOptions {
        let merged = defaults.merge(overrides);

        ResolvedOptions {
            primary_key: merged.primary_key.unwrap_or_default(),
            foreign_key_type: merged.foreign_key_type.unwrap_or(Type::I64),
            owner,
            custom: merged.custom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_right_biased() {
        let defaults = EntityOptions::new()
            .foreign_key_type(Type::String)
            .set("engine", "innodb");
        let overrides = EntityOptions::new()
            .foreign_key_type(Type::I64)
            .set("engine", "memory");

        let merged = defaults.merge(&overrides);
        assert_eq!(merged.foreign_key_type, Some(Type::I64));
        assert_eq!(merged.get("engine"), Some(&Value::from("memory")));
    }

    #[test]
    fn merge_keeps_unset_keys() {
        let defaults = EntityOptions::new().primary_key(PrimaryKeySpec::Disabled);
        let merged = defaults.merge(&EntityOptions::new());
        assert_eq!(merged.primary_key, Some(PrimaryKeySpec::Disabled));
    }

    #[test]
    fn resolve_forces_owner() {
        let overrides = EntityOptions::new().owner(ModelId(7));
        let resolved = ResolvedOptions::resolve(&EntityOptions::new(), &overrides, ModelId(3));
        assert_eq!(resolved.owner, ModelId(3));
    }
}
