/// A field expression type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 64-bit integer
    U64,

    /// String type
    String,

    /// The null type can be cast to any type.
    Null,

    /// A type that could not be inferred
    Unknown,
}

impl Type {
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::I32 | Self::I64 | Self::U64)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    /// Returns `true` if the type may identify a record: primary key and
    /// foreign key fields must be keyable.
    pub fn is_key(&self) -> bool {
        self.is_integer() || self.is_string()
    }
}
