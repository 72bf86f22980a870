mod ty_enum;
pub use ty_enum::EnumType;

use crate::shape::ShapeId;
use crate::value::{Value, ValueEnum};

/// The declared type of a member slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    /// Boolean value
    Bool,

    /// String type
    String,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit floating point
    F32,

    /// 64-bit floating point
    F64,

    /// An enumeration with named variants
    Enum(EnumType),

    /// An optional representation of the inner type; absence is `Null`
    Nullable(Box<Type>),

    /// An instance of another shape
    Record(ShapeId),
}

impl Type {
    pub fn nullable(ty: impl Into<Self>) -> Self {
        Self::Nullable(Box::new(ty.into()))
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::F32
                | Self::F64
        )
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Self::Enum(ty) => Some(ty),
            _ => None,
        }
    }

    /// The type with any `Nullable` layers stripped.
    pub fn underlying(&self) -> &Type {
        let mut ty = self;
        while let Self::Nullable(inner) = ty {
            ty = inner;
        }
        ty
    }

    /// The zero value of the type: what a non-nullable slot holds when its
    /// source was absent. Nullable types have no zero beyond absence itself.
    pub fn zero_value(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::String => Value::String(String::new()),
            Self::I8 => Value::I8(0),
            Self::I16 => Value::I16(0),
            Self::I32 => Value::I32(0),
            Self::I64 => Value::I64(0),
            Self::U8 => Value::U8(0),
            Self::U16 => Value::U16(0),
            Self::U32 => Value::U32(0),
            Self::U64 => Value::U64(0),
            Self::F32 => Value::F32(0.0),
            Self::F64 => Value::F64(0.0),
            Self::Enum(_) => Value::Enum(ValueEnum::new(0)),
            Self::Nullable(_) | Self::Record(_) => Value::Null,
        }
    }

    /// Whether a target of this type can take a value of `other` without any
    /// conversion.
    pub fn is_assignable_from(&self, other: &Type) -> bool {
        self == other
    }

    /// Runtime shape check: whether `value` is a valid inhabitant of this
    /// type. `Null` inhabits every type; slots start out null regardless of
    /// their declared type.
    pub fn accepts(&self, value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::Bool(_) => matches!(self.underlying(), Self::Bool),
            Value::String(_) => matches!(self.underlying(), Self::String),
            Value::I8(_) => matches!(self.underlying(), Self::I8),
            Value::I16(_) => matches!(self.underlying(), Self::I16),
            Value::I32(_) => matches!(self.underlying(), Self::I32),
            Value::I64(_) => matches!(self.underlying(), Self::I64),
            Value::U8(_) => matches!(self.underlying(), Self::U8),
            Value::U16(_) => matches!(self.underlying(), Self::U16),
            Value::U32(_) => matches!(self.underlying(), Self::U32),
            Value::U64(_) => matches!(self.underlying(), Self::U64),
            Value::F32(_) => matches!(self.underlying(), Self::F32),
            Value::F64(_) => matches!(self.underlying(), Self::F64),
            Value::Enum(value) => match self.underlying() {
                Self::Enum(ty) => value.variant < ty.variants.len(),
                _ => false,
            },
            Value::Record(record) => match self.underlying() {
                Self::Record(shape) => record.shape() == *shape,
                _ => false,
            },
        }
    }
}

impl From<&Self> for Type {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}
