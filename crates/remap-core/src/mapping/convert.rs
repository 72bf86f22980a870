use super::NullablePolicy;
use crate::ty::{EnumType, Type};
use crate::value::{Value, ValueEnum};
use crate::{Error, Result};

/// An executable conversion plan between two member types.
///
/// Resolved once at compile time from the declared types; applied per value
/// at mapping time. Casts are built eagerly even when a runtime value may
/// turn out incompatible; those failures surface as conversion errors at
/// execution time, not at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Parse a string as an enum variant name
    ParseEnum(ParseEnum),

    /// Nullable source into non-nullable target; null becomes the zero value
    Unwrap(Unwrap),

    /// Non-nullable source into nullable target
    Wrap(Wrap),

    /// Render the source value as a string
    Stringify(Stringify),

    /// Numeric cast, checked per value at execution time
    Cast(Cast),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnum {
    /// The target enum type
    pub ty: EnumType,

    /// Whether the target tolerates an absent source value
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unwrap {
    /// The non-nullable target type whose zero value substitutes for null
    pub underlying: Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrap {
    /// The non-nullable source type
    pub underlying: Type,

    /// Whether the source zero value maps to absent on the target
    pub default_maps_to_null: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stringify {
    /// The declared source type; enum sources render their variant name
    pub source: Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cast {
    pub from: Type,
    pub to: Type,
}

impl From<ParseEnum> for Conversion {
    fn from(value: ParseEnum) -> Self {
        Self::ParseEnum(value)
    }
}

impl From<Unwrap> for Conversion {
    fn from(value: Unwrap) -> Self {
        Self::Unwrap(value)
    }
}

impl From<Wrap> for Conversion {
    fn from(value: Wrap) -> Self {
        Self::Wrap(value)
    }
}

impl From<Stringify> for Conversion {
    fn from(value: Stringify) -> Self {
        Self::Stringify(value)
    }
}

impl From<Cast> for Conversion {
    fn from(value: Cast) -> Self {
        Self::Cast(value)
    }
}

impl Conversion {
    /// Selects the conversion between two distinct member types, or fails
    /// with a configuration error when no rule applies.
    pub fn resolve(source: &Type, target: &Type, policy: NullablePolicy) -> Result<Self> {
        debug_assert_ne!(source, target);

        // String -> enum, unwrapping nullability on both sides
        if let Type::Enum(ty) = target.underlying() {
            if source.underlying().is_string() {
                return Ok(ParseEnum {
                    ty: ty.clone(),
                    nullable: target.is_nullable(),
                }
                .into());
            }
        }

        // Exactly one side nullable
        if source.is_nullable() != target.is_nullable() {
            if policy == NullablePolicy::Error {
                return Err(Error::configuration(format!(
                    "nullable pairing of {source:?} and {target:?} is forbidden by policy"
                )));
            }

            if source.underlying() == target.underlying() {
                return Ok(if source.is_nullable() {
                    Unwrap {
                        underlying: target.clone(),
                    }
                    .into()
                } else {
                    Wrap {
                        underlying: source.clone(),
                        default_maps_to_null: policy == NullablePolicy::DefaultMapsToNull,
                    }
                    .into()
                });
            }
        }

        // Anything -> string
        if target.underlying().is_string() {
            return Ok(Stringify {
                source: source.clone(),
            }
            .into());
        }

        // Fallback numeric cast
        if source.underlying().is_numeric() && target.underlying().is_numeric() {
            return Ok(Cast {
                from: source.clone(),
                to: target.clone(),
            }
            .into());
        }

        Err(Error::configuration(format!(
            "no conversion from {source:?} to {target:?}"
        )))
    }

    /// Applies the plan to one runtime value.
    pub fn apply(&self, value: Value) -> Result<Value> {
        match self {
            Self::ParseEnum(conversion) => conversion.apply(value),
            Self::Unwrap(conversion) => conversion.apply(value),
            Self::Wrap(conversion) => conversion.apply(value),
            Self::Stringify(conversion) => conversion.apply(value),
            Self::Cast(conversion) => conversion.apply(value),
        }
    }
}

impl ParseEnum {
    fn apply(&self, value: Value) -> Result<Value> {
        match value {
            Value::Null if self.nullable => Ok(Value::Null),
            Value::String(name) => match self.ty.variant_of(&name) {
                Some(variant) => Ok(ValueEnum::new(variant).into()),
                None => Err(Error::conversion(
                    Value::String(name),
                    self.ty.name.clone(),
                )),
            },
            other => Err(Error::conversion(other, self.ty.name.clone())),
        }
    }
}

impl Unwrap {
    fn apply(&self, value: Value) -> Result<Value> {
        match value {
            Value::Null => Ok(self.underlying.zero_value()),
            present => Ok(present),
        }
    }
}

impl Wrap {
    fn apply(&self, value: Value) -> Result<Value> {
        if self.default_maps_to_null && value == self.underlying.zero_value() {
            Ok(Value::Null)
        } else {
            Ok(value)
        }
    }
}

impl Stringify {
    fn apply(&self, value: Value) -> Result<Value> {
        Ok(match value {
            // Null renders as null; absence survives stringification
            Value::Null => Value::Null,
            Value::Bool(v) => v.to_string().into(),
            Value::I8(v) => v.to_string().into(),
            Value::I16(v) => v.to_string().into(),
            Value::I32(v) => v.to_string().into(),
            Value::I64(v) => v.to_string().into(),
            Value::U8(v) => v.to_string().into(),
            Value::U16(v) => v.to_string().into(),
            Value::U32(v) => v.to_string().into(),
            Value::U64(v) => v.to_string().into(),
            Value::F32(v) => v.to_string().into(),
            Value::F64(v) => v.to_string().into(),
            Value::String(v) => Value::String(v),
            Value::Enum(v) => {
                let name = self
                    .source
                    .underlying()
                    .as_enum()
                    .and_then(|ty| ty.variant_name(v.variant));
                match name {
                    Some(name) => name.into(),
                    None => return Err(Error::conversion(Value::Enum(v), "String")),
                }
            }
            Value::Record(v) => return Err(Error::conversion(Value::Record(v), "String")),
        })
    }
}

impl Cast {
    fn apply(&self, value: Value) -> Result<Value> {
        // Null passes through every cast
        if value.is_null() {
            return Ok(value);
        }

        let to = self.to.underlying();

        let num = match integer_of(&value) {
            Some(n) => Num::Int(n),
            None => match float_of(&value) {
                Some(f) => Num::Float(f),
                None => return Err(Error::conversion(value, type_label(to))),
            },
        };

        match num {
            Num::Int(n) => cast_integer(n, to, &value),
            Num::Float(f) => cast_float(f, to, &value),
        }
    }
}

enum Num {
    Int(i128),
    Float(f64),
}

fn integer_of(value: &Value) -> Option<i128> {
    Some(match *value {
        Value::I8(v) => v as i128,
        Value::I16(v) => v as i128,
        Value::I32(v) => v as i128,
        Value::I64(v) => v as i128,
        Value::U8(v) => v as i128,
        Value::U16(v) => v as i128,
        Value::U32(v) => v as i128,
        Value::U64(v) => v as i128,
        _ => return None,
    })
}

fn float_of(value: &Value) -> Option<f64> {
    Some(match *value {
        Value::F32(v) => v as f64,
        Value::F64(v) => v,
        _ => return None,
    })
}

fn cast_integer(n: i128, to: &Type, original: &Value) -> Result<Value> {
    let out_of_range = || Error::conversion(original.clone(), type_label(to));

    Ok(match to {
        Type::I8 => Value::I8(i8::try_from(n).map_err(|_| out_of_range())?),
        Type::I16 => Value::I16(i16::try_from(n).map_err(|_| out_of_range())?),
        Type::I32 => Value::I32(i32::try_from(n).map_err(|_| out_of_range())?),
        Type::I64 => Value::I64(i64::try_from(n).map_err(|_| out_of_range())?),
        Type::U8 => Value::U8(u8::try_from(n).map_err(|_| out_of_range())?),
        Type::U16 => Value::U16(u16::try_from(n).map_err(|_| out_of_range())?),
        Type::U32 => Value::U32(u32::try_from(n).map_err(|_| out_of_range())?),
        Type::U64 => Value::U64(u64::try_from(n).map_err(|_| out_of_range())?),
        Type::F32 => Value::F32(n as f32),
        Type::F64 => Value::F64(n as f64),
        _ => return Err(out_of_range()),
    })
}

fn cast_float(f: f64, to: &Type, original: &Value) -> Result<Value> {
    let out_of_range = || Error::conversion(original.clone(), type_label(to));

    match to {
        Type::F32 => return Ok(Value::F32(f as f32)),
        Type::F64 => return Ok(Value::F64(f)),
        _ => {}
    }

    // Integer target: truncate toward zero, then range-check
    if !f.is_finite() {
        return Err(out_of_range());
    }
    let truncated = f.trunc();
    if truncated < i128::MIN as f64 || truncated >= i128::MAX as f64 {
        return Err(out_of_range());
    }

    cast_integer(truncated as i128, to, original)
}

fn type_label(ty: &Type) -> String {
    match ty {
        Type::Enum(en) => en.name.clone(),
        other => format!("{other:?}"),
    }
}
