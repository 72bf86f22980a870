pub mod error;
pub use error::Error;

pub mod mapping;

pub mod projection;
pub use projection::Projection;

pub mod shape;
pub use shape::{Member, MemberId, Registry, Shape, ShapeId};

pub mod ty;
pub use ty::{EnumType, Type};

pub mod value;
pub use value::{Record, Value, ValueEnum};

/// A Result type alias that uses Remap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
