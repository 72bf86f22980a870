mod mapper;
pub use mapper::Mapper;

pub mod mapping;
pub use mapping::Mapping;

pub use remap_core::{
    mapping::{CompiledMapping, MapConfig, MappingCache, NameMatch, NullablePolicy},
    projection::Projection,
    shape::{get_fn, set_fn, GetFn, Member, MemberId, Registry, SetFn, Shape, ShapeId},
    ty::{EnumType, Type},
    value::{Record, Value, ValueEnum},
    Error, Result,
};
