//! Shared shapes for integration tests.

use remap::{EnumType, Mapper, Record, Registry, Shape, ShapeId, Type, Value};
use std::sync::Arc;

pub fn color() -> EnumType {
    EnumType::new("Color", ["Red", "Green", "Blue"])
}

/// A registry with the dummy shapes most tests exercise.
pub struct World {
    pub registry: Arc<Registry>,
    pub mapper: Mapper,

    /// `{ ID: i32, Value: string }`
    pub dummy1: ShapeId,

    /// Same layout as `dummy1`
    pub dummy2: ShapeId,

    /// `{ ID: i32, Extra: string }`
    pub dummy3: ShapeId,
}

impl World {
    pub fn new() -> Self {
        let mut registry = Registry::new();

        let dummy1 = registry.register(
            Shape::builder("Dummy1")
                .member("ID", Type::I32)
                .member("Value", Type::String),
        );
        let dummy2 = registry.register(
            Shape::builder("Dummy2")
                .member("ID", Type::I32)
                .member("Value", Type::String),
        );
        let dummy3 = registry.register(
            Shape::builder("Dummy3")
                .member("ID", Type::I32)
                .member("Extra", Type::String),
        );

        let registry = Arc::new(registry);
        let mapper = Mapper::new(registry.clone());

        Self {
            registry,
            mapper,
            dummy1,
            dummy2,
            dummy3,
        }
    }

    pub fn record(&self, shape: ShapeId, fields: Vec<Value>) -> Record {
        Record::new(shape, fields)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Registers a pair of single-member shapes and returns a mapper over them.
/// Handy for conversion tests that only care about one slot.
pub fn single_member_pair(
    member: &str,
    source_ty: Type,
    target_ty: Type,
) -> (Mapper, ShapeId, ShapeId) {
    let mut registry = Registry::new();
    let source = registry.register(Shape::builder("Source").member(member, source_ty));
    let target = registry.register(Shape::builder("Target").member(member, target_ty));

    let registry = Arc::new(registry);
    (Mapper::new(registry), source, target)
}
