use super::{Builder, Shape, ShapeId};
use indexmap::IndexMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// An ordered collection of shapes: the member-enumeration surface the
/// mapping engine compiles against.
///
/// Built up front, then frozen behind an `Arc` and shared; lookups at mapping
/// time are read-only.
#[derive(Debug, Default)]
pub struct Registry {
    shapes: IndexMap<ShapeId, Shape>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a shape, assigning its identifier and its members'
    /// identifiers.
    ///
    /// Identifiers are process-unique, not registry-unique: the compiled
    /// mapping cache is process-wide and keys on them.
    pub fn register(&mut self, builder: Builder) -> ShapeId {
        static NEXT: AtomicUsize = AtomicUsize::new(0);

        let id = ShapeId(NEXT.fetch_add(1, Ordering::Relaxed));
        self.shapes.insert(id, builder.build(id));
        id
    }

    /// Returns the shape with the specified id.
    ///
    /// # Panics
    ///
    /// Panics if the shape ID does not exist in the registry.
    #[track_caller]
    pub fn shape(&self, id: impl Into<ShapeId>) -> &Shape {
        self.shapes.get(&id.into()).expect("invalid shape ID")
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
