use crate::mapping;
use remap_core::mapping::{MapConfig, MappingCache};
use remap_core::shape::{Registry, ShapeId};
use remap_core::value::Record;
use remap_core::Result;

use std::sync::Arc;

/// The public mapping entry point, bound to a shape registry.
///
/// `Mapper` itself is stateless beyond the registry handle; compiled plans
/// live in the process-wide [`MappingCache`] and are shared across mappers.
#[derive(Clone)]
pub struct Mapper {
    registry: Arc<Registry>,
}

impl Mapper {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub(crate) fn registry_handle(&self) -> Arc<Registry> {
        self.registry.clone()
    }

    /// Copies members from `source` into `target` under the default,
    /// zero-configuration mapping: auto-match by exact name,
    /// `DefaultMapsToNull`.
    ///
    /// `target` may be partially written when a conversion fails part-way
    /// through; callers must not assume atomicity.
    pub fn map(&self, source: &Record, target: &mut Record) -> Result<()> {
        let plan = MappingCache::global().get_or_compile(
            self.registry.shape(source.shape()),
            self.registry.shape(target.shape()),
            MapConfig::shared_default(),
        )?;

        plan.apply(source, target)
    }

    /// Default-constructs a `target_shape` record and maps `source` into it.
    pub fn map_new(&self, source: &Record, target_shape: ShapeId) -> Result<Record> {
        let mut target = self.registry.shape(target_shape).new_record();
        self.map(source, &mut target)?;
        Ok(target)
    }

    /// Starts a configured mapping between two shapes.
    pub fn mapping(&self, source: ShapeId, target: ShapeId) -> mapping::Builder<'_> {
        mapping::Builder::new(self, source, target)
    }
}
