use crate::Mapper;
use remap_core::mapping::{CompiledMapping, MapConfig, MappingCache, NameMatch, NullablePolicy};
use remap_core::projection::Projection;
use remap_core::shape::{get_fn, Registry, ShapeId};
use remap_core::value::{Record, Value};
use remap_core::Result;

use std::sync::Arc;

/// Fluent configuration for one shape pair; `build` compiles (or resolves
/// from cache) the plan and freezes the configuration.
pub struct Builder<'a> {
    mapper: &'a Mapper,
    source: ShapeId,
    target: ShapeId,
    config: MapConfig,
}

impl<'a> Builder<'a> {
    pub(crate) fn new(mapper: &'a Mapper, source: ShapeId, target: ShapeId) -> Self {
        Self {
            mapper,
            source,
            target,
            config: MapConfig::new(),
        }
    }

    /// Emits no rule for the target member; its pre-existing value survives
    /// mapping untouched.
    pub fn ignore(mut self, target: &str) -> Self {
        self.config.ignore(target);
        self
    }

    /// Maps the target member from the named source member instead of
    /// matching by name.
    pub fn map_from(mut self, target: &str, source: &str) -> Self {
        self.config.map_from(target, source);
        self
    }

    /// Produces the target member's value with a custom function over the
    /// source record.
    pub fn map_with<F>(mut self, target: &str, producer: F) -> Self
    where
        F: Fn(&Record) -> Value + Send + Sync + 'static,
    {
        self.config.map_with(target, get_fn(producer));
        self
    }

    /// Produces the target member's value through a read-only accessor path
    /// into the source record.
    pub fn map_path(mut self, target: &str, path: impl Into<Projection>) -> Self {
        self.config.map_path(target, path);
        self
    }

    /// Excludes a source member from auto-matching.
    pub fn ignore_source(mut self, source: &str) -> Self {
        self.config.ignore_source(source);
        self
    }

    /// Removes any override for the target member.
    pub fn reset(mut self, target: &str) -> Self {
        self.config.reset(target);
        self
    }

    pub fn name_match(mut self, name_match: NameMatch) -> Self {
        self.config.name_match(name_match);
        self
    }

    pub fn nullable(mut self, policy: NullablePolicy) -> Self {
        self.config.nullable(policy);
        self
    }

    /// Compiles the mapping, surfacing configuration errors eagerly, and
    /// registers the plan in the process cache under this configuration's
    /// identity.
    pub fn build(self) -> Result<Mapping> {
        let registry = self.mapper.registry_handle();

        let plan = MappingCache::global().get_or_compile(
            registry.shape(self.source),
            registry.shape(self.target),
            &self.config,
        )?;

        Ok(Mapping { registry, plan })
    }
}

/// A frozen, reusable mapping for one (source shape, target shape, config)
/// triple. Cheap to clone; the plan is shared with the process cache.
#[derive(Clone, Debug)]
pub struct Mapping {
    registry: Arc<Registry>,
    plan: Arc<CompiledMapping>,
}

impl Mapping {
    /// Applies the mapping to an existing target record.
    pub fn apply(&self, source: &Record, target: &mut Record) -> Result<()> {
        self.plan.apply(source, target)
    }

    /// Default-constructs the target record and applies the mapping.
    pub fn apply_new(&self, source: &Record) -> Result<Record> {
        let mut target = self.registry.shape(self.plan.target()).new_record();
        self.apply(source, &mut target)?;
        Ok(target)
    }

    /// The underlying compiled plan.
    pub fn plan(&self) -> &Arc<CompiledMapping> {
        &self.plan
    }
}
