use super::{compile, CompiledMapping, ConfigId, MapConfig};
use crate::shape::{Shape, ShapeId};
use crate::Result;

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

type CacheKey = (ShapeId, ShapeId, ConfigId);

/// Process-wide cache of compiled mappings, keyed by (source shape, target
/// shape, config identity).
///
/// Starts empty, fills lazily, never evicts. Concurrent first users of a key
/// may race to compile the same plan; compilation is pure, so the loser's
/// work is discarded and every caller converges on a single shared instance.
pub struct MappingCache {
    mappings: RwLock<HashMap<CacheKey, Arc<CompiledMapping>>>,
}

static CACHE: OnceLock<MappingCache> = OnceLock::new();

impl MappingCache {
    fn new() -> Self {
        Self {
            mappings: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide cache instance.
    pub fn global() -> &'static MappingCache {
        CACHE.get_or_init(MappingCache::new)
    }

    /// Returns the cached plan for the key, compiling it on first use.
    ///
    /// A failed compilation caches nothing; retrying the same configuration
    /// re-raises the same error.
    pub fn get_or_compile(
        &self,
        source: &Shape,
        target: &Shape,
        config: &MapConfig,
    ) -> Result<Arc<CompiledMapping>> {
        let key = (source.id, target.id, config.id());

        if let Some(mapping) = self.mappings.read().unwrap().get(&key) {
            log::trace!("mapping cache hit for {key:?}");
            return Ok(mapping.clone());
        }

        // Compile outside the lock; the insert below converges racing
        // compilers on one instance.
        let compiled = Arc::new(compile(source, target, config)?);

        let mut mappings = self.mappings.write().unwrap();
        Ok(mappings.entry(key).or_insert(compiled).clone())
    }

    pub fn len(&self) -> usize {
        self.mappings.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
