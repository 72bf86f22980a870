use super::{Conversion, Rule};
use crate::shape::{Getter, Setter, ShapeId};
use crate::value::Record;
use crate::Result;

/// The full ordered rule set for one (source shape, target shape, config)
/// triple, with accessors resolved once at compile time.
///
/// Owned by the cache entry that produced it; shared read-only by every call
/// site that resolves that entry. Immutable once built.
#[derive(Debug)]
pub struct CompiledMapping {
    source: ShapeId,
    target: ShapeId,

    /// One rule per mapped target member, in target declaration order
    rules: Vec<Rule>,

    /// The rules rendered into executable steps, index-aligned with `rules`
    steps: Vec<Step>,
}

impl CompiledMapping {
    pub(crate) fn new(source: ShapeId, target: ShapeId, rules: Vec<Rule>, steps: Vec<Step>) -> Self {
        debug_assert_eq!(rules.len(), steps.len());
        Self {
            source,
            target,
            rules,
            steps,
        }
    }

    pub fn source(&self) -> ShapeId {
        self.source
    }

    pub fn target(&self) -> ShapeId {
        self.target
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Executes every step in target-member order, writing into `target`.
    ///
    /// Never mutates `source`. Not atomic: a failing step leaves the writes
    /// of earlier steps in place, and the caller sees the error.
    pub fn apply(&self, source: &Record, target: &mut Record) -> Result<()> {
        for step in &self.steps {
            step.execute(source, target)?;
        }

        Ok(())
    }
}

// Behavioral identity: same shape pair and same rule sequence. The rendered
// steps are derived from the rules and do not participate.
impl PartialEq for CompiledMapping {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target && self.rules == other.rules
    }
}

/// One rule rendered into its executable form: read, convert, write.
#[derive(Debug, Clone)]
pub(crate) struct Step {
    get: Getter,
    convert: Option<Conversion>,
    set: Setter,
}

impl Step {
    pub(crate) fn new(get: Getter, convert: Option<Conversion>, set: Setter) -> Self {
        Self { get, convert, set }
    }

    fn execute(&self, source: &Record, target: &mut Record) -> Result<()> {
        let mut value = self.get.read(source)?;

        if let Some(conversion) = &self.convert {
            value = conversion.apply(value)?;
        }

        self.set.write(target, value)
    }
}
