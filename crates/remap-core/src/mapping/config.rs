use crate::projection::Projection;
use crate::shape::GetFn;

use by_address::ByAddress;
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

/// Policy for values crossing between nullable and non-nullable
/// representations of the same underlying type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullablePolicy {
    /// A non-nullable zero value maps to absent on a nullable target
    #[default]
    DefaultMapsToNull,

    /// The zero value stays present on the target
    AssignDefaultAsIs,

    /// Any nullable/non-nullable pairing fails at compile time
    Error,
}

/// How member names are compared when matching source to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameMatch {
    #[default]
    Exact,
    IgnoreCase,
}

impl NameMatch {
    pub fn matches(&self, a: &str, b: &str) -> bool {
        match self {
            Self::Exact => a == b,
            Self::IgnoreCase => a.eq_ignore_ascii_case(b),
        }
    }
}

/// Identifies one configuration instance. Two configs never share an id;
/// the compiled-mapping cache is keyed on it, so independent configs for the
/// same shape pair produce independent cache entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigId(u64);

impl ConfigId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Per-target-member override collected before compilation.
#[derive(Clone)]
pub enum Override {
    /// Emit no rule; the target member keeps its pre-existing value
    Ignore,

    /// Map from the named source member instead of matching by name
    Source(String),

    /// Produce the value with a user-supplied function
    Func(ByAddress<GetFn>),

    /// Produce the value through a read-only accessor path
    Access(Projection),
}

/// Mutable mapping configuration, collected before compilation.
///
/// Consumed by the compiler and logically frozen from then on; the cache
/// holds the compiled plan under this config's identity. Not `Clone`: a copy
/// would share the cache identity.
#[derive(Debug)]
pub struct MapConfig {
    id: ConfigId,

    /// Overrides keyed by target member name
    overrides: IndexMap<String, Override>,

    /// Source members excluded from auto-matching
    ignored_sources: IndexSet<String>,

    name_match: NameMatch,

    nullable: NullablePolicy,
}

impl MapConfig {
    pub fn new() -> Self {
        Self {
            id: ConfigId::next(),
            overrides: IndexMap::new(),
            ignored_sources: IndexSet::new(),
            name_match: NameMatch::default(),
            nullable: NullablePolicy::default(),
        }
    }

    /// The process-wide default configuration backing zero-configuration
    /// mapping: auto-match by exact name, `DefaultMapsToNull`.
    pub fn shared_default() -> &'static MapConfig {
        static DEFAULT: OnceLock<MapConfig> = OnceLock::new();
        DEFAULT.get_or_init(MapConfig::new)
    }

    pub fn id(&self) -> ConfigId {
        self.id
    }

    pub fn ignore(&mut self, target: impl Into<String>) -> &mut Self {
        self.overrides.insert(target.into(), Override::Ignore);
        self
    }

    pub fn map_from(&mut self, target: impl Into<String>, source: impl Into<String>) -> &mut Self {
        self.overrides
            .insert(target.into(), Override::Source(source.into()));
        self
    }

    pub fn map_with(&mut self, target: impl Into<String>, producer: GetFn) -> &mut Self {
        self.overrides
            .insert(target.into(), Override::Func(ByAddress(producer)));
        self
    }

    pub fn map_path(&mut self, target: impl Into<String>, path: impl Into<Projection>) -> &mut Self {
        self.overrides
            .insert(target.into(), Override::Access(path.into()));
        self
    }

    /// Removes any override for the target member, returning it to default
    /// matching.
    pub fn reset(&mut self, target: &str) -> &mut Self {
        self.overrides.shift_remove(target);
        self
    }

    pub fn ignore_source(&mut self, source: impl Into<String>) -> &mut Self {
        self.ignored_sources.insert(source.into());
        self
    }

    pub fn name_match(&mut self, name_match: NameMatch) -> &mut Self {
        self.name_match = name_match;
        self
    }

    pub fn nullable(&mut self, policy: NullablePolicy) -> &mut Self {
        self.nullable = policy;
        self
    }

    pub fn override_for(&self, target: &str) -> Option<&Override> {
        self.overrides
            .iter()
            .find(|(name, _)| self.name_match.matches(name, target))
            .map(|(_, o)| o)
    }

    pub fn overrides(&self) -> impl Iterator<Item = (&str, &Override)> {
        self.overrides.iter().map(|(name, o)| (name.as_str(), o))
    }

    pub fn is_source_ignored(&self, source: &str) -> bool {
        self.ignored_sources
            .iter()
            .any(|name| self.name_match.matches(name, source))
    }

    pub fn comparer(&self) -> NameMatch {
        self.name_match
    }

    pub fn nullable_policy(&self) -> NullablePolicy {
        self.nullable
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Override {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => fmt.write_str("Ignore"),
            Self::Source(name) => fmt.debug_tuple("Source").field(name).finish(),
            Self::Func(_) => fmt.write_str("Func(..)"),
            Self::Access(path) => fmt.debug_tuple("Access").field(path).finish(),
        }
    }
}
