mod cache;
pub use cache::MappingCache;

mod compile;
pub use compile::compile;

mod config;
pub use config::{ConfigId, MapConfig, NameMatch, NullablePolicy, Override};

mod convert;
pub use convert::{Cast, Conversion, ParseEnum, Stringify, Unwrap, Wrap};

mod plan;
pub use plan::CompiledMapping;

mod rule;
pub use rule::{Rule, RuleAccess, RuleAssign, RuleConvert, RuleFunc};
