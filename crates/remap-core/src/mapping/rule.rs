use super::plan::Step;
use super::Conversion;
use crate::projection::Projection;
use crate::shape::{GetFn, Getter, MemberId, Shape};
use crate::Result;

use by_address::ByAddress;
use std::fmt;

/// The compiled instruction producing one target member's value.
///
/// Rules compare structurally (kind, member identities, conversion plan);
/// opaque producer closures compare by address. This is what makes compiled
/// mappings comparable for the idempotence guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Straight copy, types already compatible
    Assign(RuleAssign),

    /// Copy through a conversion plan
    Convert(RuleConvert),

    /// Value produced by a user-supplied function
    Func(RuleFunc),

    /// Value produced by a read-only accessor path
    Access(RuleAccess),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleAssign {
    pub target: MemberId,
    pub source: MemberId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConvert {
    pub target: MemberId,
    pub source: MemberId,
    pub conversion: Conversion,
}

#[derive(Clone, PartialEq, Eq)]
pub struct RuleFunc {
    pub target: MemberId,
    pub producer: ByAddress<GetFn>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleAccess {
    pub target: MemberId,
    pub path: Projection,
}

impl Rule {
    /// The member this rule writes. Always writable; the compiler rejects
    /// rules against unwritable targets.
    pub fn target(&self) -> MemberId {
        match self {
            Self::Assign(rule) => rule.target,
            Self::Convert(rule) => rule.target,
            Self::Func(rule) => rule.target,
            Self::Access(rule) => rule.target,
        }
    }

    /// Renders the rule into an executable step, resolving accessors once so
    /// mapping calls pay no per-call member resolution.
    pub(crate) fn render(&self, source: &Shape, target: &Shape) -> Result<Step> {
        let set = target.member(self.target().index).setter()?;

        let (get, convert) = match self {
            Self::Assign(rule) => (source.member(rule.source.index).getter()?, None),
            Self::Convert(rule) => (
                source.member(rule.source.index).getter()?,
                Some(rule.conversion.clone()),
            ),
            Self::Func(rule) => (Getter::Fn(rule.producer.0.clone()), None),
            Self::Access(rule) => (Getter::Path(rule.path.clone()), None),
        };

        Ok(Step::new(get, convert, set))
    }
}

impl From<RuleAssign> for Rule {
    fn from(value: RuleAssign) -> Self {
        Self::Assign(value)
    }
}

impl From<RuleConvert> for Rule {
    fn from(value: RuleConvert) -> Self {
        Self::Convert(value)
    }
}

impl From<RuleFunc> for Rule {
    fn from(value: RuleFunc) -> Self {
        Self::Func(value)
    }
}

impl From<RuleAccess> for Rule {
    fn from(value: RuleAccess) -> Self {
        Self::Access(value)
    }
}

impl fmt::Debug for RuleFunc {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("RuleFunc")
            .field("target", &self.target)
            .field("producer", &"Fn(..)")
            .finish()
    }
}
