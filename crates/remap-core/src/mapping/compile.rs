use super::{
    CompiledMapping, Conversion, MapConfig, Override, Rule, RuleAccess, RuleAssign, RuleConvert,
    RuleFunc,
};
use crate::shape::{Member, Shape};
use crate::{err, Error, Result};

/// Compiles a mapping plan for a shape pair under a configuration.
///
/// Walks target members in declaration order and emits at most one rule per
/// member. Side-effect-free and idempotent: the same inputs always produce a
/// structurally equal plan, which is what lets the cache retry a failed
/// compilation deterministically.
pub fn compile(source: &Shape, target: &Shape, config: &MapConfig) -> Result<CompiledMapping> {
    let mut rules = Vec::with_capacity(target.members.len());

    for member in &target.members {
        let rule = match config.override_for(&member.name) {
            Some(Override::Ignore) => continue,
            Some(Override::Func(producer)) => {
                writable(member)?;
                RuleFunc {
                    target: member.id,
                    producer: producer.clone(),
                }
                .into()
            }
            Some(Override::Access(path)) => {
                writable(member)?;
                RuleAccess {
                    target: member.id,
                    path: path.clone(),
                }
                .into()
            }
            Some(Override::Source(name)) => {
                writable(member)?;
                // An explicit override bypasses the ignored-source set
                let source_member = match_source(source, name, config, false).ok_or_else(|| {
                    Error::configuration(format!(
                        "source shape `{}` has no member `{}`",
                        source.name, name
                    ))
                })?;
                member_rule(source_member, member, config)?
            }
            None => {
                if !member.can_write() {
                    continue;
                }
                let Some(source_member) = match_source(source, &member.name, config, true) else {
                    // No same-named source member; the target member stays
                    // unmapped rather than failing
                    continue;
                };
                member_rule(source_member, member, config)?
            }
        };

        rules.push(rule);
    }

    verify_overrides(target, config)?;

    let steps = rules
        .iter()
        .map(|rule| rule.render(source, target))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "compiled mapping {} -> {} ({} rules)",
        source.name,
        target.name,
        rules.len()
    );

    Ok(CompiledMapping::new(source.id, target.id, rules, steps))
}

/// First readable source member matching `name` under the configured
/// comparer, in source declaration order. A loose comparer can match several
/// members; the first one wins.
fn match_source<'a>(
    source: &'a Shape,
    name: &str,
    config: &MapConfig,
    honor_ignored: bool,
) -> Option<&'a Member> {
    source.members.iter().find(|member| {
        member.can_read()
            && !(honor_ignored && config.is_source_ignored(&member.name))
            && config.comparer().matches(&member.name, name)
    })
}

fn member_rule(source_member: &Member, target_member: &Member, config: &MapConfig) -> Result<Rule> {
    if target_member.ty.is_assignable_from(&source_member.ty) {
        return Ok(RuleAssign {
            target: target_member.id,
            source: source_member.id,
        }
        .into());
    }

    let conversion = Conversion::resolve(
        &source_member.ty,
        &target_member.ty,
        config.nullable_policy(),
    )
    .map_err(|err| {
        err.context(err!(
            "cannot map member `{}` from `{}`",
            target_member.name,
            source_member.name
        ))
    })?;

    Ok(RuleConvert {
        target: target_member.id,
        source: source_member.id,
        conversion,
    }
    .into())
}

fn writable(member: &Member) -> Result<()> {
    if member.can_write() {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "target member `{}` is not writable",
            member.name
        )))
    }
}

/// Every override must name a real target member; a typo in a configured
/// name would otherwise go silently unused.
fn verify_overrides(target: &Shape, config: &MapConfig) -> Result<()> {
    for (name, _) in config.overrides() {
        let known = target
            .members
            .iter()
            .any(|member| config.comparer().matches(&member.name, name));

        if !known {
            return Err(Error::configuration(format!(
                "target shape `{}` has no member `{}`",
                target.name, name
            )));
        }
    }

    Ok(())
}
