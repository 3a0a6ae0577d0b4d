//! Ordered rule table with first-match-wins dispatch.
//!
//! Each rule pairs a predicate ("is this rule applicable to the current
//! splits?") with a resolver ("given that it is, what is the verdict?").
//! Predicates are tested in registration order and the first match wins;
//! resolvers may therefore rely on every structural fact their predicate
//! checked, and on every earlier predicate having returned false.

use anyhow::{bail, Result};

use crate::cube::DataCube;
use crate::split::SplitSet;
use crate::verdict::{ColorEncoding, Verdict};

/// Guard over the current configuration shape.
pub type Predicate = Box<dyn Fn(&SplitSet, &DataCube) -> bool + Send + Sync>;

/// Action for a matched rule: normalize and score.
pub type Resolver =
    Box<dyn Fn(&SplitSet, &DataCube, Option<&ColorEncoding>, bool) -> Verdict + Send + Sync>;

struct Rule {
    predicate: Predicate,
    resolver: Resolver,
}

/// An ordered list of rules plus a mandatory fallback resolver.
///
/// Evaluation is a pure function of its inputs: no shared state, no I/O,
/// safe to call concurrently.
pub struct RuleTable {
    rules: Vec<Rule>,
    fallback: Resolver,
}

impl std::fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleTable")
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

impl RuleTable {
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder {
            rules: Vec::new(),
            fallback: None,
        }
    }

    /// Run the first matching rule's resolver, or the fallback if none match.
    pub fn evaluate(
        &self,
        splits: &SplitSet,
        cube: &DataCube,
        colors: Option<&ColorEncoding>,
        is_active: bool,
    ) -> Verdict {
        for (index, rule) in self.rules.iter().enumerate() {
            if (rule.predicate)(splits, cube) {
                tracing::debug!(rule = index, cube = %cube.name, "rule matched");
                return (rule.resolver)(splits, cube, colors, is_active);
            }
        }
        tracing::debug!(cube = %cube.name, "no rule matched, using fallback");
        (self.fallback)(splits, cube, colors, is_active)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

/// Accumulates `(predicate, resolver)` pairs in order. Build fails if no
/// `otherwise` fallback was registered.
pub struct RuleTableBuilder {
    rules: Vec<Rule>,
    fallback: Option<Resolver>,
}

impl RuleTableBuilder {
    /// Start a rule guarded by `predicate`; complete it with `then`.
    pub fn when<P>(self, predicate: P) -> PendingRule
    where
        P: Fn(&SplitSet, &DataCube) -> bool + Send + Sync + 'static,
    {
        PendingRule {
            builder: self,
            predicate: Box::new(predicate),
        }
    }

    /// Register the fallback resolver. It must always produce a `Manual` or
    /// `Never` verdict so that evaluation is total.
    pub fn otherwise<R>(mut self, resolver: R) -> Self
    where
        R: Fn(&SplitSet, &DataCube, Option<&ColorEncoding>, bool) -> Verdict
            + Send
            + Sync
            + 'static,
    {
        self.fallback = Some(Box::new(resolver));
        self
    }

    pub fn build(self) -> Result<RuleTable> {
        let Some(fallback) = self.fallback else {
            bail!("rule table built without an otherwise() fallback resolver");
        };
        Ok(RuleTable {
            rules: self.rules,
            fallback,
        })
    }
}

/// A rule whose predicate is set but whose resolver is still missing.
pub struct PendingRule {
    builder: RuleTableBuilder,
    predicate: Predicate,
}

impl PendingRule {
    pub fn then<R>(self, resolver: R) -> RuleTableBuilder
    where
        R: Fn(&SplitSet, &DataCube, Option<&ColorEncoding>, bool) -> Verdict
            + Send
            + Sync
            + 'static,
    {
        let mut builder = self.builder;
        builder.rules.push(Rule {
            predicate: self.predicate,
            resolver: Box::new(resolver),
        });
        builder
    }
}
