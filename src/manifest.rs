// A manifest binds a visualization type to its resolution rules.

use anyhow::Result;

use crate::cube::DataCube;
use crate::line_chart::{line_chart_rules, line_chart_rules_with, ScoreWeights};
use crate::rules::RuleTable;
use crate::split::SplitSet;
use crate::verdict::{ColorEncoding, Verdict};

/// One visualization type: a stable id, a display title, and the rule table
/// that decides whether it can render a given configuration.
pub struct Manifest {
    pub id: &'static str,
    pub title: &'static str,
    rules: RuleTable,
}

impl Manifest {
    pub fn new(id: &'static str, title: &'static str, rules: RuleTable) -> Self {
        Manifest { id, title, rules }
    }

    /// The line chart, with default scoring.
    pub fn line_chart() -> Result<Self> {
        Ok(Manifest::new("line-chart", "Line Chart", line_chart_rules()?))
    }

    /// The line chart with custom scoring weights.
    pub fn line_chart_with(weights: ScoreWeights) -> Result<Self> {
        Ok(Manifest::new(
            "line-chart",
            "Line Chart",
            line_chart_rules_with(weights)?,
        ))
    }

    pub fn evaluate(
        &self,
        splits: &SplitSet,
        cube: &DataCube,
        colors: Option<&ColorEncoding>,
        is_active: bool,
    ) -> Verdict {
        self.rules.evaluate(splits, cube, colors, is_active)
    }
}
