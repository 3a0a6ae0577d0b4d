// Resolution outputs: the verdict union and the adjustment values it carries.

use serde::{Deserialize, Serialize};

use crate::split::SplitSet;

/// Color each series by the top-K values of one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorEncoding {
    pub dimension: String,
    pub limit: u32,
}

impl ColorEncoding {
    pub fn from_limit(dimension: impl Into<String>, limit: u32) -> Self {
        ColorEncoding {
            dimension: dimension.into(),
            limit,
        }
    }
}

/// A proposed replacement configuration: new splits, and optionally a new
/// color encoding (None drops any existing encoding).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub splits: SplitSet,
    pub colors: Option<ColorEncoding>,
}

impl Adjustment {
    pub fn splits_only(splits: SplitSet) -> Self {
        Adjustment {
            splits,
            colors: None,
        }
    }

    pub fn with_colors(splits: SplitSet, colors: ColorEncoding) -> Self {
        Adjustment {
            splits,
            colors: Some(colors),
        }
    }
}

/// A user-facing fix: a description and the full configuration it applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub description: String,
    pub adjustment: Adjustment,
}

impl Suggestion {
    pub fn new(description: impl Into<String>, adjustment: Adjustment) -> Self {
        Suggestion {
            description: description.into(),
            adjustment,
        }
    }
}

/// The engine's classification of one configuration for one visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Verdict {
    /// Usable unchanged.
    Ready { score: u32 },
    /// Usable after applying `adjustment`, no user confirmation needed.
    Automatic { score: u32, adjustment: Adjustment },
    /// Cannot render as-is; present the message and suggestions to the user.
    Manual {
        score: u32,
        message: String,
        suggestions: Vec<Suggestion>,
    },
    /// Fundamentally inapplicable to this cube.
    Never,
}

impl Verdict {
    pub fn ready(score: u32) -> Self {
        Verdict::Ready { score }
    }

    pub fn automatic(score: u32, adjustment: Adjustment) -> Self {
        Verdict::Automatic { score, adjustment }
    }

    pub fn manual(score: u32, message: impl Into<String>, suggestions: Vec<Suggestion>) -> Self {
        Verdict::Manual {
            score,
            message: message.into(),
            suggestions,
        }
    }

    /// The suitability score; `Never` scores zero.
    pub fn score(&self) -> u32 {
        match self {
            Verdict::Ready { score } => *score,
            Verdict::Automatic { score, .. } => *score,
            Verdict::Manual { score, .. } => *score,
            Verdict::Never => 0,
        }
    }

    /// True for `Ready` and `Automatic`: the configuration can render without
    /// user intervention.
    pub fn is_renderable(&self) -> bool {
        matches!(self, Verdict::Ready { .. } | Verdict::Automatic { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::{Split, SplitSet};

    #[test]
    fn test_score_accessor() {
        assert_eq!(Verdict::ready(10).score(), 10);
        assert_eq!(Verdict::Never.score(), 0);
        let manual = Verdict::manual(3, "nope", vec![]);
        assert_eq!(manual.score(), 3);
        assert!(!manual.is_renderable());
    }

    #[test]
    fn test_verdict_serializes_with_state_tag() {
        let verdict = Verdict::automatic(
            8,
            Adjustment::with_colors(
                SplitSet::of(Split::from_expression("$time")),
                ColorEncoding::from_limit("channel", 5),
            ),
        );
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["state"], "automatic");
        assert_eq!(json["score"], 8);
        assert_eq!(json["adjustment"]["colors"]["limit"], 5);
    }
}
