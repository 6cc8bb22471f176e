use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::EvalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Relevance,
    Originality,
    Effort,
    Clarity,
    Consistency,
    GrammarQuality,
}

impl Criterion {
    pub const ALL: [Criterion; 6] = [
        Criterion::Relevance,
        Criterion::Originality,
        Criterion::Effort,
        Criterion::Clarity,
        Criterion::Consistency,
        Criterion::GrammarQuality,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::Relevance => "relevance",
            Criterion::Originality => "originality",
            Criterion::Effort => "effort",
            Criterion::Clarity => "clarity",
            Criterion::Consistency => "consistency",
            Criterion::GrammarQuality => "grammar_quality",
        }
    }

    /// "grammar_quality" -> "Grammar Quality"
    pub fn title(self) -> String {
        self.as_str()
            .split('_')
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criterion::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| EvalError::UndefinedCriterion(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Indicator {
    pub name: &'static str,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct CriterionDef {
    pub criterion: Criterion,
    pub weight: f64,
    /// Sub-weights for sub-score A and sub-score B, summing to 1.0.
    pub indicators: [Indicator; 2],
    pub feedback: &'static str,
}

const BUILTIN_CRITERIA: &[CriterionDef] = &[
    CriterionDef {
        criterion: Criterion::Relevance,
        weight: 1.0,
        indicators: [
            Indicator {
                name: "topic_focus",
                weight: 0.4,
            },
            Indicator {
                name: "personal_connection",
                weight: 0.6,
            },
        ],
        feedback: "The content effectively connects personal experiences with the topic.",
    },
    CriterionDef {
        criterion: Criterion::Originality,
        weight: 1.2,
        indicators: [
            Indicator {
                name: "unique_perspective",
                weight: 0.5,
            },
            Indicator {
                name: "creative_expression",
                weight: 0.5,
            },
        ],
        feedback: "The content presents a unique personal perspective with creative expression.",
    },
    CriterionDef {
        criterion: Criterion::Effort,
        weight: 0.8,
        indicators: [
            Indicator {
                name: "detail_level",
                weight: 0.4,
            },
            Indicator {
                name: "emotional_depth",
                weight: 0.6,
            },
        ],
        feedback: "The content demonstrates thoughtful detail and emotional depth.",
    },
    CriterionDef {
        criterion: Criterion::Clarity,
        weight: 1.0,
        indicators: [
            Indicator {
                name: "sentence_structure",
                weight: 0.4,
            },
            Indicator {
                name: "flow",
                weight: 0.6,
            },
        ],
        feedback: "The writing flows naturally with good sentence structure.",
    },
    CriterionDef {
        criterion: Criterion::Consistency,
        weight: 0.9,
        indicators: [
            Indicator {
                name: "theme_consistency",
                weight: 0.5,
            },
            Indicator {
                name: "tone_consistency",
                weight: 0.5,
            },
        ],
        feedback: "The content maintains a consistent theme and emotional tone.",
    },
    CriterionDef {
        criterion: Criterion::GrammarQuality,
        weight: 0.7,
        indicators: [
            Indicator {
                name: "basic_grammar",
                weight: 0.4,
            },
            Indicator {
                name: "style",
                weight: 0.6,
            },
        ],
        feedback: "The writing style is natural and engaging.",
    },
];

pub fn builtin_criteria() -> &'static [CriterionDef] {
    BUILTIN_CRITERIA
}

pub fn find_criterion(
    table: &[CriterionDef],
    criterion: Criterion,
) -> Result<&CriterionDef, EvalError> {
    table
        .iter()
        .find(|def| def.criterion == criterion)
        .ok_or_else(|| EvalError::UndefinedCriterion(criterion.as_str().to_string()))
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/criteria.rs"]
mod tests;
