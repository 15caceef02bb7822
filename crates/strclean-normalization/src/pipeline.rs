//! Ordered step sequences.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::step::{CaseTarget, Step};

static RECOMMENDED: LazyLock<Pipeline> = LazyLock::new(Pipeline::recommended);

/// An ordered, immutable sequence of [`Step`]s.
///
/// Steps run first to last. Composition concatenates step lists and never
/// reorders or deduplicates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// `normalize_unicode → trim → collapse_whitespace → strip_punctuation
    /// → fold_case(lower)`.
    pub fn recommended() -> Self {
        Self::new([
            Step::normalize_unicode(),
            Step::Trim,
            Step::CollapseWhitespace,
            Step::strip_punctuation(),
            Step::fold_case(CaseTarget::Lower),
        ])
    }

    /// Parse a pipeline from JSON of the form `{"steps": [...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let pipeline: Self = serde_json::from_str(json)?;
        tracing::debug!(steps = ?pipeline.step_names(), "Loaded pipeline");
        Ok(pipeline)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(Step::name).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// This pipeline followed by `next`.
    #[must_use]
    pub fn then(&self, next: &Pipeline) -> Self {
        Self::new(self.steps.iter().chain(&next.steps).cloned())
    }

    /// This pipeline followed by one more step.
    #[must_use]
    pub fn with_step(&self, step: Step) -> Self {
        Self::new(self.steps.iter().cloned().chain([step]))
    }

    /// Run every step in order. Total: never fails on string input.
    pub fn apply(&self, input: &str) -> String {
        self.steps
            .iter()
            .fold(input.to_string(), |acc, step| step.apply(&acc))
    }
}

/// Concatenate two pipelines, `first`'s steps before `second`'s.
pub fn compose(first: &Pipeline, second: &Pipeline) -> Pipeline {
    first.then(second)
}

/// Normalize with the recommended pipeline.
///
/// ```
/// use strclean_normalization::normalize;
///
/// assert_eq!(normalize("  a   b  "), "a b");
/// ```
pub fn normalize(input: &str) -> String {
    RECOMMENDED.apply(input)
}

pub fn normalize_with(input: &str, pipeline: &Pipeline) -> String {
    pipeline.apply(input)
}
