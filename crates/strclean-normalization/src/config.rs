//! Named pipelines loaded from configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::pipeline::Pipeline;

/// Name under which the recommended pipeline is always available.
pub const DEFAULT_PIPELINE: &str = "default";

/// A set of named pipelines.
///
/// JSON form:
///
/// ```json
/// {
///   "pipelines": {
///     "labels": { "steps": [{ "step": "trim" }, { "step": "collapse_whitespace" }] },
///     "keys":   { "steps": [{ "step": "fold_case", "target": "upper" }] }
///   }
/// }
/// ```
///
/// `"default"` resolves to [`Pipeline::recommended`] unless the
/// configuration overrides it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationConfig {
    #[serde(default)]
    pipelines: BTreeMap<String, Pipeline>,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizationConfig {
    /// Configuration holding only the `"default"` pipeline.
    pub fn new() -> Self {
        let mut pipelines = BTreeMap::new();
        pipelines.insert(DEFAULT_PIPELINE.to_string(), Pipeline::recommended());
        Self { pipelines }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config
            .pipelines
            .entry(DEFAULT_PIPELINE.to_string())
            .or_insert_with(Pipeline::recommended);
        tracing::debug!(
            pipelines = ?config.names().collect::<Vec<_>>(),
            "Loaded normalization config"
        );
        Ok(config)
    }

    /// Register (or replace) a named pipeline.
    #[must_use]
    pub fn with_pipeline(mut self, name: impl Into<String>, pipeline: Pipeline) -> Self {
        self.pipelines.insert(name.into(), pipeline);
        self
    }

    pub fn pipeline(&self, name: &str) -> Result<&Pipeline> {
        self.pipelines
            .get(name)
            .ok_or_else(|| ConfigError::UnknownPipeline {
                name: name.to_string(),
            })
    }

    /// Pipeline names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pipelines.keys().map(String::as_str)
    }
}
