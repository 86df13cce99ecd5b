//! Transformation rules: file-match patterns and ordered loader pipelines.
//!
//! A rule associates a file-extension pattern with the named transformation
//! steps the external bundler chains over matching modules. Step order is a
//! contract: the engine applies the pipeline from the last registered step to
//! the first, so the assembler only ever appends.

use std::path::PathBuf;

use regex::Regex;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// File-match pattern for a transformation rule.
///
/// Serialized as an anchored regex string, which is the shape the external
/// engine consumes (e.g. `\.(sa|sc|c)ss$`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchPattern {
    /// Matches any of the given file extensions.
    Extensions(Vec<String>),
    /// A caller-supplied regex, validated at construction.
    Raw(String),
}

impl MatchPattern {
    /// Pattern matching a single file extension (no leading dot).
    pub fn extension(ext: impl Into<String>) -> Self {
        MatchPattern::Extensions(vec![ext.into()])
    }

    /// Pattern matching any of the given file extensions.
    pub fn extensions<I, S>(exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MatchPattern::Extensions(exts.into_iter().map(Into::into).collect())
    }

    /// A raw regex pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the pattern does not parse
    /// as a regex. Malformed patterns fail here, at registration time, not at
    /// finalize time.
    pub fn raw(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        Regex::new(&pattern).map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;
        Ok(MatchPattern::Raw(pattern))
    }

    /// The regex string handed to the external engine.
    pub fn as_regex_str(&self) -> String {
        match self {
            MatchPattern::Extensions(exts) => {
                let escaped: Vec<String> = exts.iter().map(|e| regex::escape(e)).collect();
                match escaped.as_slice() {
                    [single] => format!(r"\.{}$", single),
                    many => format!(r"\.({})$", many.join("|")),
                }
            }
            MatchPattern::Raw(pattern) => pattern.clone(),
        }
    }
}

impl Serialize for MatchPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_regex_str())
    }
}

impl<'de> Deserialize<'de> for MatchPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let pattern = String::deserialize(deserializer)?;
        MatchPattern::raw(pattern).map_err(de::Error::custom)
    }
}

/// One named transformation step inside a rule's pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderStep {
    /// Step name, unique within its rule (e.g. "babel", "css").
    pub name: String,

    /// External loader reference the engine resolves (e.g. "babel-loader").
    pub loader: String,

    /// Loader-specific options forwarded verbatim to the engine.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl LoaderStep {
    pub fn new(name: impl Into<String>, loader: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            loader: loader.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }
}

/// A transformation rule: pattern, path filters, ordered steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// File-match pattern.
    pub test: MatchPattern,

    /// Only files under these directories match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<PathBuf>,

    /// Files matching any of these patterns are skipped.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Ordered pipeline; the engine applies steps last-registered-first.
    #[serde(rename = "use", default)]
    pub steps: Vec<LoaderStep>,
}

impl Rule {
    pub fn new(test: MatchPattern) -> Self {
        Self {
            test,
            include: Vec::new(),
            exclude: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Restrict the rule to files under `dir`.
    pub fn include(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include.push(dir.into());
        self
    }

    /// Skip files matching `pattern`.
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    /// Append a step to the pipeline.
    pub fn step(mut self, step: LoaderStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Merge another registration of the same rule into this one.
    ///
    /// Steps are appended in registration order; the original pattern and
    /// filters win. Appending (never prepending) is what lets later
    /// registrations extend a pipeline without disturbing the engine's
    /// last-registered-first application order.
    pub(crate) fn merge(&mut self, other: Rule) {
        self.steps.extend(other.steps);
        for dir in other.include {
            if !self.include.contains(&dir) {
                self.include.push(dir);
            }
        }
        for pattern in other.exclude {
            if !self.exclude.contains(&pattern) {
                self.exclude.push(pattern);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_extension_renders_anchored_regex() {
        assert_eq!(MatchPattern::extension("js").as_regex_str(), r"\.js$");
    }

    #[test]
    fn extension_set_renders_alternation() {
        let pattern = MatchPattern::extensions(["png", "jpg", "jpeg", "gif"]);
        assert_eq!(pattern.as_regex_str(), r"\.(png|jpg|jpeg|gif)$");
    }

    #[test]
    fn raw_pattern_is_validated() {
        assert!(MatchPattern::raw(r"\.(sa|sc|c)ss$").is_ok());
        let err = MatchPattern::raw(r"\.(sa|sc").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }

    #[test]
    fn merge_appends_steps_in_order() {
        let mut rule = Rule::new(MatchPattern::raw(r"\.(sa|sc|c)ss$").unwrap())
            .step(LoaderStep::new("style", "style-loader"));
        rule.merge(
            Rule::new(MatchPattern::raw(r"\.(sa|sc|c)ss$").unwrap())
                .step(LoaderStep::new("css", "css-loader"))
                .step(LoaderStep::new("postcss", "postcss-loader")),
        );

        let names: Vec<&str> = rule.steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["style", "css", "postcss"]);
    }

    #[test]
    fn rule_serializes_to_webpack_shape() {
        let rule = Rule::new(MatchPattern::extension("js"))
            .include("src")
            .exclude("node_modules")
            .step(LoaderStep::new("babel", "babel-loader").with_options(json!({
                "presets": ["@babel/preset-env"]
            })));

        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["test"], json!(r"\.js$"));
        assert_eq!(value["use"][0]["loader"], json!("babel-loader"));
        assert_eq!(value["use"][0]["options"]["presets"][0], json!("@babel/preset-env"));
    }
}
