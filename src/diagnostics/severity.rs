//! Classification types shared by all diagnostic checks.

use serde::Serialize;

/// Health-check outcome classification.
///
/// Ordered so that reports can aggregate "worst of" with [`Ord::max`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Severity::Ok => "ok",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

/// A presentation-agnostic recommendation message.
///
/// Holds a static template with `:name` placeholders plus the substitution
/// values, so a localizing presentation layer can translate the template and
/// substitute itself. [`Message::render`] gives the plain-English fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    template: &'static str,
    args: Vec<(&'static str, String)>,
}

impl Message {
    /// Create a message from a template with no substitutions.
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            args: Vec::new(),
        }
    }

    /// Add a substitution value for a `:name` placeholder.
    pub fn arg(mut self, placeholder: &'static str, value: impl ToString) -> Self {
        self.args.push((placeholder, value.to_string()));
        self
    }

    /// The raw template, placeholders included.
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Substitution pairs in insertion order.
    pub fn args(&self) -> &[(&'static str, String)] {
        &self.args
    }

    /// Look up a substitution value by placeholder.
    pub fn value_of(&self, placeholder: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(name, _)| *name == placeholder)
            .map(|(_, value)| value.as_str())
    }

    /// Substitute all placeholders into the template.
    pub fn render(&self) -> String {
        let mut rendered = self.template.to_string();
        for (placeholder, value) in &self.args {
            rendered = rendered.replace(placeholder, value);
        }
        rendered
    }
}

/// Result of a single diagnostic evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    /// Outcome classification.
    pub severity: Severity,

    /// Recommendation for the operator.
    pub message: Message,

    /// Raw metric behind the classification, when one exists.
    pub observed_value: Option<u64>,
}

impl CheckResult {
    /// Create a result with no observed metric.
    pub fn new(severity: Severity, message: Message) -> Self {
        Self {
            severity,
            message,
            observed_value: None,
        }
    }

    /// Attach the raw metric that produced this result.
    pub fn with_observed(mut self, value: u64) -> Self {
        self.observed_value = Some(value);
        self
    }
}
