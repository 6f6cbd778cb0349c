//! Diagnostics emitted during extraction.
//!
//! Diagnostics are values, never panics or early returns: the extraction of
//! the remaining candidates continues and the caller decides, from the
//! severities, whether the type failed.

use super::descriptor::{MethodDescriptor, TypeName};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Which rule or hook raised a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    InvalidGetter,
    InvalidSetter,
    OverriddenMethods,
    OverloadedMethods,
    IncompleteCoverage,
    InvalidHierarchy,
    UnsupportedPropertyType,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGetter => "invalid-getter",
            Self::InvalidSetter => "invalid-setter",
            Self::OverriddenMethods => "overridden-methods",
            Self::OverloadedMethods => "overloaded-methods",
            Self::IncompleteCoverage => "incomplete-coverage",
            Self::InvalidHierarchy => "invalid-hierarchy",
            Self::UnsupportedPropertyType => "unsupported-property-type",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    /// Type whose extraction produced the event.
    pub subject: TypeName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodDescriptor>,
    pub message: String,
}

impl DiagnosticEvent {
    pub fn new(
        severity: Severity,
        kind: DiagnosticKind,
        subject: TypeName,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind,
            subject,
            methods: Vec::new(),
            message: message.into(),
        }
    }

    pub fn error(kind: DiagnosticKind, subject: TypeName, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, kind, subject, message)
    }

    pub fn warning(kind: DiagnosticKind, subject: TypeName, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, kind, subject, message)
    }

    pub fn with_methods<'a>(mut self, methods: impl IntoIterator<Item = &'a MethodDescriptor>) -> Self {
        self.methods.extend(methods.into_iter().cloned());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] {}: {}",
            self.severity, self.kind, self.subject, self.message
        )?;
        if !self.methods.is_empty() {
            let methods: Vec<String> = self.methods.iter().map(ToString::to_string).collect();
            write!(f, " ({})", methods.join(", "))?;
        }
        Ok(())
    }
}

/// Lowest severity that makes an extraction count as failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticThreshold {
    Warning,
    #[default]
    Error,
}

impl DiagnosticThreshold {
    pub fn is_exceeded_by(&self, severity: Severity) -> bool {
        match self {
            Self::Warning => true,
            Self::Error => severity == Severity::Error,
        }
    }

    pub fn any_exceeded<'a>(&self, events: impl IntoIterator<Item = &'a DiagnosticEvent>) -> bool {
        events.into_iter().any(|e| self.is_exceeded_by(e.severity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_methods() {
        let getter = MethodDescriptor::new("getx", "Person", "String");
        let event = DiagnosticEvent::error(
            DiagnosticKind::InvalidGetter,
            TypeName::from("Person"),
            "bad name",
        )
        .with_methods([&getter]);

        assert_eq!(
            event.to_string(),
            "error[invalid-getter] Person: bad name (Person.getx())"
        );
    }

    #[test]
    fn test_threshold() {
        let warning = DiagnosticEvent::warning(
            DiagnosticKind::OverriddenMethods,
            TypeName::from("T"),
            "w",
        );
        assert!(!DiagnosticThreshold::Error.any_exceeded([&warning]));
        assert!(DiagnosticThreshold::Warning.any_exceeded([&warning]));
        assert!(Severity::Warning < Severity::Error);
    }
}
