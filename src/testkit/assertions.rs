//! Assertion macros for extraction results.

/// Assert that a diagnostics slice holds an event of the given kind whose
/// message contains `pattern`, and return it.
///
/// ```rust,ignore
/// let event = assert_has_diagnostic!(result.diagnostics, DiagnosticKind::InvalidGetter, "uppercase");
/// ```
#[macro_export]
macro_rules! assert_has_diagnostic {
    ($diagnostics:expr, $kind:expr) => {
        $crate::assert_has_diagnostic!($diagnostics, $kind, "")
    };
    ($diagnostics:expr, $kind:expr, $pattern:expr) => {{
        let kind = $kind;
        let pattern: &str = $pattern;
        match $diagnostics
            .iter()
            .find(|e| e.kind == kind && e.message.contains(pattern))
        {
            Some(event) => event.clone(),
            None => panic!(
                "Expected a {} diagnostic containing {:?}, got: {:#?}\n  at {}:{}:{}",
                kind,
                pattern,
                $diagnostics,
                file!(),
                line!(),
                column!()
            ),
        }
    }};
}
