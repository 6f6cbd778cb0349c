//! Thread-local context tracking for crash reports.
//!
//! Each thread records the extraction phase and the type it is working on.
//! Extractions on rayon workers each carry their own context. Guards restore
//! the previous context on drop so nested extractions unwind correctly.

use std::cell::RefCell;

thread_local! {
    static CURRENT_CONTEXT: RefCell<ExtractionContextSnapshot> =
        const { RefCell::new(ExtractionContextSnapshot::new()) };
}

/// What the current thread was doing.
#[derive(Debug, Clone, Default)]
pub struct ExtractionContextSnapshot {
    pub phase: Option<ExtractionPhase>,
    pub current_type: Option<String>,
}

impl ExtractionContextSnapshot {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_type: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionPhase {
    /// Loading the type catalog and configuration
    Loading,
    /// Running the hierarchy validation hook
    HierarchyValidation,
    /// Grouping accessors and binding properties
    PropertyBinding,
    /// Comparing handled methods against the method set
    CompletenessCheck,
    /// Aspects and schema assembly
    SchemaAssembly,
    /// Writing reports
    OutputGeneration,
}

impl std::fmt::Display for ExtractionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::HierarchyValidation => write!(f, "hierarchy_validation"),
            Self::PropertyBinding => write!(f, "property_binding"),
            Self::CompletenessCheck => write!(f, "completeness_check"),
            Self::SchemaAssembly => write!(f, "schema_assembly"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: ExtractionContextSnapshot,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update(apply: impl FnOnce(&mut ExtractionContextSnapshot)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        apply(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current extraction phase until the guard drops.
#[must_use]
pub fn set_phase(phase: ExtractionPhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

/// Set the type being extracted until the guard drops.
#[must_use]
pub fn set_current_type(name: impl Into<String>) -> ContextGuard {
    let name = name.into();
    update(move |ctx| ctx.current_type = Some(name))
}

#[must_use]
pub fn get_current_context() -> ExtractionContextSnapshot {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Reset the current thread's context to empty.
pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = ExtractionContextSnapshot::new();
    });
}
