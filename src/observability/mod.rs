//! Observability infrastructure for crash reports and debugging.
//!
//! - **Panic Hook**: crash report naming the type and phase being extracted
//! - **Context Tracking**: thread-local extraction phase and current type
//! - **Logging**: `tracing-subscriber` setup for the CLI
//!
//! ```ignore
//! use modelschema::observability::{set_phase, ExtractionPhase};
//!
//! let _phase = set_phase(ExtractionPhase::PropertyBinding);
//! // If a panic occurs here, the crash report shows the phase
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    get_current_context, reset_context, set_current_type, set_phase, ContextGuard,
    ExtractionContextSnapshot, ExtractionPhase,
};
pub use panic_hook::install_panic_hook;
pub use self::tracing::{init_logging, level_for_verbosity};
