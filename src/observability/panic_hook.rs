//! Custom panic hook for structured crash reports.
//!
//! When extraction crashes the report names the type and phase that were
//! being processed, alongside the panic message and location.

use super::context::{get_current_context, ExtractionContextSnapshot};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the custom panic hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();

    eprintln!();
    eprintln!("modelschema {} crashed", VERSION);
    eprintln!("  panic: {}", extract_panic_message(info));
    if let Some(location) = info.location() {
        eprintln!(
            "  location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }
    print_context_section(&context);
    eprintln!("  Set RUST_BACKTRACE=1 for a backtrace.");
}

fn print_context_section(context: &ExtractionContextSnapshot) {
    match &context.phase {
        Some(phase) => eprintln!("  phase: {}", phase),
        None => eprintln!("  phase: (not set - crash occurred before extraction started)"),
    }
    if let Some(name) = &context.current_type {
        eprintln!("  type: {}", name);
    }
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
