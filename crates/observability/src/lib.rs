//! Tracing and logging setup shared by the pizzeria binaries.

/// Initialize process-wide tracing.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, writer, format).
pub mod tracing;
