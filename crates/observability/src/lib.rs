//! Tracing/logging setup shared by binaries and test harnesses.
//!
//! The domain crates are silent by design; infrastructure logs through
//! `tracing`, and this crate wires up the subscriber.

/// Initialize process-wide tracing/logging.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
