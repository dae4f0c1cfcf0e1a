//! Explicit change-notification primitives.
//!
//! This module provides the building block the stores are made of:
//! - Signals: shared values with explicit watcher registration
//! - Watch guards: RAII deregistration for watchers

mod signal;

pub use signal::{Signal, WatchGuard};
