//! Test harnesses for Sluice components.
//!
//! Provides `RecordingEmitter` for capturing what a component emits and
//! `ComponentHarness` for running a component through its lifecycle
//! without a runtime.

pub mod emitter;
pub mod harness;

pub use emitter::{EmittedEvent, RecordingEmitter};
pub use harness::ComponentHarness;
