//! Struct definition emission
//!
//! Turns record samples into Go struct declarations.
//!
//! # Overview
//!
//! The [`DefinitionScheduler`] owns a FIFO queue of [`PendingRecord`]s. Each
//! step pops one record, hands it to the [`RecordEmitter`], queues the nested
//! records the emitter discovered and yields the finished declaration.
//! Declarations therefore come out breadth first, in discovery order.

mod emitter;
mod scheduler;
mod types;

pub use emitter::{field_tags, RecordEmitter};
pub use scheduler::DefinitionScheduler;
pub use types::{EmittedDefinition, PendingRecord};
