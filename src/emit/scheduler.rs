//! Breadth-first definition scheduler

use super::emitter::RecordEmitter;
use super::types::{EmittedDefinition, PendingRecord};
use crate::error::{Error, Result};
use std::collections::{HashSet, VecDeque};
use tracing::trace;

/// Drains a FIFO queue of pending records, one declaration per step.
///
/// Records discovered while emitting a declaration are queued behind every
/// record already waiting, so declarations come out in breadth-first order.
/// A type name can only be declared once; a second record with the same name
/// is an error. The iterator is fused: after the queue empties or an error is
/// returned it only yields `None`.
#[derive(Debug)]
pub struct DefinitionScheduler<'a> {
    emitter: RecordEmitter,
    queue: VecDeque<PendingRecord<'a>>,
    /// Type names already declared
    declared: HashSet<String>,
    failed: bool,
}

impl<'a> DefinitionScheduler<'a> {
    /// Create a scheduler seeded with one record
    pub fn new(emitter: RecordEmitter, seed: PendingRecord<'a>) -> Self {
        Self {
            emitter,
            queue: VecDeque::from([seed]),
            declared: HashSet::new(),
            failed: false,
        }
    }

    /// Mark a type name as declared outside the scheduler (a map alias)
    #[must_use]
    pub fn with_reserved(mut self, name: impl Into<String>) -> Self {
        self.declared.insert(name.into());
        self
    }

    /// Number of records still waiting
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    fn step(&mut self, task: PendingRecord<'a>) -> Result<EmittedDefinition> {
        if !self.declared.insert(task.name.clone()) {
            return Err(Error::DuplicateRecord { name: task.name });
        }
        let (definition, discovered) = self.emitter.emit(&task)?;

        for nested in discovered {
            trace!(parent = %task.name, record = %nested.name, "Queued nested record");
            self.queue.push_back(nested);
        }

        Ok(definition)
    }
}

impl Iterator for DefinitionScheduler<'_> {
    type Item = Result<EmittedDefinition>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let task = self.queue.pop_front()?;
        let result = self.step(task);
        if result.is_err() {
            self.failed = true;
            self.queue.clear();
        }
        Some(result)
    }
}

impl std::iter::FusedIterator for DefinitionScheduler<'_> {}
