//! Review request queue.
//!
//! Holds free-text requests for a single intake/processing pass. Each pass
//! starts from an empty queue and ends with the queue drained.

use std::collections::VecDeque;

use tracing::debug;

use crate::config::review::TERMINATORS;

/// Result of offering one line to the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intake {
    Queued,
    /// Blank input; nothing was queued.
    Ignored,
    /// A terminator was entered; intake is over.
    Finished,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewQueue {
    items: VecDeque<String>,
}

impl ReviewQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_terminator(input: &str) -> bool {
        let input = input.trim();
        TERMINATORS.iter().any(|t| input.eq_ignore_ascii_case(t))
    }

    /// Discard anything left from a previous session.
    pub fn begin_session(&mut self) {
        self.items.clear();
    }

    pub fn enqueue(&mut self, item: &str) -> Intake {
        let item = item.trim();
        if Self::is_terminator(item) {
            return Intake::Finished;
        }
        if item.is_empty() {
            return Intake::Ignored;
        }
        self.items.push_back(item.to_string());
        Intake::Queued
    }

    /// Remove every request in arrival order.
    pub fn drain_and_process(&mut self) -> Vec<String> {
        debug!("Processing {} review request(s)", self.items.len());
        self.items.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
