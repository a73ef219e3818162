//! Comparison sorts that animate a [`SortableSequence`] one swap at a time.

pub mod bubble;
pub mod merge;
pub mod quick;

use crate::core::actions::cancellation::Cancelled;
use crate::core::data::pseudocode::AlgorithmInfo;
use crate::core::data::sortable_sequence::SortableSequence;
use crate::core::engine::stepper::Stepper;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKind {
    Bubble,
    Quick,
    Merge,
}

impl SortKind {
    pub const ALL: [SortKind; 3] = [SortKind::Bubble, SortKind::Quick, SortKind::Merge];

    #[must_use]
    pub fn display_name(self) -> &'static str {
        self.info().title
    }

    #[must_use]
    pub fn info(self) -> &'static AlgorithmInfo {
        match self {
            SortKind::Bubble => &bubble::BUBBLE_SORT,
            SortKind::Quick => &quick::QUICK_SORT,
            SortKind::Merge => &merge::MERGE_SORT,
        }
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOutcome {
    Completed,
    Cancelled,
}

/// Runs one sort to completion or until the controller stops it.
///
/// A stop leaves `sequence` exactly as it was after the last published swap.
pub fn run_sort(kind: SortKind, sequence: &mut SortableSequence, stepper: &Stepper<'_>) -> SortOutcome {
    debug!(algorithm = %kind, len = sequence.len(), "sort started");

    let result = match kind {
        SortKind::Bubble => bubble::bubble_sort(sequence, stepper),
        SortKind::Quick => quick::quick_sort(sequence, stepper),
        SortKind::Merge => merge::merge_sort(sequence, stepper),
    };

    match result {
        Ok(()) => {
            debug!(algorithm = %kind, "sort completed");
            SortOutcome::Completed
        }
        Err(Cancelled) => {
            debug!(algorithm = %kind, "sort cancelled");
            SortOutcome::Cancelled
        }
    }
}
