use crate::core::actions::cancellation::Cancelled;
use crate::core::data::pseudocode::{AlgorithmInfo, PseudocodeLine};
use crate::core::data::sortable_sequence::SortableSequence;
use crate::core::engine::stepper::Stepper;

pub const QUICK_SORT: AlgorithmInfo = AlgorithmInfo {
    title: "Quick Sort",
    complexity: "O(n log n)",
    pseudocode: &[
        PseudocodeLine::new("function quickSort(array, low, high):", 0),
        PseudocodeLine::new("  if low < high:", 1),
        PseudocodeLine::new("    pi = partition(array, low, high)", 2),
        PseudocodeLine::new("    quickSort(array, low, pi-1)", 2),
        PseudocodeLine::new("    quickSort(array, pi+1, high)", 2),
    ],
};

const LINE_GUARD: usize = 1;
const LINE_PARTITION: usize = 2;
const LINE_LEFT: usize = 3;
const LINE_RIGHT: usize = 4;

pub(crate) fn quick_sort(
    sequence: &mut SortableSequence,
    stepper: &Stepper<'_>,
) -> Result<(), Cancelled> {
    if sequence.len() < 2 {
        return Ok(());
    }

    let high = sequence.len() - 1;
    quick_sort_range(sequence, 0, high, stepper)
}

/// Sorts the inclusive range `[low, high]`.
fn quick_sort_range(
    sequence: &mut SortableSequence,
    low: usize,
    high: usize,
    stepper: &Stepper<'_>,
) -> Result<(), Cancelled> {
    stepper.highlight(LINE_GUARD);
    if low >= high {
        return Ok(());
    }

    stepper.highlight(LINE_PARTITION);
    let pivot_index = partition(sequence, low, high, stepper)?;

    stepper.highlight(LINE_LEFT);
    if pivot_index > low {
        quick_sort_range(sequence, low, pivot_index - 1, stepper)?;
    }

    stepper.highlight(LINE_RIGHT);
    quick_sort_range(sequence, pivot_index + 1, high, stepper)
}

/// Lomuto partition around `sequence[high]`; returns the pivot's final index.
pub(crate) fn partition(
    sequence: &mut SortableSequence,
    low: usize,
    high: usize,
    stepper: &Stepper<'_>,
) -> Result<usize, Cancelled> {
    let pivot = sequence.get(high);
    let mut boundary = low;

    for j in low..high {
        if sequence.get(j) < pivot {
            sequence.swap(boundary, j);
            boundary += 1;
            stepper.publish_sequence(sequence);
            stepper.wait()?;
        }
    }

    sequence.swap(boundary, high);
    stepper.publish_sequence(sequence);
    stepper.wait()?;

    Ok(boundary)
}
