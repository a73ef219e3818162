use crate::core::actions::cancellation::Cancelled;
use crate::core::data::pseudocode::{AlgorithmInfo, PseudocodeLine};
use crate::core::data::sortable_sequence::SortableSequence;
use crate::core::engine::stepper::Stepper;

pub const MERGE_SORT: AlgorithmInfo = AlgorithmInfo {
    title: "Merge Sort",
    complexity: "O(n log n)",
    pseudocode: &[
        PseudocodeLine::new("function mergeSort(array):", 0),
        PseudocodeLine::new("  if length(array) <= 1: return array", 1),
        PseudocodeLine::new("  mid = length(array) / 2", 1),
        PseudocodeLine::new("  left = mergeSort(array[0:mid])", 1),
        PseudocodeLine::new("  right = mergeSort(array[mid:end])", 1),
        PseudocodeLine::new("  return merge(left, right)", 1),
    ],
};

const LINE_BASE_CASE: usize = 1;
const LINE_MIDPOINT: usize = 2;
const LINE_LEFT: usize = 3;
const LINE_RIGHT: usize = 4;
const LINE_MERGE: usize = 5;

pub(crate) fn merge_sort(
    sequence: &mut SortableSequence,
    stepper: &Stepper<'_>,
) -> Result<(), Cancelled> {
    let len = sequence.len();
    merge_sort_range(sequence, 0, len, stepper)
}

/// Sorts the half-open range `[low, high)`.
fn merge_sort_range(
    sequence: &mut SortableSequence,
    low: usize,
    high: usize,
    stepper: &Stepper<'_>,
) -> Result<(), Cancelled> {
    stepper.highlight(LINE_BASE_CASE);
    if high - low <= 1 {
        return Ok(());
    }

    stepper.highlight(LINE_MIDPOINT);
    let mid = low + (high - low) / 2;

    stepper.highlight(LINE_LEFT);
    merge_sort_range(sequence, low, mid, stepper)?;

    stepper.highlight(LINE_RIGHT);
    merge_sort_range(sequence, mid, high, stepper)?;

    stepper.highlight(LINE_MERGE);
    merge(sequence, low, mid, high, stepper)
}

/// Writes the merged runs back in place, one published write at a time.
fn merge(
    sequence: &mut SortableSequence,
    low: usize,
    mid: usize,
    high: usize,
    stepper: &Stepper<'_>,
) -> Result<(), Cancelled> {
    let left = sequence.values()[low..mid].to_vec();
    let right = sequence.values()[mid..high].to_vec();
    let (mut l, mut r) = (0, 0);

    for index in low..high {
        // Ties take from the left run so equal values keep their order.
        let value = if r >= right.len() || (l < left.len() && left[l] <= right[r]) {
            l += 1;
            left[l - 1]
        } else {
            r += 1;
            right[r - 1]
        };

        if sequence.get(index) != value {
            sequence.set(index, value);
            stepper.publish_sequence(sequence);
            stepper.wait()?;
        }
    }

    Ok(())
}
