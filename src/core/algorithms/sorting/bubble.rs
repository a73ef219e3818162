use crate::core::actions::cancellation::Cancelled;
use crate::core::data::pseudocode::{AlgorithmInfo, PseudocodeLine};
use crate::core::data::sortable_sequence::SortableSequence;
use crate::core::engine::stepper::Stepper;

pub const BUBBLE_SORT: AlgorithmInfo = AlgorithmInfo {
    title: "Bubble Sort",
    complexity: "O(n²)",
    pseudocode: &[
        PseudocodeLine::new("function bubbleSort(array):", 0),
        PseudocodeLine::new("  n = length(array)", 0),
        PseudocodeLine::new("  for i from 0 to n-1:", 0),
        PseudocodeLine::new("    for j from 0 to n-i-2:", 1),
        PseudocodeLine::new("      if array[j] > array[j+1]:", 2),
        PseudocodeLine::new("        swap(array[j], array[j+1])", 3),
    ],
};

const LINE_LENGTH: usize = 1;
const LINE_OUTER_LOOP: usize = 2;
const LINE_INNER_LOOP: usize = 3;
const LINE_COMPARE: usize = 4;
const LINE_SWAP: usize = 5;

/// Adjacent compare/swap passes; publishes and waits after every swap.
pub(crate) fn bubble_sort(
    sequence: &mut SortableSequence,
    stepper: &Stepper<'_>,
) -> Result<(), Cancelled> {
    let n = sequence.len();

    stepper.highlight(LINE_LENGTH);
    stepper.wait()?;

    for i in 0..n {
        stepper.highlight(LINE_OUTER_LOOP);
        for j in 0..n - i - 1 {
            stepper.highlight(LINE_INNER_LOOP);
            if sequence.get(j) > sequence.get(j + 1) {
                stepper.highlight(LINE_COMPARE);
                sequence.swap(j, j + 1);
                stepper.publish_sequence(sequence);
                stepper.highlight(LINE_SWAP);
                stepper.wait()?;
            }
        }
    }

    Ok(())
}
