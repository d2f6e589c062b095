use std::ops::ControlFlow;

use algoviz_core::control::{Focus, StepControl};

use super::{checkpoint, SortOutcome};

/// Walk each item left past every larger predecessor
///
/// The walk is a chain of adjacent swaps, one step each, so the slice stays a
/// permutation at every step.
pub fn insertion_sort<T, C>(items: &mut [T], control: &mut C) -> SortOutcome
where
    T: Ord,
    C: StepControl<[T]> + ?Sized,
{
    sort(items, control).into()
}

fn sort<T, C>(items: &mut [T], control: &mut C) -> ControlFlow<()>
where
    T: Ord,
    C: StepControl<[T]> + ?Sized,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 {
            checkpoint(control)?;
            if items[j - 1] <= items[j] {
                break;
            }
            items.swap(j - 1, j);
            control.step(items, Focus::pair(j - 1, j));
            j -= 1;
        }
    }
    ControlFlow::Continue(())
}
