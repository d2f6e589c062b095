use std::ops::ControlFlow;

use algoviz_core::control::{Focus, StepControl};

use super::{checkpoint, SortOutcome};

/// Adjacent-pair passes, each one settling the largest remaining item
///
/// Steps once per swap. A pass without swaps ends the sort early.
pub fn bubble_sort<T, C>(items: &mut [T], control: &mut C) -> SortOutcome
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
    let len = items.len();
    for pass in 0..len {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            checkpoint(control)?;
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
                control.step(items, Focus::pair(j, j + 1));
            }
        }
        if !swapped {
            break;
        }
    }
    ControlFlow::Continue(())
}
