use std::ops::ControlFlow;

use algoviz_core::control::{Focus, StepControl};

use super::{checkpoint, SortOutcome};

/// Scan the unsorted suffix for its minimum and swap it to the front
///
/// Steps once per comparison and once per swap.
pub fn selection_sort<T, C>(items: &mut [T], control: &mut C) -> SortOutcome
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
    for i in 0..len {
        let mut min = i;
        for j in i + 1..len {
            checkpoint(control)?;
            if items[j] < items[min] {
                min = j;
            }
            control.step(items, Focus::pair(j, min));
        }
        if min != i {
            checkpoint(control)?;
            items.swap(i, min);
            control.step(items, Focus::pair(i, min));
        }
    }
    ControlFlow::Continue(())
}
