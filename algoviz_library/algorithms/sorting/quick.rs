use std::ops::ControlFlow;

use algoviz_core::control::{Focus, StepControl};

use super::{checkpoint, SortOutcome};

/// Quick sort with a Lomuto partition around the last item of each range
///
/// Steps once per comparison against the pivot and once for placing the
/// pivot. The smaller partition is sorted by recursion and the larger one by
/// the loop, which keeps the call depth logarithmic on sorted input.
pub fn quick_sort<T, C>(items: &mut [T], control: &mut C) -> SortOutcome
where
    T: Ord,
    C: StepControl<[T]> + ?Sized,
{
    sort_range(items, 0, items.len(), control).into()
}

fn sort_range<T, C>(items: &mut [T], mut lo: usize, mut hi: usize, control: &mut C) -> ControlFlow<()>
where
    T: Ord,
    C: StepControl<[T]> + ?Sized,
{
    while hi - lo > 1 {
        let pivot = partition(items, lo, hi, control)?;
        if pivot - lo < hi - pivot {
            sort_range(items, lo, pivot, control)?;
            lo = pivot + 1;
        } else {
            sort_range(items, pivot + 1, hi, control)?;
            hi = pivot;
        }
    }
    ControlFlow::Continue(())
}

/// Returns the pivot's final index
fn partition<T, C>(items: &mut [T], lo: usize, hi: usize, control: &mut C) -> ControlFlow<(), usize>
where
    T: Ord,
    C: StepControl<[T]> + ?Sized,
{
    let pivot = hi - 1;
    let mut store = lo;
    for i in lo..pivot {
        checkpoint(control)?;
        if items[i] < items[pivot] {
            items.swap(i, store);
            store += 1;
        }
        control.step(items, Focus::pair(i, pivot));
    }

    checkpoint(control)?;
    items.swap(store, pivot);
    control.step(items, Focus::pair(store, pivot));
    ControlFlow::Continue(store)
}
