use std::ops::ControlFlow;

use algoviz_core::control::{Focus, StepControl};

use super::{checkpoint, SortOutcome};

/// Top-down merge sort
///
/// Each merge reads both sorted halves into a scratch buffer, stepping once
/// per comparison, then writes the buffer back in one step. A run cancelled
/// mid-merge drops the buffer without writing it.
pub fn merge_sort<T, C>(items: &mut [T], control: &mut C) -> SortOutcome
where
    T: Ord + Clone,
    C: StepControl<[T]> + ?Sized,
{
    sort_range(items, 0, items.len(), control).into()
}

fn sort_range<T, C>(items: &mut [T], lo: usize, hi: usize, control: &mut C) -> ControlFlow<()>
where
    T: Ord + Clone,
    C: StepControl<[T]> + ?Sized,
{
    if hi - lo < 2 {
        return ControlFlow::Continue(());
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(items, lo, mid, control)?;
    sort_range(items, mid, hi, control)?;
    merge(items, lo, mid, hi, control)
}

fn merge<T, C>(items: &mut [T], lo: usize, mid: usize, hi: usize, control: &mut C) -> ControlFlow<()>
where
    T: Ord + Clone,
    C: StepControl<[T]> + ?Sized,
{
    let mut buffer = Vec::with_capacity(hi - lo);
    let (mut left, mut right) = (lo, mid);

    while left < mid && right < hi {
        checkpoint(control)?;
        let focus = Focus::pair(left, right);
        if items[right] < items[left] {
            buffer.push(items[right].clone());
            right += 1;
        } else {
            buffer.push(items[left].clone());
            left += 1;
        }
        control.step(items, focus);
    }
    buffer.extend_from_slice(&items[left..mid]);
    buffer.extend_from_slice(&items[right..hi]);

    checkpoint(control)?;
    items[lo..hi].clone_from_slice(&buffer);
    control.step(items, Focus::pair(lo, hi - 1));
    ControlFlow::Continue(())
}
