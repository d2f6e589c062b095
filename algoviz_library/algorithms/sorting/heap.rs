use std::ops::ControlFlow;

use algoviz_core::control::{Focus, StepControl};

use super::{checkpoint, SortOutcome};

/// Heap sort over an implicit max-heap
///
/// Builds the heap bottom-up from `len / 2 - 1` down to the root, then swaps
/// the root behind the shrinking heap and sifts the new root down. Steps once
/// per swap.
pub fn heap_sort<T, C>(items: &mut [T], control: &mut C) -> SortOutcome
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
    for root in (0..len / 2).rev() {
        sift_down(items, len, root, control)?;
    }
    for end in (1..len).rev() {
        checkpoint(control)?;
        items.swap(0, end);
        control.step(items, Focus::pair(0, end));
        sift_down(items, end, 0, control)?;
    }
    ControlFlow::Continue(())
}

/// Restore the heap property below `root` within `items[..size]`
fn sift_down<T, C>(items: &mut [T], size: usize, mut root: usize, control: &mut C) -> ControlFlow<()>
where
    T: Ord,
    C: StepControl<[T]> + ?Sized,
{
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;
        if left < size && items[left] > items[largest] {
            largest = left;
        }
        if right < size && items[right] > items[largest] {
            largest = right;
        }
        if largest == root {
            return ControlFlow::Continue(());
        }

        checkpoint(control)?;
        items.swap(root, largest);
        control.step(items, Focus::pair(root, largest));
        root = largest;
    }
}
